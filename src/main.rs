// src/main.rs — 命令行入口

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use emoji_wifi::config::Config;
use emoji_wifi::generator::{self, clamp_password_length};
use emoji_wifi::history::{HistorySource, HistoryStore};
use emoji_wifi::join::{Backend, NetworkJoiner, SystemJoiner};
use emoji_wifi::scan::{self, ScanSource};
use emoji_wifi::types::{CharClasses, NameStyle};
use emoji_wifi::{notify, payload, qr, Catalog};
use std::path::{Path, PathBuf};
use time::format_description::well_known::Rfc3339;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};
use tracing_subscriber::EnvFilter;

// ════════════════════════════════════════════════════════════════
// CLI 参数
// ════════════════════════════════════════════════════════════════

#[derive(Parser)]
#[command(name = "emoji-wifi", about = "表情 Wi-Fi 名称 / 密码 / 入网二维码工具", version)]
struct Cli {
    /// 配置文件路径
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// 输出更多日志（也可用 RUST_LOG）
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Option<Cmd>,
}

#[derive(Subcommand)]
enum Cmd {
    /// 生成表情 SSID 与密码（默认命令）
    Generate(GenerateArgs),
    /// 只生成密码
    Password {
        #[command(flatten)]
        pw: PasswordArgs,
    },
    /// 把 SSID 与密码编码为入网文本
    Encode {
        ssid: String,
        password: String,
        /// 同时输出二维码
        #[arg(long)]
        qr: bool,
        /// 二维码另存为 PNG
        #[arg(long, value_name = "FILE")]
        png: Option<PathBuf>,
    },
    /// 解析入网文本
    Decode {
        payload: String,
        /// 按字段完整解析，输出认证类型与隐藏标记
        #[arg(long)]
        frame: bool,
        #[arg(long)]
        json: bool,
    },
    /// 处理扫码得到的文本（图像识别交给 zbarimg / zbarcam 等工具）
    #[command(subcommand)]
    Scan(ScanCmd),
    /// 加入 Wi-Fi
    Join {
        ssid: String,
        password: String,
        #[command(flatten)]
        join: JoinArgs,
    },
    /// 历史记录
    #[command(subcommand)]
    History(HistoryCmd),
    /// 列出或搜索表情组合
    Combos {
        /// 名称（忽略大小写）或表情
        query: Option<String>,
    },
}

#[derive(Args, Default)]
struct PasswordArgs {
    /// 密码长度（截到 8–63）
    #[arg(short, long)]
    length: Option<usize>,
    #[arg(long)]
    no_upper: bool,
    #[arg(long)]
    no_lower: bool,
    #[arg(long)]
    no_digits: bool,
    #[arg(long)]
    no_special: bool,
}

#[derive(Args, Default)]
struct GenerateArgs {
    #[arg(short, long, value_enum)]
    style: Option<NameStyle>,
    #[command(flatten)]
    pw: PasswordArgs,
    /// 输出二维码
    #[arg(long)]
    qr: bool,
    /// 二维码另存为 PNG
    #[arg(long, value_name = "FILE")]
    png: Option<PathBuf>,
    /// 不写历史记录
    #[arg(long)]
    no_history: bool,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Default)]
struct JoinArgs {
    #[arg(long, value_enum)]
    backend: Option<Backend>,
    /// 网卡名
    #[arg(short, long)]
    interface: Option<String>,
}

#[derive(Args)]
struct ScanOpts {
    /// 解析成功后立即入网
    #[arg(long)]
    join: bool,
    #[arg(long)]
    no_history: bool,
    #[command(flatten)]
    join_args: JoinArgs,
}

#[derive(Subcommand)]
enum ScanCmd {
    /// 从图片识别出的文本（参数、文件或 stdin）
    Import {
        payload: Option<String>,
        /// 从文件读取，"-" 表示 stdin
        #[arg(short, long, conflicts_with = "payload")]
        file: Option<PathBuf>,
        #[command(flatten)]
        opts: ScanOpts,
    },
    /// 逐行读取 stdin（如 `zbarcam --raw`），取第一个入网码
    Live {
        #[command(flatten)]
        opts: ScanOpts,
    },
}

#[derive(Subcommand)]
enum HistoryCmd {
    /// 列出历史（新的在前）
    List {
        /// 显示明文密码
        #[arg(long)]
        show_passwords: bool,
        #[arg(long)]
        json: bool,
    },
    /// 按 id（或唯一前缀）删除
    Delete { id: String },
    /// 清空
    Clear,
}

// ════════════════════════════════════════════════════════════════
// 入口
// ════════════════════════════════════════════════════════════════

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "emoji_wifi=info" } else { "emoji_wifi=warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.parse()?))
        .init();

    let cfg = Config::load(cli.config.as_deref())?;

    match cli.cmd.unwrap_or(Cmd::Generate(GenerateArgs::default())) {
        Cmd::Generate(args) => cmd_generate(&cfg, args)?,
        Cmd::Password { pw } => {
            let (length, classes) = password_settings(&cfg, &pw)?;
            println!("{}", generator::generate_password(length, classes, &mut rand::thread_rng()));
        }
        Cmd::Encode {
            ssid,
            password,
            qr,
            png,
        } => {
            let text = payload::encode(&ssid, &password);
            println!("{text}");
            if qr {
                println!("{}", qr::render(&text)?);
            }
            if let Some(path) = png {
                qr::write_png(&text, &path)?;
            }
        }
        Cmd::Decode {
            payload: text,
            frame,
            json,
        } => cmd_decode(&text, frame, json)?,
        Cmd::Scan(sc) => cmd_scan(&cfg, sc).await?,
        Cmd::Join {
            ssid,
            password,
            join,
        } => {
            if !do_join(&cfg, &join, &ssid, &password).await {
                std::process::exit(1);
            }
        }
        Cmd::History(hc) => cmd_history(&cfg, hc)?,
        Cmd::Combos { query } => {
            let catalog = Catalog::load(&cfg.resource_dir());
            let hits = catalog.search_combinations(query.as_deref().unwrap_or(""));
            if let Some(q) = &query {
                eprintln!("找到 {} 个组合匹配「{q}」", hits.len());
            }
            for c in hits {
                println!("{}\t{}", c.emojis, c.name);
            }
        }
    }

    Ok(())
}

// ════════════════════════════════════════════════════════════════
// 生成
// ════════════════════════════════════════════════════════════════

/// 合并配置与命令行开关；至少保留一种字符类
fn password_settings(cfg: &Config, pw: &PasswordArgs) -> Result<(usize, CharClasses)> {
    let base = cfg.char_classes();
    let classes = CharClasses {
        upper: base.upper && !pw.no_upper,
        lower: base.lower && !pw.no_lower,
        digits: base.digits && !pw.no_digits,
        special: base.special && !pw.no_special,
    };
    if !classes.any() {
        bail!("至少需要启用一种字符类型");
    }
    let length = clamp_password_length(pw.length.unwrap_or(cfg.password_length));
    Ok((length, classes))
}

fn cmd_generate(cfg: &Config, args: GenerateArgs) -> Result<()> {
    let (length, classes) = password_settings(cfg, &args.pw)?;
    let style = args.style.unwrap_or(cfg.style);
    let catalog = Catalog::load(&cfg.resource_dir());

    let net = generator::generate_network(style, length, classes, &catalog, &mut rand::thread_rng());
    let text = payload::encode(&net.ssid, &net.password);

    if !args.no_history {
        if let Some(mut store) = open_history(cfg) {
            let added = store.add_entry(&net.ssid, &net.password, &net.description, HistorySource::Generated);
            if let Err(e) = added {
                // commit 已记 warn，生成结果照常输出
                tracing::debug!("生成记录未落盘: {e}");
            }
        }
    }

    if args.json {
        let out = serde_json::json!({
            "ssid": net.ssid,
            "password": net.password,
            "description": net.description,
            "style": style.to_string(),
            "payload": text,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("SSID     : {}", net.ssid);
        println!("描述     : {}", net.description);
        println!("密码     : {}", net.password);
        println!("入网文本 : {text}");
    }
    if args.qr {
        println!("{}", qr::render(&text)?);
    }
    if let Some(path) = &args.png {
        qr::write_png(&text, path)?;
    }
    Ok(())
}

// ════════════════════════════════════════════════════════════════
// 解析 & 扫码
// ════════════════════════════════════════════════════════════════

fn cmd_decode(text: &str, frame: bool, json: bool) -> Result<()> {
    if frame {
        let Some(f) = payload::parse_frame(text) else {
            bail!("不是有效的入网二维码（缺少 SSID）");
        };
        if json {
            println!("{}", serde_json::to_string_pretty(&f)?);
        } else {
            println!("SSID : {}", f.ssid);
            println!("密码 : {}", f.password.as_deref().unwrap_or("（无）"));
            println!("安全 : {}", f.security);
            println!("隐藏 : {}", f.hidden);
        }
        return Ok(());
    }

    let creds = payload::decode(text);
    if json {
        println!("{}", serde_json::to_string_pretty(&creds)?);
    } else if creds.is_empty() {
        println!("未找到 Wi-Fi 信息");
    } else {
        println!("SSID : {}", creds.ssid.as_deref().unwrap_or("（未找到）"));
        println!("密码 : {}", creds.password.as_deref().unwrap_or("（未找到）"));
    }
    Ok(())
}

async fn cmd_scan(cfg: &Config, sc: ScanCmd) -> Result<()> {
    let (source, text, opts) = match sc {
        ScanCmd::Import {
            payload: text,
            file,
            opts,
        } => {
            let text = match (text, file) {
                (Some(t), _) => t,
                (None, Some(path)) => read_payload_file(&path).await?,
                (None, None) => read_stdin().await?,
            };
            (ScanSource::ImportedImage, text, opts)
        }
        ScanCmd::Live { opts } => {
            let Some(text) = first_live_payload().await? else {
                notify::critical(cfg.notify, "扫码", "输入结束，未检测到入网二维码");
                std::process::exit(1);
            };
            (ScanSource::LiveFrame, text, opts)
        }
    };

    let mut store = if opts.no_history { None } else { open_history(cfg) };
    let outcome = scan::ingest(&text, source, store.as_mut());
    // 入网可能很久，先释放历史文件锁
    drop(store);
    let status = outcome.status_message(source);

    if outcome.credentials.is_empty() {
        notify::critical(cfg.notify, "扫码", &status);
        std::process::exit(1);
    }
    notify::normal(cfg.notify, "扫码", &status);

    println!("SSID : {}", outcome.credentials.ssid.as_deref().unwrap_or("（未找到）"));
    println!("密码 : {}", outcome.credentials.password.as_deref().unwrap_or("（未找到）"));

    if opts.join {
        match outcome.credentials.complete() {
            Some((ssid, password)) => {
                if !do_join(cfg, &opts.join_args, ssid, password).await {
                    std::process::exit(1);
                }
            }
            None => bail!("SSID 或密码缺失，无法入网"),
        }
    }
    Ok(())
}

async fn read_payload_file(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        return read_stdin().await;
    }
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("读取 {} 失败", path.display()))
}

async fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    tokio::io::stdin().read_to_string(&mut buf).await?;
    Ok(buf)
}

/// 逐帧读取，遇到第一个入网码即停止
async fn first_live_payload() -> Result<Option<String>> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if let Some(found) = scan::first_payload([line]) {
            return Ok(Some(found));
        }
    }
    Ok(None)
}

// ════════════════════════════════════════════════════════════════
// 入网
// ════════════════════════════════════════════════════════════════

/// 返回是否成功；状态文字原样展示
async fn do_join(cfg: &Config, args: &JoinArgs, ssid: &str, password: &str) -> bool {
    let backend = args.backend.unwrap_or(cfg.join_backend);
    let interface = args.interface.as_deref().unwrap_or(&cfg.interface);
    let joiner = SystemJoiner::new(backend, interface, cfg.join_timeout());

    notify::normal(cfg.notify, "入网中…", ssid);
    let outcome = joiner.join(ssid, password).await;
    let msg = outcome.status_message();
    if outcome.is_success() {
        notify::normal(cfg.notify, "入网", &msg);
    } else {
        notify::critical(cfg.notify, "入网", &msg);
        // 退出码为 0 的失败已把输出放进状态文字
        if let emoji_wifi::JoinOutcome::Failed { exit_code, output } = &outcome {
            if *exit_code != 0 && !output.is_empty() {
                eprintln!("{output}");
            }
        }
    }
    outcome.is_success()
}

// ════════════════════════════════════════════════════════════════
// 历史
// ════════════════════════════════════════════════════════════════

/// 打不开历史不影响生成/扫码
fn open_history(cfg: &Config) -> Option<HistoryStore> {
    HistoryStore::open(cfg.history_path())
        .inspect_err(|e| tracing::warn!("无法打开历史记录: {e}"))
        .ok()
}

fn cmd_history(cfg: &Config, hc: HistoryCmd) -> Result<()> {
    let mut store = HistoryStore::open(cfg.history_path())?;

    match hc {
        HistoryCmd::List {
            show_passwords,
            json,
        } => {
            if json {
                println!("{}", serde_json::to_string_pretty(store.entries())?);
                return Ok(());
            }
            if store.is_empty() {
                println!("暂无历史记录");
                return Ok(());
            }
            for e in store.entries() {
                let ts = e.timestamp.format(&Rfc3339).unwrap_or_default();
                let pw = if show_passwords {
                    e.password.clone()
                } else {
                    "•".repeat(8)
                };
                let id = e.id.to_string();
                println!("{}  {ts}  {:<9}  {}  {pw}  {}", &id[..8], e.source, e.wifi_name, e.description);
            }
        }
        HistoryCmd::Delete { id } => {
            let target = store.find_by_prefix(&id).map(|e| e.id);
            match target {
                Some(id) => {
                    store.delete_entry(id)?;
                    println!("已删除 {id}");
                }
                None => println!("没有匹配「{id}」的唯一记录"),
            }
        }
        HistoryCmd::Clear => {
            store.clear_all()?;
            println!("历史记录已清空");
        }
    }
    Ok(())
}
