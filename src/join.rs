// src/join.rs — 调用系统网络配置命令加入 Wi-Fi（networksetup / nmcli）

use serde::{Deserialize, Serialize};
use std::future::Future;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// 一次入网尝试的结果；从不自动重试
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinOutcome {
    Joined { ssid: String },
    /// 命令跑完但退出码非 0
    Failed { exit_code: i32, output: String },
    /// 命令没能启动（不存在、无权限等）
    LaunchFailed { program: String, error: String },
    TimedOut { secs: u64 },
}

impl JoinOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, JoinOutcome::Joined { .. })
    }

    /// 原样展示给用户的状态文字
    pub fn status_message(&self) -> String {
        match self {
            JoinOutcome::Joined { ssid } => format!("✅ Successfully joined network: {ssid}!"),
            // 退出码为 0 但输出报错：直接显示命令输出
            JoinOutcome::Failed { exit_code: 0, output } if !output.is_empty() => {
                format!("❌ Failed to join network: {output}")
            }
            JoinOutcome::Failed { exit_code, .. } => {
                format!("❌ Failed to join network. Exit code: {exit_code}")
            }
            JoinOutcome::LaunchFailed { program, error } => {
                format!("⚠️ Error running {program}: {error}")
            }
            JoinOutcome::TimedOut { secs } => {
                format!("⏱️ Gave up joining network after {secs}s")
            }
        }
    }
}

/// 系统入网服务的抽象边界
pub trait NetworkJoiner {
    fn join(&self, ssid: &str, password: &str) -> impl Future<Output = JoinOutcome> + Send;
}

/// 使用哪种系统命令
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// macOS: networksetup -setairportnetwork
    Networksetup,
    /// Linux NetworkManager: nmcli dev wifi connect
    Nmcli,
}

impl Default for Backend {
    fn default() -> Self {
        if cfg!(target_os = "macos") {
            Backend::Networksetup
        } else {
            Backend::Nmcli
        }
    }
}

/// macOS 的 networksetup
#[derive(Debug, Clone)]
pub struct NetworkSetup {
    pub program: String,
    pub interface: String,
    pub timeout: Option<Duration>,
}

impl NetworkSetup {
    pub fn new(interface: impl Into<String>) -> Self {
        Self {
            program: "/usr/sbin/networksetup".into(),
            interface: interface.into(),
            timeout: None,
        }
    }
}

impl NetworkJoiner for NetworkSetup {
    fn join(&self, ssid: &str, password: &str) -> impl Future<Output = JoinOutcome> + Send {
        let mut cmd = Command::new(&self.program);
        cmd.args(["-setairportnetwork", &self.interface, ssid, password]);
        run(cmd, self.program.clone(), ssid.to_string(), self.timeout)
    }
}

/// NetworkManager 的 nmcli
#[derive(Debug, Clone)]
pub struct Nmcli {
    pub interface: Option<String>,
    /// nmcli --wait 秒数
    pub wait_secs: u64,
    pub timeout: Option<Duration>,
}

impl NetworkJoiner for Nmcli {
    fn join(&self, ssid: &str, password: &str) -> impl Future<Output = JoinOutcome> + Send {
        let mut cmd = Command::new("nmcli");
        cmd.args(["--wait", &self.wait_secs.to_string(), "dev", "wifi", "connect", ssid]);
        if !password.is_empty() {
            cmd.args(["password", password]);
        }
        if let Some(iface) = self.interface.as_deref().filter(|i| !i.is_empty()) {
            cmd.args(["ifname", iface]);
        }
        run(cmd, "nmcli".to_string(), ssid.to_string(), self.timeout)
    }
}

/// 按配置选出的实现
#[derive(Debug, Clone)]
pub enum SystemJoiner {
    NetworkSetup(NetworkSetup),
    Nmcli(Nmcli),
}

impl SystemJoiner {
    pub fn new(backend: Backend, interface: &str, timeout: Option<Duration>) -> Self {
        match backend {
            Backend::Networksetup => {
                let iface = if interface.is_empty() { "en0" } else { interface };
                let mut ns = NetworkSetup::new(iface);
                ns.timeout = timeout;
                SystemJoiner::NetworkSetup(ns)
            }
            Backend::Nmcli => SystemJoiner::Nmcli(Nmcli {
                interface: Some(interface.to_string()),
                wait_secs: timeout.map_or(15, |t| t.as_secs().max(1)),
                timeout,
            }),
        }
    }
}

impl NetworkJoiner for SystemJoiner {
    async fn join(&self, ssid: &str, password: &str) -> JoinOutcome {
        match self {
            SystemJoiner::NetworkSetup(j) => j.join(ssid, password).await,
            SystemJoiner::Nmcli(j) => j.join(ssid, password).await,
        }
    }
}

/// 启动子进程并等待退出；stdout 与 stderr 一并收集
async fn run(
    mut cmd: Command,
    program: String,
    ssid: String,
    timeout: Option<Duration>,
) -> JoinOutcome {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let child = match cmd.spawn() {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!("无法启动 {program}: {e}");
            return JoinOutcome::LaunchFailed {
                program,
                error: e.to_string(),
            };
        }
    };

    // 超时后丢弃 future，kill_on_drop 负责结束子进程
    let waited = match timeout {
        Some(t) => match tokio::time::timeout(t, child.wait_with_output()).await {
            Ok(r) => r,
            Err(_) => {
                tracing::warn!("{program} 超过 {}s 未退出", t.as_secs());
                return JoinOutcome::TimedOut { secs: t.as_secs() };
            }
        },
        None => child.wait_with_output().await,
    };

    let out = match waited {
        Ok(o) => o,
        Err(e) => {
            return JoinOutcome::LaunchFailed {
                program,
                error: e.to_string(),
            }
        }
    };

    let output = format!(
        "{}{}",
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    )
    .trim()
    .to_string();
    if !output.is_empty() {
        tracing::debug!("{program} 输出: {output}");
    }

    // networksetup 入网失败时退出码仍可能是 0，只在输出里报错
    let reported_error = output.contains("Could not find network")
        || output.contains("Failed to join network")
        || output.starts_with("Error");

    match out.status.code() {
        Some(0) if !reported_error => JoinOutcome::Joined { ssid },
        Some(code) => JoinOutcome::Failed {
            exit_code: code,
            output,
        },
        // 被信号终止
        None => JoinOutcome::Failed {
            exit_code: -1,
            output,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_messages_distinguish_failure_kinds() {
        let ok = JoinOutcome::Joined { ssid: "🚀".into() };
        assert_eq!(ok.status_message(), "✅ Successfully joined network: 🚀!");
        assert!(ok.is_success());

        let failed = JoinOutcome::Failed {
            exit_code: 4,
            output: "nope".into(),
        };
        assert_eq!(failed.status_message(), "❌ Failed to join network. Exit code: 4");

        let launch = JoinOutcome::LaunchFailed {
            program: "networksetup".into(),
            error: "No such file or directory".into(),
        };
        assert!(launch.status_message().starts_with("⚠️ Error running networksetup"));
    }

    #[tokio::test]
    async fn missing_binary_is_a_launch_failure() {
        let joiner = NetworkSetup {
            program: "/nonexistent/definitely-not-networksetup".into(),
            interface: "en0".into(),
            timeout: None,
        };
        let outcome = joiner.join("ssid", "password").await;
        assert!(matches!(outcome, JoinOutcome::LaunchFailed { .. }), "{outcome:?}");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn exit_code_and_output_are_captured() {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", "echo busy >&2; exit 3"]);
        let outcome = run(cmd, "sh".into(), "x".into(), None).await;
        assert_eq!(
            outcome,
            JoinOutcome::Failed {
                exit_code: 3,
                output: "busy".into()
            }
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn zero_exit_is_success() {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", "exit 0"]);
        let outcome = run(cmd, "sh".into(), "Home".into(), None).await;
        assert_eq!(outcome, JoinOutcome::Joined { ssid: "Home".into() });
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn slow_command_times_out() {
        let mut cmd = Command::new("sleep");
        cmd.arg("5");
        let limit = Some(Duration::from_millis(100));
        let outcome = run(cmd, "sleep".into(), "x".into(), limit).await;
        assert!(matches!(outcome, JoinOutcome::TimedOut { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn error_text_with_zero_exit_is_a_failure() {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", "echo 'Could not find network Foo.'; exit 0"]);
        let outcome = run(cmd, "sh".into(), "Foo".into(), None).await;
        assert_eq!(
            outcome,
            JoinOutcome::Failed {
                exit_code: 0,
                output: "Could not find network Foo.".into()
            }
        );
        assert!(!outcome.is_success());
        assert_eq!(
            outcome.status_message(),
            "❌ Failed to join network: Could not find network Foo."
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn leading_error_line_with_zero_exit_is_a_failure() {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", "echo 'Error: -3900  The operation could not be completed.'"]);
        let outcome = run(cmd, "sh".into(), "Foo".into(), None).await;
        assert!(matches!(outcome, JoinOutcome::Failed { exit_code: 0, .. }), "{outcome:?}");
    }
}
