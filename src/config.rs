// src/config.rs — 配置加载，支持文件覆盖

use crate::generator::DEFAULT_PASSWORD_LENGTH;
use crate::history::HistoryStore;
use crate::join::Backend;
use crate::types::{CharClasses, NameStyle};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 默认 SSID 风格
    pub style: NameStyle,
    /// 密码长度（使用前截到 8–63）
    pub password_length: usize,
    pub upper: bool,
    pub lower: bool,
    pub digits: bool,
    pub special: bool,
    /// single.csv / combos.csv 所在目录
    pub resource_dir: Option<PathBuf>,
    /// 历史记录文件
    pub history_path: Option<PathBuf>,
    /// 入网命令
    pub join_backend: Backend,
    /// 网卡名（macOS 默认 en0）
    pub interface: String,
    /// 入网命令超时（秒），0 表示不限
    pub join_timeout: u64,
    /// 用桌面通知显示状态
    pub notify: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            style: NameStyle::Combination,
            password_length: DEFAULT_PASSWORD_LENGTH,
            upper: true,
            lower: true,
            digits: true,
            special: true,
            resource_dir: None,
            history_path: None,
            join_backend: Backend::default(),
            interface: if cfg!(target_os = "macos") {
                "en0".into()
            } else {
                String::new()
            },
            join_timeout: 0,
            notify: false,
        }
    }
}

impl Config {
    /// 指定路径必须存在；否则按优先级查找，找不到用默认值
    pub fn load(custom: Option<&Path>) -> Result<Self> {
        if let Some(path) = custom {
            return Self::from_file(path);
        }
        for path in &config_candidates() {
            if path.exists() {
                return Self::from_file(path);
            }
        }
        Ok(Config::default())
    }

    fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("读取配置失败: {}", path.display()))?;
        let cfg: Config = toml::from_str(&text)
            .with_context(|| format!("解析配置失败: {}", path.display()))?;
        tracing::info!("已载入配置 {}", path.display());
        Ok(cfg)
    }

    pub fn char_classes(&self) -> CharClasses {
        CharClasses {
            upper: self.upper,
            lower: self.lower,
            digits: self.digits,
            special: self.special,
        }
    }

    pub fn join_timeout(&self) -> Option<Duration> {
        (self.join_timeout > 0).then(|| Duration::from_secs(self.join_timeout))
    }

    pub fn history_path(&self) -> PathBuf {
        self.history_path
            .clone()
            .unwrap_or_else(HistoryStore::default_path)
    }

    /// 资源目录：配置项 → 可执行文件旁的 resources/ → 数据目录
    pub fn resource_dir(&self) -> PathBuf {
        if let Some(dir) = &self.resource_dir {
            return dir.clone();
        }
        let beside_exe = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|d| d.join("resources")));
        match beside_exe {
            Some(dir) if dir.is_dir() => dir,
            _ => data_dir().join("resources"),
        }
    }
}

fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("EmojiWifi")
}

fn config_candidates() -> Vec<PathBuf> {
    let mut v = vec![];
    // 同目录下的 config.toml
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            v.push(dir.join("config.toml"));
        }
    }
    // ~/.config/emoji-wifi/config.toml
    if let Some(dir) = dirs::config_dir() {
        v.push(dir.join("emoji-wifi").join("config.toml"));
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "style = \"random\"\npassword_length = 20\nspecial = false\njoin_backend = \"nmcli\"\njoin_timeout = 30\n",
        )
        .unwrap();

        let cfg = Config::load(Some(&path)).unwrap();
        assert_eq!(cfg.style, NameStyle::Random);
        assert_eq!(cfg.password_length, 20);
        assert!(!cfg.char_classes().special);
        assert!(cfg.char_classes().upper);
        assert_eq!(cfg.join_backend, Backend::Nmcli);
        assert_eq!(cfg.join_timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load(Some(&dir.path().join("nope.toml"))).is_err());
    }

    #[test]
    fn defaults_match_generator() {
        let cfg = Config::default();
        assert_eq!(cfg.password_length, 62);
        assert_eq!(cfg.char_classes(), CharClasses::default());
        assert_eq!(cfg.join_timeout(), None);
    }
}
