// src/types.rs — 跨模块共享的数据类型

use serde::{Deserialize, Serialize};

/// SSID 生成风格
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NameStyle {
    /// 从组合表中随机取一条
    #[default]
    Combination,
    /// 单个表情
    Single,
    /// 1–4 个随机表情拼接
    Random,
}

impl std::fmt::Display for NameStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameStyle::Combination => write!(f, "combination"),
            NameStyle::Single => write!(f, "single"),
            NameStyle::Random => write!(f, "random"),
        }
    }
}

/// 密码字符类开关
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharClasses {
    pub upper: bool,
    pub lower: bool,
    pub digits: bool,
    pub special: bool,
}

impl Default for CharClasses {
    fn default() -> Self {
        Self {
            upper: true,
            lower: true,
            digits: true,
            special: true,
        }
    }
}

impl CharClasses {
    pub fn any(&self) -> bool {
        self.upper || self.lower || self.digits || self.special
    }
}

/// 一次生成的结果（不落盘，由界面层持有）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedNetwork {
    pub ssid: String,
    pub password: String,
    pub description: String,
}
