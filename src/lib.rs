// src/lib.rs — 表情 Wi-Fi 名称生成、入网二维码编解码、历史记录与入网调用

pub mod catalog;
pub mod config;
pub mod error;
pub mod fallback;
pub mod generator;
pub mod history;
pub mod join;
pub mod notify;
pub mod payload;
pub mod qr;
pub mod scan;
pub mod types;

pub use catalog::{Catalog, Combination};
pub use history::{HistoryEntry, HistorySource, HistoryStore};
pub use join::{JoinOutcome, NetworkJoiner};
pub use payload::{decode, encode, Credentials};
pub use types::{CharClasses, GeneratedNetwork, NameStyle};
