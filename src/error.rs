// src/error.rs — 库内错误类型（可恢复错误在调用处就地处理）

use std::path::PathBuf;

/// CSV 资源加载失败；调用方一律降级到内置数据
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("资源文件不存在: {0}")]
    NotFound(PathBuf),

    #[error("读取 {path} 失败: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// 历史记录持久化失败；内存中的修改保留，只记录日志
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("历史文件 I/O 失败 ({path}): {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("历史记录序列化失败: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("无法锁定历史文件 {path}: {source}")]
    Lock {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl HistoryError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
