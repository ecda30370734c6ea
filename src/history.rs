// src/history.rs — 生成/扫描记录，新记录在前，每次修改整文件原子重写

use crate::error::HistoryError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::{Path, PathBuf};
use time::OffsetDateTime;
use uuid::Uuid;

/// 记录来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistorySource {
    Generated,
    Imported,
    Scanned,
}

impl std::fmt::Display for HistorySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HistorySource::Generated => write!(f, "generated"),
            HistorySource::Imported => write!(f, "imported"),
            HistorySource::Scanned => write!(f, "scanned"),
        }
    }
}

/// 一条历史记录；创建后不再修改
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: Uuid,
    pub wifi_name: String,
    pub password: String,
    pub description: String,
    pub source: HistorySource,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

impl HistoryEntry {
    fn new(wifi_name: &str, password: &str, description: &str, source: HistorySource) -> Self {
        let now = OffsetDateTime::now_utc();
        Self {
            id: Uuid::new_v4(),
            wifi_name: wifi_name.to_string(),
            password: password.to_string(),
            description: description.to_string(),
            source,
            // 精确到秒，与 ISO-8601 秒级时间戳的读取方兼容
            timestamp: now.replace_nanosecond(0).unwrap_or(now),
        }
    }
}

type Listener = Box<dyn Fn(&[HistoryEntry]) + Send>;

pub struct HistoryStore {
    path: PathBuf,
    entries: Vec<HistoryEntry>,
    listeners: Vec<Listener>,
    // 持有期间独占历史文件（跨进程单写者）
    _lock: Option<File>,
}

impl std::fmt::Debug for HistoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryStore")
            .field("path", &self.path)
            .field("entries", &self.entries.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl HistoryStore {
    /// 默认位置：<数据目录>/EmojiWifi/history.json
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("EmojiWifi")
            .join("history.json")
    }

    /// 加锁并载入；文件缺失或损坏时从空列表开始
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, HistoryError> {
        let path = path.into();
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| HistoryError::io(dir, e))?;
        }
        let lock = acquire_lock(&path)?;
        let entries = load(&path);
        tracing::debug!("历史记录 {} 条 ({})", entries.len(), path.display());
        Ok(Self {
            path,
            entries,
            listeners: Vec::new(),
            _lock: lock,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 新记录在前
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, id: Uuid) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// 按 id 前缀查找，前缀不唯一时返回 None
    pub fn find_by_prefix(&self, prefix: &str) -> Option<&HistoryEntry> {
        let prefix = prefix.to_lowercase();
        let mut hits = self
            .entries
            .iter()
            .filter(|e| e.id.to_string().starts_with(&prefix));
        match (hits.next(), hits.next()) {
            (Some(e), None) => Some(e),
            _ => None,
        }
    }

    /// 每次修改后收到最新快照
    pub fn subscribe(&mut self, listener: impl Fn(&[HistoryEntry]) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// 插入到最前并落盘。落盘失败时内存中的记录仍保留。
    pub fn add_entry(
        &mut self,
        wifi_name: &str,
        password: &str,
        description: &str,
        source: HistorySource,
    ) -> Result<&HistoryEntry, HistoryError> {
        let entry = HistoryEntry::new(wifi_name, password, description, source);
        tracing::info!("新增历史记录 {} ({source})", entry.id);
        self.entries.insert(0, entry);
        self.commit()?;
        Ok(&self.entries[0])
    }

    /// 删除指定 id；不存在时什么也不做，返回 false
    pub fn delete_entry(&mut self, id: Uuid) -> Result<bool, HistoryError> {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() == before {
            tracing::debug!("历史记录 {id} 不存在，忽略删除");
            return Ok(false);
        }
        self.commit()?;
        Ok(true)
    }

    pub fn clear_all(&mut self) -> Result<(), HistoryError> {
        self.entries.clear();
        self.commit()
    }

    fn commit(&self) -> Result<(), HistoryError> {
        for listener in &self.listeners {
            listener(&self.entries);
        }
        save(&self.path, &self.entries).inspect_err(|e| tracing::warn!("保存历史记录失败: {e}"))
    }
}

// ── 持久化 ───────────────────────────────────────────────────

fn load(path: &Path) -> Vec<HistoryEntry> {
    let text = match std::fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
        Err(e) => {
            tracing::warn!("读取历史记录失败 ({}): {e}", path.display());
            return Vec::new();
        }
    };
    serde_json::from_str(&text).unwrap_or_else(|e| {
        tracing::warn!("历史记录已损坏，从空列表开始 ({}): {e}", path.display());
        Vec::new()
    })
}

/// 先写临时文件再 rename，读者不会看到写了一半的文件
fn save(path: &Path, entries: &[HistoryEntry]) -> Result<(), HistoryError> {
    let tmp = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(entries)?;
    std::fs::write(&tmp, json).map_err(|e| HistoryError::io(&tmp, e))?;
    std::fs::rename(&tmp, path).map_err(|e| HistoryError::io(path, e))?;
    Ok(())
}

#[cfg(unix)]
fn acquire_lock(path: &Path) -> Result<Option<File>, HistoryError> {
    use std::os::unix::io::AsRawFd;

    let lock_path = path.with_extension("lock");
    let file = std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&lock_path)
        .map_err(|e| HistoryError::io(&lock_path, e))?;

    // LOCK_EX | LOCK_NB：独占锁，非阻塞；拿不到说明另一个实例正在使用
    if unsafe { libc::flock(file.as_raw_fd(), libc::LOCK_EX | libc::LOCK_NB) } != 0 {
        return Err(HistoryError::Lock {
            path: lock_path,
            source: std::io::Error::last_os_error(),
        });
    }
    // 文件关闭时锁自动释放
    Ok(Some(file))
}

#[cfg(not(unix))]
fn acquire_lock(_path: &Path) -> Result<Option<File>, HistoryError> {
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn store_in(dir: &tempfile::TempDir) -> HistoryStore {
        HistoryStore::open(dir.path().join("history.json")).unwrap()
    }

    #[test]
    fn newest_entry_comes_first() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.add_entry("🚀", "one", "Rocket", HistorySource::Generated).unwrap();
        store.add_entry("🐼", "two", "Panda", HistorySource::Scanned).unwrap();

        let names: Vec<_> = store.entries().iter().map(|e| e.wifi_name.as_str()).collect();
        assert_eq!(names, ["🐼", "🚀"]);
        assert_ne!(store.entries()[0].id, store.entries()[1].id);
    }

    #[test]
    fn deleting_unknown_id_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.add_entry("🚀", "pw", "Rocket", HistorySource::Generated).unwrap();
        let before = store.entries().to_vec();

        assert!(!store.delete_entry(Uuid::new_v4()).unwrap());
        assert_eq!(store.entries(), before.as_slice());
    }

    #[test]
    fn delete_removes_only_matching_entry() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        let keep = store.add_entry("a", "1", "", HistorySource::Generated).unwrap().id;
        let gone = store.add_entry("b", "2", "", HistorySource::Imported).unwrap().id;

        assert!(store.delete_entry(gone).unwrap());
        assert_eq!(store.len(), 1);
        assert!(store.find(keep).is_some());
        assert!(store.find(gone).is_none());
    }

    #[test]
    fn entries_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let id = {
            let mut store = store_in(&dir);
            store.add_entry("🌈", "pw!", "Rainbow", HistorySource::Imported).unwrap().id
        };
        let store = store_in(&dir);
        assert_eq!(store.len(), 1);
        let entry = store.find(id).unwrap();
        assert_eq!(entry.wifi_name, "🌈");
        assert_eq!(entry.source, HistorySource::Imported);
    }

    #[test]
    fn clear_all_persists_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = store_in(&dir);
            store.add_entry("x", "y", "z", HistorySource::Generated).unwrap();
            store.clear_all().unwrap();
        }
        let store = store_in(&dir);
        assert!(store.is_empty());
        let raw = std::fs::read_to_string(dir.path().join("history.json")).unwrap();
        assert_eq!(raw.trim(), "[]");
    }

    #[test]
    fn corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("history.json"), "{not json").unwrap();
        let store = store_in(&dir);
        assert!(store.is_empty());
    }

    #[test]
    fn json_layout_uses_camel_case_and_iso_timestamps() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.add_entry("🔥", "pw", "Fire", HistorySource::Scanned).unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let obj = &value[0];
        assert_eq!(obj["wifiName"], "🔥");
        assert_eq!(obj["source"], "scanned");
        let ts = obj["timestamp"].as_str().unwrap();
        assert!(ts.ends_with('Z'), "{ts}");
        assert!(!ts.contains('.'), "{ts}");
        assert!(obj["id"].as_str().is_some());
    }

    #[test]
    fn reads_files_written_by_other_clients() {
        let dir = tempfile::tempdir().unwrap();
        let json = r#"[{"id":"6F9619FF-8B86-D011-B42D-00C04FC964FF","wifiName":"Home",
            "password":"pw","description":"Scanned from QR code","source":"scanned",
            "timestamp":"2024-05-01T08:30:00Z"}]"#;
        std::fs::write(dir.path().join("history.json"), json).unwrap();
        let store = store_in(&dir);
        assert_eq!(store.len(), 1);
        assert_eq!(store.entries()[0].timestamp.year(), 2024);
        assert!(store.find_by_prefix("6f9619ff").is_some());
    }

    #[test]
    fn subscribers_see_each_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        store.subscribe(move |entries| sink.lock().unwrap().push(entries.len()));

        store.add_entry("a", "1", "", HistorySource::Generated).unwrap();
        store.add_entry("b", "2", "", HistorySource::Generated).unwrap();
        store.clear_all().unwrap();
        assert_eq!(*seen.lock().unwrap(), vec![1, 2, 0]);
    }

    #[cfg(unix)]
    #[test]
    fn second_open_fails_fast_while_locked() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        let mut first = HistoryStore::open(&path).unwrap();
        first.add_entry("🚀", "one", "Rocket", HistorySource::Generated).unwrap();

        let started = std::time::Instant::now();
        let second = HistoryStore::open(&path);
        assert!(matches!(second, Err(HistoryError::Lock { .. })));
        assert!(started.elapsed() < std::time::Duration::from_secs(1));

        drop(first);
        let reopened = HistoryStore::open(&path).unwrap();
        assert_eq!(reopened.len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn failed_save_keeps_entry_in_memory() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("gone");
        let mut store = HistoryStore::open(sub.join("history.json")).unwrap();
        std::fs::remove_dir_all(&sub).unwrap();

        let err = store.add_entry("🌊", "pw", "Wave", HistorySource::Generated).unwrap_err();
        assert!(matches!(err, HistoryError::Io { .. }), "{err:?}");
        assert_eq!(store.len(), 1);
        assert_eq!(store.entries()[0].wifi_name, "🌊");
    }
}
