// src/scan.rs — 扫码流程：导入图片与实时画面共用同一套解析与记录逻辑

use crate::error::HistoryError;
use crate::history::{HistorySource, HistoryStore};
use crate::payload::{self, Credentials};

/// 二维码文本的来源（图像识别本身由外部工具完成）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanSource {
    /// 从图片文件识别
    ImportedImage,
    /// 摄像头实时画面
    LiveFrame,
}

impl ScanSource {
    pub fn history_source(self) -> HistorySource {
        match self {
            ScanSource::ImportedImage => HistorySource::Imported,
            ScanSource::LiveFrame => HistorySource::Scanned,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ScanSource::ImportedImage => "Imported from QR code",
            ScanSource::LiveFrame => "Scanned from QR code",
        }
    }
}

#[derive(Debug)]
pub struct ScanOutcome {
    pub credentials: Credentials,
    /// 是否写入了历史（SSID 与密码都解析到时才写）
    pub recorded: bool,
    /// 写历史失败不影响扫码结果
    pub history_error: Option<HistoryError>,
}

impl ScanOutcome {
    pub fn status_message(&self, source: ScanSource) -> String {
        let verb = match source {
            ScanSource::ImportedImage => "imported",
            ScanSource::LiveFrame => "scanned",
        };
        match (&self.credentials.ssid, &self.credentials.password) {
            (None, None) => "⚠️ No WiFi information found in QR code".to_string(),
            (Some(_), Some(_)) => format!("✅ QR Code {verb}!"),
            (Some(_), None) => format!("✅ QR Code {verb} (no password found)"),
            (None, Some(_)) => format!("✅ QR Code {verb} (no network name found)"),
        }
    }
}

/// 解析一段二维码文本；两个字段都在时记入历史
pub fn ingest(
    payload_text: &str,
    source: ScanSource,
    history: Option<&mut HistoryStore>,
) -> ScanOutcome {
    let credentials = payload::decode(payload_text);
    let mut recorded = false;
    let mut history_error = None;

    if let (Some((ssid, password)), Some(store)) = (credentials.complete(), history) {
        match store.add_entry(ssid, password, source.description(), source.history_source()) {
            Ok(_) => recorded = true,
            Err(e) => history_error = Some(e),
        }
    }

    if credentials.is_empty() {
        tracing::info!("二维码中没有 Wi-Fi 信息");
    }

    ScanOutcome {
        credentials,
        recorded,
        history_error,
    }
}

/// 实时画面：取第一帧能解析出 SSID 的文本，之后停止读取
pub fn first_payload<I, S>(frames: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    frames
        .into_iter()
        .map(|f| f.as_ref().trim().to_string())
        .find(|f| !f.is_empty() && payload::decode(f).ssid.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_payload_is_recorded_with_source() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = HistoryStore::open(dir.path().join("h.json")).unwrap();

        let payload = "WIFI:T:WPA;S:🏠;P:pw12345678;H:false;;";
        let out = ingest(payload, ScanSource::ImportedImage, Some(&mut store));
        assert!(out.recorded);
        assert_eq!(out.status_message(ScanSource::ImportedImage), "✅ QR Code imported!");

        let entry = &store.entries()[0];
        assert_eq!(entry.wifi_name, "🏠");
        assert_eq!(entry.source, HistorySource::Imported);
        assert_eq!(entry.description, "Imported from QR code");
    }

    #[test]
    fn partial_payload_is_not_recorded() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = HistoryStore::open(dir.path().join("h.json")).unwrap();

        let out = ingest("S:Home;", ScanSource::LiveFrame, Some(&mut store));
        assert!(!out.recorded);
        assert_eq!(out.credentials.ssid.as_deref(), Some("Home"));
        assert!(store.is_empty());
    }

    #[test]
    fn no_markers_reports_nothing_found() {
        let out = ingest("hello", ScanSource::LiveFrame, None);
        assert!(out.credentials.is_empty());
        assert!(out.status_message(ScanSource::LiveFrame).contains("No WiFi"));
    }

    #[test]
    fn live_frames_stop_at_first_wifi_payload() {
        let frames = [
            "",
            "https://example.com",
            "WIFI:S:Cafe;P:latte123;;",
            "WIFI:S:Other;;",
        ];
        assert_eq!(
            first_payload(frames).as_deref(),
            Some("WIFI:S:Cafe;P:latte123;;")
        );
        assert_eq!(first_payload(["nothing here"]), None);
    }
}
