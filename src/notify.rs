// src/notify.rs — 状态提示：可选桌面通知，降级到 stderr

#[derive(Debug, Clone, Copy)]
pub enum Urgency {
    Normal,
    Critical,
}

/// `desktop` 为 false 或通知命令不可用时写到 stderr
pub fn send(desktop: bool, urgency: Urgency, title: &str, body: &str) {
    if desktop && desktop_notify(urgency, title, body) {
        return;
    }
    if body.is_empty() {
        eprintln!("{title}");
    } else {
        eprintln!("{title}: {body}");
    }
}

#[cfg(target_os = "macos")]
fn desktop_notify(_urgency: Urgency, title: &str, body: &str) -> bool {
    let script = format!(
        "display notification {:?} with title {:?}",
        body,
        format!("Emoji WiFi: {title}")
    );
    std::process::Command::new("osascript")
        .args(["-e", &script])
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

#[cfg(not(target_os = "macos"))]
fn desktop_notify(urgency: Urgency, title: &str, body: &str) -> bool {
    let u = match urgency {
        Urgency::Normal => "normal",
        Urgency::Critical => "critical",
    };
    std::process::Command::new("notify-send")
        .args(["-u", u, &format!("Emoji WiFi: {title}"), body])
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

pub fn normal(desktop: bool, title: &str, body: &str) {
    send(desktop, Urgency::Normal, title, body)
}

pub fn critical(desktop: bool, title: &str, body: &str) {
    send(desktop, Urgency::Critical, title, body)
}
