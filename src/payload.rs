// src/payload.rs — Wi-Fi 入网二维码文本的编码与解析

use serde::{Deserialize, Serialize};

/// 解析结果；两个字段互相独立，可能只找到其中一个
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub ssid: Option<String>,
    pub password: Option<String>,
}

impl Credentials {
    pub fn is_empty(&self) -> bool {
        self.ssid.is_none() && self.password.is_none()
    }

    /// 两个字段都在才返回
    pub fn complete(&self) -> Option<(&str, &str)> {
        Some((self.ssid.as_deref()?, self.password.as_deref()?))
    }
}

/// 生成入网文本：`WIFI:T:WPA;S:<ssid>;P:<password>;H:false;;`
///
/// 不转义 `;` `,` `"`，生成的密码字符集里不含这些字符。
pub fn encode(ssid: &str, password: &str) -> String {
    format!("WIFI:T:WPA;S:{ssid};P:{password};H:false;;")
}

/// 宽松解析：分别向前查找 `S:` 与 `P:`，值截到其后的第一个 `;`。
///
/// 不校验 `WIFI:...;;` 外框，任何含 `S:...;` / `P:...;` 的文本都能解析。
/// 已知限制：SSID 或密码里出现 `S:`、`P:` 或 `;` 时可能截错。
pub fn decode(payload: &str) -> Credentials {
    Credentials {
        ssid: field_after(payload, "S:"),
        password: field_after(payload, "P:"),
    }
}

fn field_after(payload: &str, marker: &str) -> Option<String> {
    let start = payload.find(marker)? + marker.len();
    let rest = &payload[start..];
    let end = rest.find(';')?;
    Some(rest[..end].to_string())
}

// ── 完整帧解析 ───────────────────────────────────────────────

/// 认证类型（T: 字段）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Security {
    Open,
    Wep,
    Wpa,
    Wpa2,
    Wpa3,
    Unknown(String),
}

impl std::fmt::Display for Security {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Security::Open => write!(f, "nopass"),
            Security::Wep => write!(f, "WEP"),
            Security::Wpa => write!(f, "WPA"),
            Security::Wpa2 => write!(f, "WPA2"),
            Security::Wpa3 => write!(f, "WPA3"),
            Security::Unknown(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for Security {
    fn from(s: &str) -> Self {
        let up = s.trim().to_uppercase();
        if up.contains("WPA3") || up.contains("SAE") {
            Security::Wpa3
        } else if up.contains("WPA2") {
            Security::Wpa2
        } else if up.contains("WPA") {
            Security::Wpa
        } else if up.contains("WEP") {
            Security::Wep
        } else if up.is_empty() || up == "NOPASS" {
            Security::Open
        } else {
            Security::Unknown(s.to_string())
        }
    }
}

/// 按字段拆开的一帧；字段顺序不限（兼容三星等厂商的写法）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WifiFrame {
    pub security: Security,
    pub ssid: String,
    pub password: Option<String>,
    pub hidden: bool,
}

/// 严格一些的解析：去掉 `WIFI:` 前缀后按 `;` 切分，识别 S/P/T/H 字段，
/// 值两侧若有成对双引号则去掉。没有非空 SSID 时返回 None。
pub fn parse_frame(payload: &str) -> Option<WifiFrame> {
    let body = payload.trim();
    let body = body.strip_prefix("WIFI:").unwrap_or(body);

    let mut ssid = None;
    let mut password = None;
    let mut security = None;
    let mut hidden = false;

    for part in body.split(';') {
        if let Some(v) = part.strip_prefix("S:") {
            ssid = Some(unquote(v));
        } else if let Some(v) = part.strip_prefix("P:") {
            password = Some(unquote(v));
        } else if let Some(v) = part.strip_prefix("T:") {
            security = Some(Security::from(v));
        } else if let Some(v) = part.strip_prefix("H:") {
            hidden = v.eq_ignore_ascii_case("true");
        }
    }

    let ssid = ssid.filter(|s| !s.is_empty())?;
    let security = security.unwrap_or(if password.as_deref().map_or(true, str::is_empty) {
        Security::Open
    } else {
        Security::Wpa
    });

    Some(WifiFrame {
        security,
        ssid,
        password,
        hidden,
    })
}

fn unquote(v: &str) -> String {
    v.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(v)
        .to_string()
}
