// src/generator.rs — 表情 SSID 与随机密码生成（随机源由调用方注入）

use crate::catalog::{Catalog, Combination};
use crate::types::{CharClasses, GeneratedNetwork, NameStyle};
use rand::seq::SliceRandom;
use rand::Rng;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
/// 不含 `;` `:` `,` `"`，保证入网文本能原样往返
pub const SPECIAL: &str = "!@#$%^&*()_+-=[]{}|<>?";

pub const DEFAULT_PASSWORD_LENGTH: usize = 62;
pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 63;

/// 随机模式下最多拼接几个表情
const MAX_RANDOM_EMOJIS: usize = 4;

/// 按风格生成 SSID，返回 (ssid, 描述)
pub fn generate_name<R: Rng + ?Sized>(
    style: NameStyle,
    catalog: &Catalog,
    rng: &mut R,
) -> (String, String) {
    match style {
        NameStyle::Combination => {
            let combo = pick_combination(catalog, rng);
            (combo.emojis, combo.name)
        }
        NameStyle::Single => {
            let emoji = pick_single(catalog, rng).to_string();
            let description = catalog.description_for(&emoji).to_string();
            (emoji, description)
        }
        NameStyle::Random => {
            let count = rng.gen_range(1..=MAX_RANDOM_EMOJIS);
            let ssid: String = (0..count).map(|_| pick_single(catalog, rng)).collect();
            (ssid, format!("Random combination of {count} emojis"))
        }
    }
}

// Catalog 保证两个池都非空，这里的默认值不会被用到
fn pick_combination<R: Rng + ?Sized>(catalog: &Catalog, rng: &mut R) -> Combination {
    catalog
        .combinations()
        .choose(rng)
        .cloned()
        .unwrap_or_else(|| Combination::new("WiFi", "📶"))
}

fn pick_single<'a, R: Rng + ?Sized>(catalog: &'a Catalog, rng: &mut R) -> &'a str {
    catalog
        .single_emojis()
        .choose(rng)
        .map(String::as_str)
        .unwrap_or("📶")
}

/// 字符表按 小写 → 大写 → 数字 → 特殊字符 的顺序拼接
pub fn alphabet(classes: CharClasses) -> String {
    let mut chars = String::new();
    if classes.lower {
        chars.push_str(LOWERCASE);
    }
    if classes.upper {
        chars.push_str(UPPERCASE);
    }
    if classes.digits {
        chars.push_str(DIGITS);
    }
    if classes.special {
        chars.push_str(SPECIAL);
    }
    chars
}

/// 从启用的字符类中有放回地均匀抽取 `length` 个字符。
///
/// 全部禁用时返回空串；长度不做截断，调用方先用 [`clamp_password_length`]。
pub fn generate_password<R: Rng + ?Sized>(
    length: usize,
    classes: CharClasses,
    rng: &mut R,
) -> String {
    let pool: Vec<char> = alphabet(classes).chars().collect();
    if pool.is_empty() {
        return String::new();
    }
    (0..length)
        .map(|_| pool[rng.gen_range(0..pool.len())])
        .collect()
}

/// Wi-Fi WPA 密码长度 8–63
pub fn clamp_password_length(length: usize) -> usize {
    length.clamp(MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH)
}

/// 一次生成 SSID + 密码
pub fn generate_network<R: Rng + ?Sized>(
    style: NameStyle,
    password_length: usize,
    classes: CharClasses,
    catalog: &Catalog,
    rng: &mut R,
) -> GeneratedNetwork {
    let (ssid, description) = generate_name(style, catalog, rng);
    let password = generate_password(password_length, classes, rng);
    GeneratedNetwork {
        ssid,
        password,
        description,
    }
}
