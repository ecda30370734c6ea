// src/qr.rs — 用 qrcode crate 把入网文本渲染成终端二维码或 PNG 图片

use anyhow::{Context, Result};
use image::{ImageFormat, Luma};
use qrcode::render::unicode;
use qrcode::{EcLevel, QrCode};
use std::path::Path;

/// PNG 最小边长（像素）
pub const PNG_SIZE: u32 = 300;

/// 渲染入网文本（UTF-8 半高块字符，带静区）
pub fn render(payload: &str) -> Result<String> {
    let code = QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::M)?;
    let image = code
        .render::<unicode::Dense1x2>()
        .quiet_zone(true)
        .build();

    // 每行加两个前导空格，终端里稍微居中
    let padded = image
        .lines()
        .map(|l| format!("  {l}"))
        .collect::<Vec<_>>()
        .join("\n");

    Ok(padded)
}

/// 写出黑白 PNG，边长不小于 [`PNG_SIZE`]
pub fn write_png(payload: &str, path: &Path) -> Result<()> {
    let code = QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::M)?;
    let image = code
        .render::<Luma<u8>>()
        .min_dimensions(PNG_SIZE, PNG_SIZE)
        .quiet_zone(true)
        .build();
    image
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("写入二维码图片失败: {}", path.display()))?;
    tracing::info!("二维码已保存到 {}", path.display());
    Ok(())
}
