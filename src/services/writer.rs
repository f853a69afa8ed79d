//! PNG output for study artifacts.
//!
//! Saves views to disk and encodes them to in-memory PNG bytes for
//! embedding into the contact sheet.

use crate::error::WriteError;
use image::{GrayImage, ImageFormat, RgbImage};
use std::io::Cursor;
use std::path::Path;

/// Save an RGB view as a PNG, creating parent directories as needed.
pub fn save_rgb(image: &RgbImage, path: &Path) -> Result<(), WriteError> {
    ensure_parent(path)?;
    image.save(path)?;
    tracing::debug!(path = %path.display(), "Saved image");
    Ok(())
}

/// Save a grayscale view as a PNG, creating parent directories as needed.
pub fn save_gray(image: &GrayImage, path: &Path) -> Result<(), WriteError> {
    ensure_parent(path)?;
    image.save(path)?;
    tracing::debug!(path = %path.display(), "Saved image");
    Ok(())
}

/// Encode an RGB view as PNG bytes.
pub fn rgb_png_bytes(image: &RgbImage) -> Result<Vec<u8>, WriteError> {
    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

/// Encode a grayscale view as PNG bytes.
pub fn gray_png_bytes(image: &GrayImage) -> Result<Vec<u8>, WriteError> {
    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

fn ensure_parent(path: &Path) -> Result<(), WriteError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}
