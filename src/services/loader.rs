//! Photograph decoding and view derivation.
//!
//! Decodes a photograph from disk into the two views the study works on
//! (RGB and 8-bit grayscale) and bridges between `image` buffers and the
//! [`GrayMap`] type the quantizer operates on.

use crate::error::LoadError;
use gray_levels::GrayMap;
use image::{GrayImage, ImageReader, RgbImage};
use std::path::{Path, PathBuf};

/// A decoded photograph with its derived views.
#[derive(Debug)]
pub struct Photo {
    /// Where the photograph was decoded from.
    pub path: PathBuf,
    /// Full-color view.
    pub rgb: RgbImage,
    /// 8-bit grayscale view.
    pub gray: GrayImage,
}

/// Decode a photograph and derive its RGB and grayscale views.
///
/// The format is sniffed from the file content, not the extension: a
/// downloaded "original.png" that is really a JPEG still decodes.
pub fn load_photo(path: &Path) -> Result<Photo, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let decoded = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    let rgb = decoded.to_rgb8();
    let gray = decoded.to_luma8();

    tracing::debug!(
        path = %path.display(),
        width = rgb.width(),
        height = rgb.height(),
        "Decoded photograph"
    );

    Ok(Photo {
        path: path.to_path_buf(),
        rgb,
        gray,
    })
}

/// Borrow a `GrayImage` as a quantizer [`GrayMap`].
pub fn gray_to_map(gray: &GrayImage) -> GrayMap {
    GrayMap::from_raw(
        gray.as_raw().clone(),
        gray.width() as usize,
        gray.height() as usize,
    )
    .expect("image buffer length always matches its dimensions")
}

/// Turn a quantizer [`GrayMap`] back into a `GrayImage`.
pub fn map_to_gray(map: GrayMap) -> GrayImage {
    let (width, height) = (map.width() as u32, map.height() as u32);
    GrayImage::from_raw(width, height, map.into_raw())
        .expect("map buffer length always matches its dimensions")
}
