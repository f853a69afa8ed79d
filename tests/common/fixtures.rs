//! Test fixtures: generated photographs and study configs.

use graylab::models::AppConfig;
use image::{Rgb, RgbImage};
use std::path::{Path, PathBuf};

/// A small photograph with smooth gradients plus a hard vertical step,
/// so level reduction and edge detection both have something to find.
pub fn sample_photo() -> RgbImage {
    RgbImage::from_fn(64, 64, |x, y| {
        if x >= 48 {
            Rgb([255, 255, 255])
        } else {
            Rgb([(x * 4) as u8, (y * 4) as u8, 64])
        }
    })
}

/// Write the sample photograph into `dir` and return its path.
pub fn write_sample_photo(dir: &Path) -> PathBuf {
    let path = dir.join("photo.png");
    sample_photo().save(&path).expect("write sample photo");
    path
}

/// A study config pointed at `output_dir`, with a short level series and
/// small tiles to keep rasterization fast.
pub fn test_config(output_dir: &Path) -> AppConfig {
    let mut config = AppConfig::default();
    config.output_dir = output_dir.to_path_buf();
    config.levels = vec![2, 4, 16];
    config.sheet.tile_width = 96;
    config.sheet.tile_height = 96;
    config
}
