use crate::assets;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// URL of the sample photograph to download when no local image is given
    #[serde(default = "default_source_url")]
    pub source_url: String,

    /// Directory for every output file (downloaded original included)
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Gray-level counts for the reduction series
    #[serde(default = "default_levels")]
    pub levels: Vec<u16>,

    /// Canny edge detection thresholds
    #[serde(default)]
    pub edge: EdgeConfig,

    /// Contact sheet layout
    #[serde(default)]
    pub sheet: SheetConfig,
}

fn default_source_url() -> String {
    "https://upload.wikimedia.org/wikipedia/en/7/7d/Lenna_%28test_image%29.png".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("images")
}

fn default_levels() -> Vec<u16> {
    vec![2, 4, 8, 16, 32, 64, 128, 256]
}

/// Canny thresholds on the gradient magnitude
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct EdgeConfig {
    #[serde(default = "default_low_threshold")]
    pub low_threshold: f32,

    #[serde(default = "default_high_threshold")]
    pub high_threshold: f32,
}

fn default_low_threshold() -> f32 {
    100.0
}

fn default_high_threshold() -> f32 {
    200.0
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            low_threshold: default_low_threshold(),
            high_threshold: default_high_threshold(),
        }
    }
}

/// Contact sheet grid layout
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct SheetConfig {
    /// Tiles per row
    #[serde(default = "default_columns")]
    pub columns: u32,

    /// Tile image box width in pixels
    #[serde(default = "default_tile_width")]
    pub tile_width: u32,

    /// Tile image box height in pixels (title bar not included)
    #[serde(default = "default_tile_height")]
    pub tile_height: u32,
}

fn default_columns() -> u32 {
    4
}

fn default_tile_width() -> u32 {
    320
}

fn default_tile_height() -> u32 {
    320
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            tile_width: default_tile_width(),
            tile_height: default_tile_height(),
        }
    }
}

impl AppConfig {
    /// Load configuration from an explicit file, falling back to the
    /// embedded default config (and finally to hardcoded defaults) on
    /// any failure.
    pub fn load(path: Option<&Path>) -> Self {
        let content = match path {
            Some(p) => match std::fs::read_to_string(p) {
                Ok(c) => Some(c),
                Err(e) => {
                    tracing::warn!(path = %p.display(), %e, "Failed to read config file, using embedded default");
                    None
                }
            },
            None => None,
        };
        let content = content.or_else(assets::default_config_string);

        match content {
            Some(c) => match serde_yaml::from_str::<Self>(&c) {
                Ok(config) => {
                    tracing::info!(
                        levels = config.levels.len(),
                        output_dir = %config.output_dir.display(),
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source_url: default_source_url(),
            output_dir: default_output_dir(),
            levels: default_levels(),
            edge: EdgeConfig::default(),
            sheet: SheetConfig::default(),
        }
    }
}
