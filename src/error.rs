use std::path::PathBuf;
use thiserror::Error;

/// Top-level error for study pipeline operations.
#[derive(Debug, Error)]
pub enum StudyError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Level reduction error: {0}")]
    Levels(#[from] gray_levels::LevelError),

    #[error("Write error: {0}")]
    Write(#[from] WriteError),

    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status} fetching {url}")]
    BadStatus { status: u16, url: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Photograph not found: {0}")]
    NotFound(PathBuf),

    #[error("Decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("Encode error: {0}")]
    Encode(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("SVG parse error: {0}")]
    SvgParse(String),

    #[error("Failed to allocate pixmap")]
    PixmapAllocation,

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
