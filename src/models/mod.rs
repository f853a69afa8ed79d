pub mod config;

pub use config::{AppConfig, EdgeConfig, SheetConfig};
