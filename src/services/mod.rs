pub mod fetcher;
pub mod loader;
pub mod pipeline;
pub mod vision;
pub mod writer;

pub use fetcher::{FetchOutcome, Fetcher};
pub use loader::{load_photo, Photo};
pub use pipeline::{StudyPipeline, StudyReport};
