//! Idempotent download of the sample photograph.
//!
//! The fetch is skipped entirely when the destination file already
//! exists, so repeated study runs never re-download the source.

use crate::error::FetchError;
use std::path::Path;
use std::time::Duration;

const FETCH_TIMEOUT_SECS: u64 = 30;
const MAX_REDIRECTS: usize = 10;

/// What a fetch actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The resource was downloaded and written to the destination.
    Downloaded { bytes: usize },
    /// The destination already existed; the network was not touched.
    AlreadyPresent,
}

/// Blocking HTTP fetcher for the sample photograph.
pub struct Fetcher {
    client: reqwest::blocking::Client,
}

impl Fetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .user_agent(concat!("graylab/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// Fetch `url` into `dest`, creating parent directories as needed.
    ///
    /// Returns [`FetchOutcome::AlreadyPresent`] without any network
    /// traffic when `dest` exists. Non-success HTTP statuses are surfaced
    /// as [`FetchError::BadStatus`] and nothing is written.
    pub fn fetch(&self, url: &str, dest: &Path) -> Result<FetchOutcome, FetchError> {
        if dest.exists() {
            tracing::debug!(path = %dest.display(), "Photograph already present, skipping download");
            return Ok(FetchOutcome::AlreadyPresent);
        }

        tracing::debug!(url = %url, "Downloading photograph");
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::BadStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes()?;
        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(dest, &body)?;

        tracing::info!(
            url = %url,
            bytes = body.len(),
            path = %dest.display(),
            "Downloaded photograph"
        );
        Ok(FetchOutcome::Downloaded { bytes: body.len() })
    }
}
