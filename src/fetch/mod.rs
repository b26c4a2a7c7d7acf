// src/fetch/mod.rs

use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::archive::Archive;

pub mod urls;
pub mod zips;

/// Why a single archive could not be fetched.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },
    #[error("writing {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("building HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Result of fetching one archive: the written path, or why it failed.
pub type Outcome = Result<PathBuf, FetchError>;

/// Anything that can put an archive on disk.
pub trait Source {
    fn fetch(&self, archive: &Archive) -> Outcome;
}

/// Blocking HTTP fetcher.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new() -> Result<Self, FetchError> {
        // no overall timeout: a stalled transfer blocks the run
        let client = Client::builder()
            .user_agent(concat!("farscraper/", env!("CARGO_PKG_VERSION")))
            .timeout(None::<Duration>)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }
}

impl Source for Fetcher {
    #[instrument(level = "info", skip(self, archive), fields(year = archive.year))]
    fn fetch(&self, archive: &Archive) -> Outcome {
        let start = Instant::now();
        match zips::download_zip(&self.client, &archive.url, &archive.archive_path) {
            Ok(size) => {
                info!(
                    path = %archive.archive_path.display(),
                    size,
                    elapsed = ?start.elapsed(),
                    "downloaded"
                );
                Ok(archive.archive_path.clone())
            }
            Err(err) => {
                warn!(url = %archive.url, error = %err, "download failed");
                Err(err)
            }
        }
    }
}
