// src/fetch/zips.rs
use reqwest::blocking::Client;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;
use url::Url;

use super::FetchError;

/// Download `url` and save the body verbatim at `dest`. Returns the number of bytes written.
///
/// The body is staged in a temp file beside `dest` and renamed into place, so a
/// failed request or write never leaves a partial file at `dest`.
pub fn download_zip(client: &Client, url: &Url, dest: &Path) -> Result<u64, FetchError> {
    let resp = client
        .get(url.clone())
        .send()
        .map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    let bytes = resp.bytes().map_err(|source| FetchError::Transport {
        url: url.to_string(),
        source,
    })?;
    debug!(%url, size = bytes.len(), "body received");

    let io_err = |source| FetchError::Io {
        path: dest.to_path_buf(),
        source,
    };
    let parent = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(io_err)?;

    let mut tmp = NamedTempFile::new_in(parent).map_err(io_err)?;
    tmp.write_all(&bytes).map_err(io_err)?;
    tmp.flush().map_err(io_err)?;
    tmp.persist(dest).map_err(|e| io_err(e.error))?;

    Ok(bytes.len() as u64)
}
