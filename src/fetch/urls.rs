// src/fetch/urls.rs
use anyhow::{Context, Result};
use url::Url;

/// Build the national CSV archive URL for `year` under `base`.
///
/// `{base}/{year}/National/FARS{year}NationalCSV.zip`
pub fn archive_url(base: &str, year: u16) -> Result<Url> {
    let raw = format!(
        "{}/{}/National/FARS{}NationalCSV.zip",
        base.trim_end_matches('/'),
        year,
        year
    );
    Url::parse(&raw).with_context(|| format!("parsing archive URL {}", raw))
}
