// src/config.rs

use anyhow::{bail, Context, Result};
use std::ops::RangeInclusive;
use std::path::PathBuf;
use url::Url;

use crate::archive::Layout;

pub const DEFAULT_BASE_URL: &str = "https://static.nhtsa.gov/nhtsa/downloads/FARS";
pub const FIRST_YEAR: u16 = 1975;
pub const LAST_YEAR: u16 = 2023;

/// Everything a run needs. `Default` matches a bare invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub years: RangeInclusive<u16>,
    pub layout: Layout,
    /// Directory the layout paths are resolved against. Empty means the working directory.
    pub root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            years: FIRST_YEAR..=LAST_YEAR,
            layout: Layout::default(),
            root: PathBuf::new(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.years.is_empty() {
            bail!(
                "empty year range {}..={}",
                self.years.start(),
                self.years.end()
            );
        }
        Url::parse(&self.base_url)
            .with_context(|| format!("invalid base URL {}", self.base_url))?;
        Ok(())
    }
}
