// src/archive.rs

use anyhow::Result;
use std::path::{Path, PathBuf};
use url::Url;

use crate::fetch::urls::archive_url;

/// Where a run leaves its files on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Layout {
    /// `../data/FARS{year}NationalCSV.zip`, kept as-is.
    Flat,
    /// `data/raw/{year}.zip`, unpacked into `data/raw/{year}/` and then removed.
    #[default]
    Extracted,
}

/// One year's national CSV archive and the paths it maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Archive {
    pub year: u16,
    pub url: Url,
    pub archive_path: PathBuf,
    pub extract_dir: Option<PathBuf>,
}

impl Archive {
    /// Resolve the URL and on-disk locations for `year` under `root`.
    pub fn new(base_url: &str, year: u16, layout: Layout, root: &Path) -> Result<Self> {
        let url = archive_url(base_url, year)?;
        let (archive_path, extract_dir) = match layout {
            Layout::Flat => (root.join("..").join("data").join(file_name(year)), None),
            Layout::Extracted => {
                let raw = root.join("data").join("raw");
                (
                    raw.join(format!("{}.zip", year)),
                    Some(raw.join(year.to_string())),
                )
            }
        };
        Ok(Self {
            year,
            url,
            archive_path,
            extract_dir,
        })
    }

    /// Name the upstream server gives this archive.
    pub fn file_name(&self) -> String {
        file_name(self.year)
    }
}

fn file_name(year: u16) -> String {
    format!("FARS{}NationalCSV.zip", year)
}
