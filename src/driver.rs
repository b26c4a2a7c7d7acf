// src/driver.rs

use anyhow::{Context, Result};
use std::io::Write;
use tracing::info;

use crate::archive::Archive;
use crate::config::Config;
use crate::fetch::Source;
use crate::process::extract::extract_and_remove;

/// Fetch every year in `config.years`, oldest first, writing one status line per year to `out`.
///
/// A failed download is reported and skipped. A failed extraction aborts the run.
pub fn run<S: Source, W: Write>(config: &Config, source: &S, out: &mut W) -> Result<()> {
    config.validate()?;
    info!(
        from = config.years.start(),
        to = config.years.end(),
        layout = ?config.layout,
        "starting run"
    );

    for year in config.years.clone() {
        let archive = Archive::new(&config.base_url, year, config.layout, &config.root)?;
        let name = archive.file_name();

        match source.fetch(&archive) {
            Ok(path) => match &archive.extract_dir {
                Some(dir) => {
                    extract_and_remove(&path, dir)
                        .with_context(|| format!("extracting {}", name))?;
                    writeln!(out, "Downloaded and extracted {} to {}", name, dir.display())?;
                }
                None => {
                    writeln!(out, "Downloaded {} to {}", name, path.display())?;
                }
            },
            Err(err) => {
                writeln!(out, "Failed to download {}: {}", name, err)?;
            }
        }
    }

    info!("all done");
    Ok(())
}
