// src/process/extract.rs
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, instrument, warn};
use zip::ZipArchive;

/// Unpack every entry of the ZIP at `archive_path` into `dest_dir`, then delete the ZIP.
///
/// Entries that would land outside `dest_dir` are skipped. Later entries overwrite
/// earlier ones with the same path. Returns the files written, in archive order.
#[instrument(level = "info", skip(archive_path, dest_dir), fields(zip = %archive_path.as_ref().display()))]
pub fn extract_and_remove<P: AsRef<Path>, Q: AsRef<Path>>(
    archive_path: P,
    dest_dir: Q,
) -> Result<Vec<PathBuf>> {
    let start = Instant::now();
    let archive_path = archive_path.as_ref();
    let dest_dir = dest_dir.as_ref();

    let written = {
        let file = File::open(archive_path)
            .with_context(|| format!("opening ZIP {}", archive_path.display()))?;
        let mut archive = ZipArchive::new(file)
            .with_context(|| format!("reading ZIP {}", archive_path.display()))?;
        fs::create_dir_all(dest_dir)
            .with_context(|| format!("creating {}", dest_dir.display()))?;

        let mut written = Vec::with_capacity(archive.len());
        for i in 0..archive.len() {
            let mut entry = archive.by_index(i).with_context(|| {
                format!("accessing entry {} in {}", i, archive_path.display())
            })?;

            let out_path = match entry.enclosed_name() {
                Some(rel) => dest_dir.join(rel),
                None => {
                    warn!(entry = entry.name(), "skipping entry outside destination");
                    continue;
                }
            };

            if entry.is_dir() {
                fs::create_dir_all(&out_path)
                    .with_context(|| format!("creating {}", out_path.display()))?;
                continue;
            }

            if let Some(parent) = out_path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            let mut out = File::create(&out_path)
                .with_context(|| format!("creating {}", out_path.display()))?;
            let size = io::copy(&mut entry, &mut out)
                .with_context(|| format!("writing {}", out_path.display()))?;
            debug!(path = %out_path.display(), size, "extracted entry");

            written.push(out_path);
        }
        written
    };

    fs::remove_file(archive_path)
        .with_context(|| format!("removing ZIP {}", archive_path.display()))?;

    info!(
        files = written.len(),
        dest = %dest_dir.display(),
        elapsed = ?start.elapsed(),
        "extracted and removed archive"
    );
    Ok(written)
}
