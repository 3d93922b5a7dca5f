//! Unpacking the GTFS zip archive.

use std::fs::File;
use std::path::Path;

use tracing::{debug, info};

use super::error::FeedError;

/// Extract every file in the zip at `archive_path` into `dest`.
///
/// Existing files are overwritten. Entries whose names would land outside
/// `dest` (absolute paths, `..` components) abort the extraction.
/// Returns the number of files written.
pub fn extract_archive(archive_path: &Path, dest: &Path) -> Result<usize, FeedError> {
    let file = File::open(archive_path).map_err(|e| FeedError::io(archive_path, e))?;
    let mut archive = zip::ZipArchive::new(file)?;

    std::fs::create_dir_all(dest).map_err(|e| FeedError::io(dest, e))?;

    let mut written = 0;
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        let relative = entry.enclosed_name().ok_or_else(|| FeedError::UnsafeEntry {
            name: entry.name().to_string(),
        })?;
        let out_path = dest.join(relative);

        if entry.is_dir() {
            std::fs::create_dir_all(&out_path).map_err(|e| FeedError::io(&out_path, e))?;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| FeedError::io(parent, e))?;
        }

        let mut out = File::create(&out_path).map_err(|e| FeedError::io(&out_path, e))?;
        let bytes = std::io::copy(&mut entry, &mut out).map_err(|e| FeedError::io(&out_path, e))?;
        debug!(file = %out_path.display(), bytes, "Extracted archive entry");
        written += 1;
    }

    info!(
        archive = %archive_path.display(),
        dest = %dest.display(),
        files = written,
        "Extracted GTFS archive"
    );
    Ok(written)
}
