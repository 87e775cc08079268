use std::path::Path;

use crate::media::MediaFile;

/// Marker identifying files that already carry the target container.
/// Matched anywhere in the name, mirroring how conversions name their output.
pub const TARGET_MARKER: &str = "webm";

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("cannot read directory {path}: {source}")]
    Unreadable {
        path: String,
        source: std::io::Error,
    },
}

/// Directory contents partitioned into files still in original form and files
/// that already carry the target container marker. Listing order is preserved
/// in both halves.
#[derive(Debug, Default, Clone)]
pub struct Candidates {
    pub originals: Vec<MediaFile>,
    pub converted: Vec<MediaFile>,
}

/// List the working directory (flat, no recursion) and partition its files.
///
/// Excluded outright: hidden files, subtitle files ("srt" in the name), log
/// files ("log" in the name), the tool's own executable if it sits in the
/// scanned directory, and anything that is not a regular file. An unreadable
/// directory is fatal — no partial result is returned. Unreadable individual
/// entries log a warning and are skipped.
pub fn list_candidates(dir: &Path) -> Result<Candidates, ScanError> {
    let entries = std::fs::read_dir(dir).map_err(|source| ScanError::Unreadable {
        path: dir.display().to_string(),
        source,
    })?;
    let own_exe = std::env::current_exe()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_os_string()));

    let mut candidates = Candidates::default();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Cannot access entry: {}", e);
                continue;
            }
        };
        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        if !is_file {
            continue;
        }
        if own_exe.as_deref() == Some(entry.file_name().as_os_str()) {
            continue;
        }
        let Ok(name) = entry.file_name().into_string() else {
            tracing::warn!("Skipping non-unicode filename: {:?}", entry.file_name());
            continue;
        };
        if is_excluded(&name) {
            continue;
        }
        if name.contains(TARGET_MARKER) {
            candidates.converted.push(MediaFile::new(name));
        } else {
            candidates.originals.push(MediaFile::new(name));
        }
    }
    Ok(candidates)
}

/// Hidden files, subtitles, and logs never take part in reconciliation.
fn is_excluded(name: &str) -> bool {
    name.starts_with('.') || name.contains("srt") || name.contains("log")
}
