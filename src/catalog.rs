//! Catalog scanning: every audio file under the music folder.

use crate::error::PickError;
use anyhow::{Context, Result};
use log::{debug, warn};
use path_absolutize::Absolutize;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use walkdir::WalkDir;

/// One audio file, identified by its absolute path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Track {
    path: String,
}

impl Track {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn as_path(&self) -> &Path {
        Path::new(&self.path)
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

/// All tracks found by one scan, sorted by path.
pub type Catalog = Vec<Track>;

/// Whether `path` carries one of `extensions` (case-insensitive, leading dot optional).
#[must_use]
pub fn is_audio_file(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            extensions
                .iter()
                .map(|e| e.trim().trim_start_matches('.'))
                .any(|e| !e.is_empty() && e.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

/// Recursively collect the audio files under `root`.
///
/// # Errors
///
/// - [`PickError::MissingRoot`] if `root` does not exist
/// - [`PickError::EmptyCatalog`] if nothing under it matches `extensions`
/// - any directory traversal failure, with the offending path as context
pub fn scan(root: &Path, extensions: &[String]) -> Result<Catalog> {
    let root = root
        .absolutize()
        .with_context(|| format!("Failed to resolve music directory {}", root.display()))?;

    if !root.is_dir() {
        return Err(PickError::MissingRoot(root.into_owned()).into());
    }

    let mut tracks = Catalog::new();
    for entry in WalkDir::new(&root) {
        let entry = entry
            .with_context(|| format!("Failed to scan music directory {}", root.display()))?;
        // `Path::is_file` follows symlinks, so linked tracks count too
        let path = entry.path();
        if !path.is_file() || !is_audio_file(path, extensions) {
            continue;
        }
        match path.to_str() {
            Some(path) => tracks.push(Track::new(path)),
            None => warn!("Skipping track with non-UTF-8 path {}", path.display()),
        }
    }

    if tracks.is_empty() {
        return Err(PickError::EmptyCatalog(root.into_owned()).into());
    }

    tracks.sort();
    debug!("Found {} tracks under {}", tracks.len(), root.display());
    Ok(tracks)
}
