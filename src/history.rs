//! # Recently-Played Log
//!
//! Remembers the last few picks between runs so the selector can steer away
//! from them. The log is a plain JSON array of paths, oldest first:
//!
//! ```json
//! ["/music/a.mp3", "/music/b.flac"]
//! ```
//!
//! ## Lifecycle
//!
//! The log is an ordinary value. It is loaded once at the start of a run,
//! extended in memory with [`RecencyLog::record`], and written back once with
//! [`RecencyLog::save`]. Nothing else touches the file, and two runs racing on
//! it simply leave whichever wrote last.
//!
//! ## Two limits
//!
//! - **Retention** (20): how many entries are kept on disk.
//! - **Window** (`min(N / 2, 10)` for a catalog of `N` tracks): how many of
//!   the newest entries actually block a track. Halving the catalog size keeps
//!   small collections from blocking themselves out entirely.

use crate::catalog::Track;
use anyhow::{Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Ordered log of picked tracks, most recent last.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecencyLog {
    entries: Vec<Track>,
}

impl RecencyLog {
    #[must_use]
    pub fn new(entries: Vec<Track>) -> Self {
        Self { entries }
    }

    /// Load the log stored at `path`.
    ///
    /// A missing, unreadable or malformed file yields an empty log; a broken
    /// history only costs some variety, never the pick itself.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("No history at {}, starting fresh", path.display());
                return Self::default();
            }
            Err(err) => {
                warn!("Could not read history {}: {err}", path.display());
                return Self::default();
            }
        };

        match serde_json::from_str::<Self>(&raw) {
            Ok(log) => {
                debug!("Loaded {} history entries", log.len());
                log
            }
            Err(err) => {
                warn!("Ignoring malformed history {}: {err}", path.display());
                Self::default()
            }
        }
    }

    /// Length of the exclusion window for a catalog of `catalog_size` tracks.
    #[must_use]
    pub const fn window_len(catalog_size: usize, base_limit: usize) -> usize {
        let half = catalog_size / 2;
        if half < base_limit {
            half
        } else {
            base_limit
        }
    }

    /// The newest entries that currently block re-selection.
    #[must_use]
    pub fn exclusion_window(&self, catalog_size: usize, base_limit: usize) -> &[Track] {
        let len = Self::window_len(catalog_size, base_limit).min(self.entries.len());
        &self.entries[self.entries.len() - len..]
    }

    /// Append a freshly picked track.
    pub fn record(&mut self, track: Track) {
        self.entries.push(track);
    }

    /// Write the newest `retention` entries to `path`, replacing its contents.
    ///
    /// Missing parent directories are created. The file is written next to
    /// its destination and renamed into place, so readers see either the old
    /// log or the new one.
    ///
    /// # Errors
    ///
    /// Fails if the directory cannot be created or the file cannot be written.
    pub fn save(&self, path: &Path, retention: usize) -> Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create history directory {}", dir.display()))?;

        let kept = &self.entries[self.entries.len().saturating_sub(retention)..];
        let json = serde_json::to_string(kept).context("Failed to serialize history")?;

        let mut tmp = NamedTempFile::new_in(dir)
            .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
        tmp.write_all(json.as_bytes())
            .context("Failed to write history")?;
        keep_permissions(tmp.as_file(), path)?;
        tmp.persist(path)
            .with_context(|| format!("Failed to replace history file {}", path.display()))?;

        debug!("Saved {} history entries to {}", kept.len(), path.display());
        Ok(())
    }

    #[must_use]
    pub fn entries(&self) -> &[Track] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Give the replacement file the mode of the file it replaces, or a plain
/// `rw-r--r--` for a new one; temporary files start out owner-only.
fn keep_permissions(file: &fs::File, target: &Path) -> Result<()> {
    let permissions = match fs::metadata(target) {
        Ok(meta) => meta.permissions(),
        #[cfg(unix)]
        Err(_) => {
            use std::os::unix::fs::PermissionsExt;
            fs::Permissions::from_mode(0o644)
        }
        #[cfg(not(unix))]
        Err(_) => return Ok(()),
    };
    file.set_permissions(permissions)
        .with_context(|| format!("Failed to set permissions for {}", target.display()))
}
