//! # Configuration Module
//!
//! Runtime configuration for nexttrack: where the music lives, where the
//! recently-played log is stored, and the fixed tuning constants of the
//! selection algorithm.
//!
//! ## Defaults
//!
//! Both paths are relative to the working directory, so a music folder and
//! its play history travel together:
//! - Music: `./music`
//! - History: `./data/history.json`
//!
//! The command line (and the `NEXTTRACK_*` environment variables) can point
//! either one somewhere else; see [`crate::cli`].

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Music folder scanned when nothing else is configured.
pub const DEFAULT_MUSIC_DIR: &str = "./music";

/// Recently-played log location when nothing else is configured.
pub const DEFAULT_HISTORY_FILE: &str = "data/history.json";

/// File extensions (lowercase, no dot) treated as tracks.
pub const AUDIO_EXTENSIONS: [&str; 5] = ["mp3", "ogg", "wav", "flac", "m4a"];

/// Upper bound on the recency window. Small catalogs use less, see
/// [`crate::history::RecencyLog::window_len`].
pub const HISTORY_LIMIT: usize = 10;

/// Entries kept in the history file at rest.
pub const HISTORY_RETENTION: usize = 20;

/// Nominal CD-quality bitrate reported for lossless files.
pub const LOSSLESS_NOMINAL_BPS: u32 = 1_411_000;

/// Each full step of this many bits per second adds one to a track's weight.
pub const WEIGHT_STEP_BPS: u32 = 128_000;

/// Configuration for one selection run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Root of the music collection
    pub music_dir: PathBuf,
    /// JSON file holding the recently-played log
    pub history_path: PathBuf,
    /// Accepted audio extensions, matched case-insensitively
    pub extensions: Vec<String>,
    /// Maximum length of the recency window
    pub history_limit: usize,
    /// Maximum number of entries persisted
    pub retention: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            music_dir: PathBuf::from(DEFAULT_MUSIC_DIR),
            history_path: PathBuf::from(DEFAULT_HISTORY_FILE),
            extensions: AUDIO_EXTENSIONS.iter().map(|e| (*e).to_string()).collect(),
            history_limit: HISTORY_LIMIT,
            retention: HISTORY_RETENTION,
        }
    }
}

impl RuntimeConfig {
    /// Create a configuration with explicit music and history locations
    #[must_use]
    pub fn new(music_dir: PathBuf, history_path: PathBuf) -> Self {
        Self {
            music_dir,
            history_path,
            ..Self::default()
        }
    }

    /// Replace the music folder
    #[must_use]
    pub fn with_music_dir(mut self, music_dir: PathBuf) -> Self {
        self.music_dir = music_dir;
        self
    }

    /// Replace the history file location
    #[must_use]
    pub fn with_history_path(mut self, history_path: PathBuf) -> Self {
        self.history_path = history_path;
        self
    }
}
