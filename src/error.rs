//! Fatal conditions that end a run without a selection.
//!
//! Everything else either degrades to a safe default where it happens
//! (unreadable history, unreadable tags) or travels as a plain
//! `anyhow::Error` and exits with status 1.

use std::path::PathBuf;
use thiserror::Error;

/// Exit status for fatal errors that are not a [`PickError`].
pub const EXIT_FAILURE: i32 = 1;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PickError {
    /// The configured music folder is not there.
    #[error("Music directory does not exist: {}", .0.display())]
    MissingRoot(PathBuf),

    /// The music folder holds no file with an accepted extension.
    #[error("No audio files found under {}", .0.display())]
    EmptyCatalog(PathBuf),
}

impl PickError {
    /// Process exit status for this condition; distinct per variant.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            PickError::MissingRoot(_) => 2,
            PickError::EmptyCatalog(_) => 3,
        }
    }
}

/// Map any error coming out of a run to the process exit status.
#[must_use]
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<PickError>()
        .map_or(EXIT_FAILURE, PickError::exit_code)
}
