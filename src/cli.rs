//! # Command-Line Interface Module
//!
//! Clap definitions for nexttrack. With no subcommand the binary picks a
//! track and prints its path, so it can be dropped straight into a player
//! script:
//!
//! ```bash
//! mpv "$(nexttrack)"
//! nexttrack --music-dir ~/Music history
//! nexttrack completion fish > ~/.config/fish/completions/nexttrack.fish
//! ```

use crate::config::{RuntimeConfig, DEFAULT_HISTORY_FILE, DEFAULT_MUSIC_DIR};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Shell types supported for completion generation
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

/// Main application arguments structure.
#[derive(Parser, Debug)]
#[command(name = "nexttrack")]
#[command(about = "Pick the next song from a music folder - variety first, fidelity second")]
#[command(version)]
pub struct Args {
    /// Root of the music collection, scanned recursively
    #[arg(long, env = "NEXTTRACK_MUSIC_DIR", default_value = DEFAULT_MUSIC_DIR, global = true)]
    pub music_dir: PathBuf,

    /// JSON file remembering recent picks
    #[arg(long, env = "NEXTTRACK_HISTORY_FILE", default_value = DEFAULT_HISTORY_FILE, global = true)]
    pub history_file: PathBuf,

    /// What to do; picks a track when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Args {
    /// Runtime configuration described by these arguments
    #[must_use]
    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig::new(self.music_dir.clone(), self.history_file.clone())
    }
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Pick the next track and print its absolute path
    ///
    /// Tracks played recently are skipped, and higher-bitrate files are
    /// slightly more likely to come up. The pick is added to the history.
    Pick,

    /// Show recently picked tracks, oldest first
    History,

    /// Generate shell completions
    ///
    /// Usage: nexttrack completion bash > ~/.local/share/bash-completion/completions/nexttrack
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}
