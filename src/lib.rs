//! Picks the next track to play from a folder of audio files.
//!
//! Each run scans the music folder, skips whatever was picked recently, and
//! draws one of the remaining tracks at random, nudged toward files with a
//! higher bitrate. The pick is remembered in a small JSON history so the
//! next run can avoid it.
//!
//! Core modules:
//! - [`catalog`] - Finding audio files
//! - [`quality`] - Bitrate estimation
//! - [`history`] - Recently-played log
//! - [`algorithm`] - Weights and the weighted draw
//! - [`selector`] - Recency filtering and selection
//! - [`pick`] - One full run
//!
//! ### Supporting Modules
//!
//! - [`config`] - Locations and tuning constants
//! - [`cli`] - Command-line interface definitions with clap integration
//! - [`completion`] - Shell completion generation
//! - [`error`] - Fatal conditions and exit codes
//!
//! ## Quick Start Example
//!
//! ```no_run
//! use nexttrack::{config::RuntimeConfig, pick, quality};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let config = RuntimeConfig::default();
//! let estimator = quality::default_estimator();
//! let mut rng = StdRng::from_entropy();
//!
//! let track = pick::pick_next(&config, estimator.as_ref(), &mut rng)?;
//! println!("{track}");
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Weighting
//!
//! ```text
//! weight = 1 + bitrate_bps / 128_000
//! ```
//!
//! FLAC files count as 1411 kbps. Files whose bitrate cannot be read count as
//! 0 and still get weight 1. Build without the `metadata` feature and every
//! track weighs 1.
//!
//! ## Recency
//!
//! The last `min(N / 2, 10)` picks of a catalog of `N` tracks are skipped.
//! If that would leave nothing, nothing is skipped. The history file keeps
//! the last 20 picks.

pub mod algorithm;
pub mod catalog;
pub mod cli;
pub mod completion;
pub mod config;
pub mod error;
pub mod history;
pub mod pick;
pub mod quality;
pub mod selector;
