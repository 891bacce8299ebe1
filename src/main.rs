//! # nexttrack
//!
//! Prints the path of the next song to play and remembers it.
//!
//! ## Usage
//!
//! ```bash
//! # Pick from ./music, remember in ./data/history.json
//! nexttrack
//!
//! # Somewhere else
//! nexttrack --music-dir ~/Music --history-file ~/.cache/nexttrack.json
//!
//! # What came up lately
//! nexttrack history
//! ```
//!
//! ## Exit codes
//!
//! - `0`: a track was printed
//! - `1`: unexpected failure (unreadable folder, history not writable)
//! - `2`: music directory missing
//! - `3`: no audio files found

use anyhow::Result;
use clap::{CommandFactory, Parser};
use log::{debug, error};
use nexttrack::error::{exit_code_for, PickError};
use nexttrack::{cli, completion, history::RecencyLog, pick, quality};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, Write};

fn run(args: cli::Args) -> Result<()> {
    let config = args.runtime_config();
    debug!("Using {config:?}");

    match args.command.unwrap_or(cli::Command::Pick) {
        cli::Command::Pick => {
            let estimator = quality::default_estimator();
            // Fresh OS entropy each run so identical histories still diverge
            let mut rng = StdRng::from_entropy();
            let track = pick::pick_next(&config, estimator.as_ref(), &mut rng)?;
            println!("{track}");
        }
        cli::Command::History => {
            let log = RecencyLog::load(&config.history_path);
            let mut stdout = io::stdout().lock();
            for track in log.entries() {
                writeln!(stdout, "{track}")?;
            }
        }
        cli::Command::Completion { shell } => {
            let mut cmd = cli::Args::command();
            completion::generate_completions(
                completion::shell_to_completion_shell(shell),
                &mut cmd,
                &mut io::stdout(),
            );
        }
    }

    Ok(())
}

/// Main entry point.
///
/// Logging goes to stderr through `env_logger` (`RUST_LOG=debug nexttrack`),
/// keeping stdout for the picked path alone. Nothing to pick from is an
/// expected outcome reported by exit code only, so it logs at debug level.
fn main() {
    env_logger::init();

    let args = cli::Args::parse();

    if let Err(err) = run(args) {
        if err.downcast_ref::<PickError>().is_some() {
            debug!("{err:#}");
        } else {
            error!("{err:#}");
        }
        std::process::exit(exit_code_for(&err));
    }
}
