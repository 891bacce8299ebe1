//! One complete selection run: scan, load history, draw, remember.

use crate::catalog::{self, Track};
use crate::config::RuntimeConfig;
use crate::error::PickError;
use crate::history::RecencyLog;
use crate::quality::BitrateEstimator;
use crate::selector::Selector;
use anyhow::Result;
use log::info;
use rand::Rng;

/// Pick the next track and record it in the history file.
///
/// # Errors
///
/// Returns [`PickError`] when there is nothing to pick from, or an I/O error
/// from scanning the music folder or writing the history.
pub fn pick_next<R: Rng + ?Sized>(
    config: &RuntimeConfig,
    estimator: &dyn BitrateEstimator,
    rng: &mut R,
) -> Result<Track> {
    let catalog = catalog::scan(&config.music_dir, &config.extensions)?;
    let mut log = RecencyLog::load(&config.history_path);

    let selector = Selector::new(estimator, config.history_limit);
    let track = selector
        .select(&catalog, &log, rng)
        .ok_or_else(|| PickError::EmptyCatalog(config.music_dir.clone()))?;

    log.record(track.clone());
    log.save(&config.history_path, config.retention)?;

    info!("Picked {track}");
    Ok(track)
}
