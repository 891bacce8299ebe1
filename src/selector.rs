//! Choosing the next track: recency filtering, weighting, drawing.

use crate::algorithm::{self, WeightedEntry};
use crate::catalog::Track;
use crate::history::RecencyLog;
use crate::quality::BitrateEstimator;
use log::{debug, trace};
use rand::Rng;

/// Catalog tracks not in `window`, or the whole catalog if that leaves nothing.
#[must_use]
pub fn eligible<'a>(catalog: &'a [Track], window: &[Track]) -> Vec<&'a Track> {
    let fresh: Vec<&Track> = catalog.iter().filter(|t| !window.contains(t)).collect();
    if fresh.is_empty() {
        debug!("Recency window covers the whole catalog; ignoring it");
        catalog.iter().collect()
    } else {
        fresh
    }
}

/// Weighted selector over a catalog, using one estimator for the whole run.
pub struct Selector<'e> {
    estimator: &'e dyn BitrateEstimator,
    history_limit: usize,
}

impl<'e> Selector<'e> {
    #[must_use]
    pub fn new(estimator: &'e dyn BitrateEstimator, history_limit: usize) -> Self {
        Self {
            estimator,
            history_limit,
        }
    }

    /// Weigh each candidate by its estimated quality.
    #[must_use]
    pub fn score(&self, candidates: &[&Track]) -> Vec<WeightedEntry> {
        candidates
            .iter()
            .map(|track| {
                let entry = WeightedEntry::new((*track).clone(), self.estimator.estimate(track.as_path()));
                trace!("Weight {} for {}", entry.weight, entry.track);
                entry
            })
            .collect()
    }

    /// Draw the next track. `None` only when `catalog` is empty.
    pub fn select<R: Rng + ?Sized>(
        &self,
        catalog: &[Track],
        log: &RecencyLog,
        rng: &mut R,
    ) -> Option<Track> {
        let window = log.exclusion_window(catalog.len(), self.history_limit);
        let candidates = eligible(catalog, window);
        debug!(
            "{} of {} tracks eligible (window {})",
            candidates.len(),
            catalog.len(),
            window.len()
        );

        let entries = self.score(&candidates);
        algorithm::weighted_draw(&entries, rng).map(|entry| entry.track.clone())
    }
}
