//! Track weighting and the weighted random draw.
//!
//! Every candidate starts at weight 1 and earns one more point per full
//! 128 kbps of estimated bitrate:
//!
//! ```text
//! weight(track) = 1 + bitrate_bps / 128_000
//! ```
//!
//! So a 128 kbps MP3 weighs 2, a 320 kbps MP3 weighs 3 and a FLAC file
//! (nominal 1411 kbps) weighs 12. Tracks with unknown quality still weigh 1
//! and can always be drawn.

use crate::catalog::Track;
use crate::config::WEIGHT_STEP_BPS;
use crate::quality::Bitrate;
use rand::Rng;

/// A candidate and its weight, valid for one draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedEntry {
    pub track: Track,
    pub weight: u64,
}

impl WeightedEntry {
    #[must_use]
    pub fn new(track: Track, bitrate: Bitrate) -> Self {
        Self {
            track,
            weight: weight_for(bitrate),
        }
    }
}

/// Draw weight for a track of the given quality; never below 1.
#[must_use]
pub const fn weight_for(bitrate: Bitrate) -> u64 {
    1 + (bitrate.bps() / WEIGHT_STEP_BPS) as u64
}

/// Pick one entry with probability proportional to its weight.
///
/// Draws `r` uniformly from `[0, total)` and walks the entries in order,
/// returning the first whose running total reaches `r`. If the walk falls off
/// the end the first entry is returned. `None` only for an empty slice.
#[allow(clippy::cast_precision_loss)]
pub fn weighted_draw<'a, R: Rng + ?Sized>(
    entries: &'a [WeightedEntry],
    rng: &mut R,
) -> Option<&'a WeightedEntry> {
    let first = entries.first()?;
    let total: u64 = entries.iter().map(|e| e.weight).sum();
    if total == 0 {
        return Some(first);
    }

    let r = rng.gen_range(0.0..total as f64);

    let mut cumulative = 0u64;
    for entry in entries {
        cumulative += entry.weight;
        if cumulative as f64 >= r {
            return Some(entry);
        }
    }

    Some(first)
}
