//! Encoding-quality estimation used to bias the draw toward better files.
//!
//! The numbers here are rough on purpose. They only nudge weights, so every
//! failure (unknown container, broken tags, no metadata support compiled in)
//! becomes [`Bitrate::Unknown`] instead of an error.

#[cfg(feature = "metadata")]
use crate::config::LOSSLESS_NOMINAL_BPS;
#[cfg(feature = "metadata")]
use log::trace;
use std::path::Path;

/// Outcome of a bitrate estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Bitrate {
    /// Bits per second, always > 0
    Known(u32),
    #[default]
    Unknown,
}

impl Bitrate {
    /// Bits per second, with `Unknown` collapsed to 0.
    #[must_use]
    pub const fn bps(self) -> u32 {
        match self {
            Bitrate::Known(bps) => bps,
            Bitrate::Unknown => 0,
        }
    }
}

impl From<Option<u32>> for Bitrate {
    fn from(bps: Option<u32>) -> Self {
        match bps {
            Some(bps) if bps > 0 => Bitrate::Known(bps),
            _ => Bitrate::Unknown,
        }
    }
}

/// Container classes the estimator knows how to treat.
#[cfg_attr(not(feature = "metadata"), allow(dead_code))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Container {
    /// Lossy formats that record their own bitrate (MPEG, Ogg Vorbis)
    Lossy,
    /// FLAC; reported at the nominal CD rate whatever the real encoding is
    Lossless,
}

#[cfg_attr(not(feature = "metadata"), allow(dead_code))]
fn container_of(path: &Path) -> Option<Container> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "mp3" | "ogg" => Some(Container::Lossy),
        "flac" => Some(Container::Lossless),
        _ => None,
    }
}

/// Something that can guess how good a track sounds.
pub trait BitrateEstimator {
    /// Estimate the bitrate of the file at `path`. Never fails.
    fn estimate(&self, path: &Path) -> Bitrate;
}

/// Estimator for builds without metadata support: every track is `Unknown`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEstimator;

impl BitrateEstimator for NullEstimator {
    fn estimate(&self, _path: &Path) -> Bitrate {
        Bitrate::Unknown
    }
}

/// Reads stream properties with `lofty`.
#[cfg(feature = "metadata")]
#[derive(Debug, Clone, Copy, Default)]
pub struct MetadataEstimator;

#[cfg(feature = "metadata")]
impl MetadataEstimator {
    fn lossy_bitrate(path: &Path) -> Bitrate {
        use lofty::prelude::AudioFile;

        match lofty::read_from_path(path) {
            // lofty reports kbps
            Ok(tagged) => Bitrate::from(
                tagged
                    .properties()
                    .audio_bitrate()
                    .map(|kbps| kbps.saturating_mul(1000)),
            ),
            Err(err) => {
                trace!("No bitrate for {}: {err}", path.display());
                Bitrate::Unknown
            }
        }
    }

    fn lossless_bitrate(path: &Path) -> Bitrate {
        use lofty::file::FileType;
        use lofty::probe::Probe;

        let is_flac = Probe::open(path)
            .ok()
            .and_then(|probe| probe.guess_file_type().ok())
            .is_some_and(|probe| probe.file_type() == Some(FileType::Flac));

        if is_flac {
            Bitrate::Known(LOSSLESS_NOMINAL_BPS)
        } else {
            trace!("Unreadable lossless file {}", path.display());
            Bitrate::Unknown
        }
    }
}

#[cfg(feature = "metadata")]
impl BitrateEstimator for MetadataEstimator {
    fn estimate(&self, path: &Path) -> Bitrate {
        let bitrate = match container_of(path) {
            Some(Container::Lossy) => Self::lossy_bitrate(path),
            Some(Container::Lossless) => Self::lossless_bitrate(path),
            None => Bitrate::Unknown,
        };
        trace!("Estimated {bitrate:?} for {}", path.display());
        bitrate
    }
}

/// The best estimator this build supports, chosen once at startup.
#[must_use]
pub fn default_estimator() -> Box<dyn BitrateEstimator> {
    #[cfg(feature = "metadata")]
    {
        Box::new(MetadataEstimator)
    }
    #[cfg(not(feature = "metadata"))]
    {
        log::debug!("Built without metadata support; weighting all tracks equally");
        Box::new(NullEstimator)
    }
}
