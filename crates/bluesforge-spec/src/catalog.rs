//! The compiled-in catalog of parameter combinations.
//!
//! The catalog is the full cross-product of {key x tempo x grit x slide
//! magnitude}. It is fixed at compile time; there is no runtime configuration.
//! Iteration order is deterministic so batch runs and manifests are stable
//! across invocations.

use crate::params::{KeySignature, TrackParams};

/// Tempos in the catalog: 65 to 85 BPM in steps of 2.
pub const MIN_TEMPO: u16 = 65;
const TEMPO_LIMIT: u16 = 87;
const TEMPO_STEP: u16 = 2;

/// Grit constants in the catalog, ascending.
pub const GRIT_CONSTANTS: [f64; 3] = [0.4, 0.7, 0.95];

/// Slide magnitudes in the catalog, in pitch wheel units (8192 is max bend).
pub const SLIDE_MAGNITUDES: [u16; 3] = [2000, 4000, 8000];

/// Tempos in the catalog, ascending.
pub fn tempos() -> impl Iterator<Item = u16> {
    (MIN_TEMPO..TEMPO_LIMIT).step_by(TEMPO_STEP as usize)
}

/// All parameter combinations in catalog order: key, then tempo, then grit,
/// then slide magnitude (innermost).
pub fn catalog() -> Vec<TrackParams> {
    let mut combinations = Vec::new();
    for key in KeySignature::ALL {
        for bpm in tempos() {
            for grit in GRIT_CONSTANTS {
                for slide_magnitude in SLIDE_MAGNITUDES {
                    combinations.push(TrackParams::new(key, bpm, grit, slide_magnitude));
                }
            }
        }
    }
    combinations
}

/// Output filename for one parameter combination.
pub fn track_filename(params: &TrackParams) -> String {
    format!(
        "Blues_{}_{}_{}_{}.mid",
        params.key.name(),
        params.bpm,
        params.grit,
        params.slide_magnitude
    )
}
