//! Key signatures and the per-run parameter tuple.

use serde::{Deserialize, Serialize};

use crate::error::{ErrorCode, ValidationError, ValidationResult};

/// Lowest BPM accepted by validation.
pub const MIN_BPM: u16 = 20;

/// Highest BPM accepted by validation.
pub const MAX_BPM: u16 = 300;

/// Maximum pitch wheel excursion in either direction.
pub const MAX_SLIDE_MAGNITUDE: u16 = 8192;

/// A supported key signature, mapping a name to a root MIDI note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeySignature {
    EMinor,
    AMinor,
    DMinor,
    BMinor,
}

impl KeySignature {
    /// All supported key signatures, in catalog order.
    pub const ALL: [KeySignature; 4] = [
        KeySignature::EMinor,
        KeySignature::AMinor,
        KeySignature::DMinor,
        KeySignature::BMinor,
    ];

    /// Root MIDI note for this key.
    pub fn root(&self) -> u8 {
        match self {
            KeySignature::EMinor => 40,
            KeySignature::AMinor => 45,
            KeySignature::DMinor => 38,
            KeySignature::BMinor => 47,
        }
    }

    /// Catalog name for this key (used in filenames and the manifest).
    pub fn name(&self) -> &'static str {
        match self {
            KeySignature::EMinor => "E_Minor",
            KeySignature::AMinor => "A_Minor",
            KeySignature::DMinor => "D_Minor",
            KeySignature::BMinor => "B_Minor",
        }
    }

    /// Parse a catalog name into a key signature.
    ///
    /// Accepts the canonical form ("E_Minor") as well as lowercase and
    /// dash-separated variants ("e_minor", "e-minor").
    pub fn from_name(name: &str) -> Option<KeySignature> {
        let normalized = name.trim().to_lowercase().replace('-', "_");
        KeySignature::ALL
            .iter()
            .copied()
            .find(|key| key.name().to_lowercase() == normalized)
    }
}

impl std::fmt::Display for KeySignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for KeySignature {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KeySignature::from_name(s).ok_or_else(|| {
            ValidationError::new(
                ErrorCode::UnknownKey,
                format!("unknown key signature '{}'", s),
            )
        })
    }
}

/// The parameter tuple for one generation run.
///
/// A run is a pure function of this tuple: identical tuples always produce
/// byte-identical output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackParams {
    /// Key signature selecting the root pitch.
    pub key: KeySignature,
    /// Tempo in beats per minute, used only for the global tempo marker.
    pub bpm: u16,
    /// Deterministic backbeat-accent density constant in [0, 1].
    pub grit: f64,
    /// Pitch-bend excursion depth for slide notes, in pitch wheel units.
    pub slide_magnitude: u16,
}

impl TrackParams {
    /// Creates a new parameter tuple.
    pub fn new(key: KeySignature, bpm: u16, grit: f64, slide_magnitude: u16) -> Self {
        Self {
            key,
            bpm,
            grit,
            slide_magnitude,
        }
    }

    /// Validate the tuple, rejecting it before any event generation begins.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::success();

        if self.bpm < MIN_BPM || self.bpm > MAX_BPM {
            result.add_error(ValidationError::new(
                ErrorCode::BpmOutOfRange,
                format!(
                    "bpm {} outside supported range {}..={}",
                    self.bpm, MIN_BPM, MAX_BPM
                ),
            ));
        }

        if !self.grit.is_finite() || !(0.0..=1.0).contains(&self.grit) {
            result.add_error(ValidationError::new(
                ErrorCode::GritOutOfRange,
                format!("grit constant {} outside [0, 1]", self.grit),
            ));
        }

        if self.slide_magnitude > MAX_SLIDE_MAGNITUDE {
            result.add_error(ValidationError::new(
                ErrorCode::SlideOutOfRange,
                format!(
                    "slide magnitude {} exceeds pitch wheel range {}",
                    self.slide_magnitude, MAX_SLIDE_MAGNITUDE
                ),
            ));
        }

        result
    }
}
