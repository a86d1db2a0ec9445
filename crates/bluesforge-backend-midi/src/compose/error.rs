//! Error types for the composition engine.

use thiserror::Error;

use bluesforge_spec::BackendError;

/// Errors that can occur while composing.
///
/// The engine performs only arithmetic on validated constants, so the failure
/// surface is narrow: a root note whose derived extremes leave the MIDI range
/// is rejected before any event is emitted.
#[derive(Debug, Error)]
pub enum ComposeError {
    #[error(
        "root note {root} puts emitted notes outside the MIDI range \
         (would span {lowest}..={highest})"
    )]
    RootOutOfRange { root: u8, lowest: i32, highest: i32 },
}

impl BackendError for ComposeError {
    fn code(&self) -> &'static str {
        match self {
            ComposeError::RootOutOfRange { .. } => "MIDI_002",
        }
    }

    fn category(&self) -> &'static str {
        "midi"
    }
}
