//! Main entry point for track generation from Bluesforge parameters.
//!
//! [`generate_track`] wires the pipeline together: validate the parameter
//! tuple, compose the four voice streams, serialize each into delta-timed
//! messages, and assemble the SMF document. The result carries the file bytes
//! plus their BLAKE3 hash so callers can verify determinism.

use thiserror::Error;

use bluesforge_spec::{BackendError, TrackParams};

use crate::compose::{compose, ComposeError, Composition};
use crate::smf::{serialize_events, MessageKind, SmfDocument, TimedMessage, TrackChunk};

#[cfg(test)]
mod tests;

/// Channels assigned to the four voice tracks, in file order.
const STOMP_CHANNEL: u8 = 0;
const RHYTHM_CHANNEL: u8 = 1;
const LEAD_CHANNEL: u8 = 2;
const BASS_CHANNEL: u8 = 3;

/// GM programs for the three pitched voices.
const STEEL_GUITAR: u8 = 25;
const OVERDRIVE_GUITAR: u8 = 29;
const ACOUSTIC_BASS: u8 = 32;

/// Error type for track generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Parameter tuple rejected by validation.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Composition error.
    #[error("Compose error: {0}")]
    Compose(#[from] ComposeError),

    /// IO error during writing.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl BackendError for GenerateError {
    fn code(&self) -> &'static str {
        match self {
            GenerateError::InvalidParameter(_) => "MIDI_001",
            GenerateError::Compose(err) => err.code(),
            GenerateError::IoError(_) => "MIDI_003",
        }
    }

    fn category(&self) -> &'static str {
        "midi"
    }
}

/// Result of track generation.
#[derive(Debug)]
pub struct GenerateResult {
    /// Generated SMF bytes.
    pub data: Vec<u8>,
    /// BLAKE3 hash of the generated data.
    pub hash: String,
    /// File extension.
    pub extension: &'static str,
}

/// Tempo meta value for a BPM: microseconds per quarter note, rounded to the
/// nearest microsecond.
pub fn tempo_microseconds(bpm: u16) -> u32 {
    let bpm = bpm as u32;
    (60_000_000 + bpm / 2) / bpm
}

/// Generate one SMF document from a parameter tuple.
///
/// This is the main entry point for generation. Identical tuples always
/// produce byte-identical output.
pub fn generate_track(params: &TrackParams) -> Result<GenerateResult, GenerateError> {
    let validation = params.validate();
    if !validation.is_ok() {
        let joined = validation
            .errors
            .iter()
            .map(|error| error.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(GenerateError::InvalidParameter(joined));
    }

    let piece = compose(params.key.root(), params.grit, params.slide_magnitude)?;
    let document = build_document(&piece, params.bpm);

    let data = document.to_bytes()?;
    let hash = blake3::hash(&data).to_hex().to_string();

    Ok(GenerateResult {
        data,
        hash,
        extension: "mid",
    })
}

/// Assemble the four voice tracks into a document.
///
/// The tempo meta message lives on the stomp track only; each pitched track
/// opens with its GM program change.
pub(crate) fn build_document(piece: &Composition, bpm: u16) -> SmfDocument {
    let mut document = SmfDocument::new();

    let mut stomp = TrackChunk::new(STOMP_CHANNEL);
    stomp.push(TimedMessage::new(
        0,
        MessageKind::Tempo {
            microseconds_per_quarter: tempo_microseconds(bpm),
        },
    ));
    stomp.extend(serialize_events(&piece.stomp));
    document.add_track(stomp);

    for (channel, program, events) in [
        (RHYTHM_CHANNEL, STEEL_GUITAR, &piece.rhythm),
        (LEAD_CHANNEL, OVERDRIVE_GUITAR, &piece.lead),
        (BASS_CHANNEL, ACOUSTIC_BASS, &piece.bass),
    ] {
        let mut track = TrackChunk::new(channel);
        track.push(TimedMessage::new(0, MessageKind::ProgramChange { program }));
        track.extend(serialize_events(events));
        document.add_track(track);
    }

    document
}
