//! SMF file writer - assembles track chunks into a complete MIDI file.

use byteorder::{BigEndian, WriteBytesExt};
use std::io::{self, Write};

use super::track::TrackChunk;

/// Header chunk magic identifier.
pub const SMF_MAGIC: &[u8; 4] = b"MThd";

/// Header chunk body length (always six bytes).
pub const SMF_HEADER_LENGTH: u32 = 6;

/// SMF format 1: multiple synchronized tracks.
pub const SMF_FORMAT: u16 = 1;

/// Ticks per quarter note in the header division field.
pub const TICKS_PER_QUARTER: u16 = 480;

/// An SMF document containing all track data for one piece.
#[derive(Debug, Clone, Default)]
pub struct SmfDocument {
    /// Track chunks in file order.
    pub tracks: Vec<TrackChunk>,
}

impl SmfDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a track to the document.
    pub fn add_track(&mut self, track: TrackChunk) {
        self.tracks.push(track);
    }

    /// Write the complete document to a writer.
    pub fn write<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(SMF_MAGIC)?;
        writer.write_u32::<BigEndian>(SMF_HEADER_LENGTH)?;
        writer.write_u16::<BigEndian>(SMF_FORMAT)?;
        writer.write_u16::<BigEndian>(self.tracks.len() as u16)?;
        writer.write_u16::<BigEndian>(TICKS_PER_QUARTER)?;

        for track in &self.tracks {
            track.write(writer)?;
        }

        Ok(())
    }

    /// Write the document to a byte vector.
    pub fn to_bytes(&self) -> io::Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write(&mut buffer)?;
        Ok(buffer)
    }

    /// Compute the BLAKE3 hash of the document bytes.
    pub fn compute_hash(&self) -> io::Result<String> {
        let bytes = self.to_bytes()?;
        Ok(blake3::hash(&bytes).to_hex().to_string())
    }
}

/// Validate an SMF file has a correct header chunk.
pub fn validate_smf_bytes(data: &[u8]) -> Result<(), SmfValidationError> {
    if data.len() < 14 {
        return Err(SmfValidationError::FileTooSmall(data.len()));
    }

    if &data[0..4] != SMF_MAGIC {
        return Err(SmfValidationError::InvalidMagic);
    }

    let header_length = u32::from_be_bytes([data[4], data[5], data[6], data[7]]);
    if header_length != SMF_HEADER_LENGTH {
        return Err(SmfValidationError::InvalidHeaderLength(header_length));
    }

    let format = u16::from_be_bytes([data[8], data[9]]);
    if format != SMF_FORMAT {
        return Err(SmfValidationError::UnsupportedFormat(format));
    }

    let division = u16::from_be_bytes([data[12], data[13]]);
    if division == 0 {
        return Err(SmfValidationError::InvalidDivision);
    }

    Ok(())
}

/// SMF validation error.
#[derive(Debug, Clone)]
pub enum SmfValidationError {
    /// File is too small to hold a header chunk.
    FileTooSmall(usize),
    /// Invalid magic identifier.
    InvalidMagic,
    /// Header chunk length is not six.
    InvalidHeaderLength(u32),
    /// Unsupported SMF format.
    UnsupportedFormat(u16),
    /// Division field is zero.
    InvalidDivision,
}

impl std::fmt::Display for SmfValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SmfValidationError::FileTooSmall(size) => {
                write!(f, "File too small: {} bytes", size)
            }
            SmfValidationError::InvalidMagic => {
                write!(f, "Invalid SMF magic identifier")
            }
            SmfValidationError::InvalidHeaderLength(length) => {
                write!(f, "Invalid header chunk length: {}", length)
            }
            SmfValidationError::UnsupportedFormat(format) => {
                write!(f, "Unsupported SMF format: {}", format)
            }
            SmfValidationError::InvalidDivision => {
                write!(f, "Header division must be non-zero")
            }
        }
    }
}

impl std::error::Error for SmfValidationError {}
