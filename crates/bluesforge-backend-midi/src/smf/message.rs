//! Discrete timed MIDI messages.

use byteorder::WriteBytesExt;
use std::io::{self, Write};

/// Pitch wheel center value (no bend).
pub const PITCH_BEND_CENTER: i32 = 8192;

/// Maximum 14-bit pitch wheel value.
pub const PITCH_BEND_MAX: i32 = 16383;

/// The kinds of message a track can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Note onset with key and velocity.
    NoteOn { key: u8, velocity: u8 },
    /// Note release (written with velocity 0).
    NoteOff { key: u8 },
    /// Pitch wheel offset from center; negative bends down.
    PitchBend { offset: i16 },
    /// GM program selection for a voice track.
    ProgramChange { program: u8 },
    /// Global tempo meta message, in microseconds per quarter note.
    Tempo { microseconds_per_quarter: u32 },
}

/// One discrete message with its delta wait-time in ticks.
///
/// Delta time is the wait since the previous message on the same track, not an
/// absolute time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimedMessage {
    /// Ticks to wait before this message takes effect.
    pub delta: u32,
    /// The message payload.
    pub kind: MessageKind,
}

impl TimedMessage {
    /// Create a new timed message.
    pub fn new(delta: u32, kind: MessageKind) -> Self {
        Self { delta, kind }
    }

    /// Encode the message body (status byte plus data bytes) for `channel`.
    ///
    /// The delta time is encoded separately by the track chunk.
    pub fn write_body<W: Write>(&self, writer: &mut W, channel: u8) -> io::Result<()> {
        let channel = channel & 0x0F;
        match self.kind {
            MessageKind::NoteOn { key, velocity } => {
                writer.write_u8(0x90 | channel)?;
                writer.write_u8(key & 0x7F)?;
                writer.write_u8(velocity & 0x7F)?;
            }
            MessageKind::NoteOff { key } => {
                writer.write_u8(0x80 | channel)?;
                writer.write_u8(key & 0x7F)?;
                writer.write_u8(0)?;
            }
            MessageKind::PitchBend { offset } => {
                let value = (PITCH_BEND_CENTER + offset as i32).clamp(0, PITCH_BEND_MAX) as u16;
                writer.write_u8(0xE0 | channel)?;
                writer.write_u8((value & 0x7F) as u8)?;
                writer.write_u8((value >> 7) as u8)?;
            }
            MessageKind::ProgramChange { program } => {
                writer.write_u8(0xC0 | channel)?;
                writer.write_u8(program & 0x7F)?;
            }
            MessageKind::Tempo {
                microseconds_per_quarter,
            } => {
                writer.write_u8(0xFF)?;
                writer.write_u8(0x51)?;
                writer.write_u8(0x03)?;
                writer.write_u8((microseconds_per_quarter >> 16) as u8)?;
                writer.write_u8((microseconds_per_quarter >> 8) as u8)?;
                writer.write_u8(microseconds_per_quarter as u8)?;
            }
        }
        Ok(())
    }
}
