//! Track chunk encoding.

use byteorder::{BigEndian, WriteBytesExt};
use std::io::{self, Write};

use super::message::TimedMessage;

/// Track chunk magic identifier.
pub const TRACK_MAGIC: &[u8; 4] = b"MTrk";

/// Encode a value as a MIDI variable-length quantity.
///
/// Seven payload bits per byte, most significant group first, continuation bit
/// set on every byte except the last. Values up to 0x0FFFFFFF fit in four
/// bytes, which covers any delta this crate can produce.
pub fn write_var_len<W: Write>(writer: &mut W, value: u32) -> io::Result<()> {
    let mut buf = [0u8; 4];
    let mut index = 3;
    let mut remaining = value >> 7;

    buf[3] = (value & 0x7F) as u8;
    while remaining > 0 {
        index -= 1;
        buf[index] = 0x80 | (remaining & 0x7F) as u8;
        remaining >>= 7;
    }

    writer.write_all(&buf[index..])
}

/// One track chunk: a channel and its ordered message sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackChunk {
    /// MIDI channel stamped on every channel message in this track.
    pub channel: u8,
    /// Messages in playback order.
    pub messages: Vec<TimedMessage>,
}

impl TrackChunk {
    /// Create an empty track chunk on the given channel.
    pub fn new(channel: u8) -> Self {
        Self {
            channel,
            messages: Vec::new(),
        }
    }

    /// Append a single message.
    pub fn push(&mut self, message: TimedMessage) {
        self.messages.push(message);
    }

    /// Append a message sequence.
    pub fn extend(&mut self, messages: impl IntoIterator<Item = TimedMessage>) {
        self.messages.extend(messages);
    }

    /// Write the chunk: magic, body length, encoded messages, End of Track.
    pub fn write<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let mut body = Vec::new();
        for message in &self.messages {
            write_var_len(&mut body, message.delta)?;
            message.write_body(&mut body, self.channel)?;
        }
        // End of Track meta, zero delta.
        body.extend_from_slice(&[0x00, 0xFF, 0x2F, 0x00]);

        writer.write_all(TRACK_MAGIC)?;
        writer.write_u32::<BigEndian>(body.len() as u32)?;
        writer.write_all(&body)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::smf::message::MessageKind;

    fn var_len(value: u32) -> Vec<u8> {
        let mut buf = Vec::new();
        write_var_len(&mut buf, value).unwrap();
        buf
    }

    #[test]
    fn test_var_len_boundaries() {
        assert_eq!(var_len(0), vec![0x00]);
        assert_eq!(var_len(0x7F), vec![0x7F]);
        assert_eq!(var_len(0x80), vec![0x81, 0x00]);
        assert_eq!(var_len(0x3FFF), vec![0xFF, 0x7F]);
        assert_eq!(var_len(0x4000), vec![0x81, 0x80, 0x00]);
        assert_eq!(var_len(0x0FFF_FFFF), vec![0xFF, 0xFF, 0xFF, 0x7F]);
    }

    #[test]
    fn test_var_len_step_deltas() {
        // 120 ticks (one step) and 480 ticks (one beat).
        assert_eq!(var_len(120), vec![0x78]);
        assert_eq!(var_len(480), vec![0x83, 0x60]);
    }

    #[test]
    fn test_empty_track_is_just_end_of_track() {
        let mut buf = Vec::new();
        TrackChunk::new(0).write(&mut buf).unwrap();
        assert_eq!(buf, vec![b'M', b'T', b'r', b'k', 0, 0, 0, 4, 0x00, 0xFF, 0x2F, 0x00]);
    }

    #[test]
    fn test_track_encodes_channel_into_status_bytes() {
        let mut track = TrackChunk::new(3);
        track.push(TimedMessage::new(
            120,
            MessageKind::NoteOn {
                key: 28,
                velocity: 100,
            },
        ));
        track.push(TimedMessage::new(200, MessageKind::NoteOff { key: 28 }));

        let mut buf = Vec::new();
        track.write(&mut buf).unwrap();

        // 8-byte chunk header, then delta 120 + note-on on channel 3.
        assert_eq!(&buf[8..12], &[0x78, 0x93, 28, 100]);
        // Delta 200 needs two bytes, then note-off.
        assert_eq!(&buf[12..17], &[0x81, 0x48, 0x83, 28, 0]);
    }
}
