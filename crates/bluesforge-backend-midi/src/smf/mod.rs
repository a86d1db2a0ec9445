//! SMF (Standard MIDI File) serialization: event flattening and file writing.
//!
//! The serializer ([`serialize_events`]) turns one unordered voice stream into
//! a strictly time-ordered, delta-encoded message sequence. The writer
//! ([`SmfDocument`]) assembles four such sequences into a format 1 file with a
//! 480 ticks-per-quarter division.
//!
//! # File layout
//!
//! One header chunk, then one track chunk per voice. Track 0 carries the
//! global tempo meta message; each other track opens with a GM program change.
//! Pitch glides are written as a 5-message ramp (bend down, onset, bend back
//! to center over the note duration, release, reset).

mod message;
mod serialize;
mod track;
mod writer;

pub use message::*;
pub use serialize::*;
pub use track::*;
pub use writer::*;
