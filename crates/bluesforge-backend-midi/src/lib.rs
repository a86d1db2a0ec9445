//! Bluesforge MIDI Backend - Deterministic 12-Bar Blues SMF Generation
//!
//! This crate turns one parameter tuple (key, tempo, grit constant, slide
//! magnitude) into a complete four-track Standard MIDI File. Generation is
//! fully deterministic: there is no randomness anywhere, so identical tuples
//! produce byte-identical files across invocations and process restarts.
//!
//! # Pipeline
//!
//! 1. [`compose`]: a single forward scan over the 192-step grid emits four
//!    unordered event streams (stomp percussion, rhythm stabs, slide lead,
//!    bass).
//! 2. [`smf::serialize_events`]: each stream is stably sorted and flattened
//!    into delta-timed messages, with slide notes expanded into a 5-message
//!    linear pitch-glide ramp.
//! 3. [`smf::SmfDocument`]: the four message sequences become a format 1 SMF
//!    with a tempo meta on track 0 and GM program changes on the rest.
//!
//! # Example
//!
//! ```ignore
//! use bluesforge_backend_midi::generate_track;
//! use bluesforge_spec::{KeySignature, TrackParams};
//!
//! let params = TrackParams::new(KeySignature::EMinor, 65, 0.4, 2000);
//! let result = generate_track(&params)?;
//! std::fs::write(format!("blues.{}", result.extension), &result.data)?;
//! println!("Generated hash: {}", result.hash);
//! ```
//!
//! # Module Structure
//!
//! - [`compose`]: Composition engine and its constant tables
//! - [`smf`]: Event serializer and SMF binary writer
//! - [`generate`]: Main generation entry point

pub mod compose;
pub mod generate;
pub mod smf;

// Re-export main types
pub use compose::{compose, ComposeError, Composition, NoteEvent};
pub use generate::{generate_track, tempo_microseconds, GenerateError, GenerateResult};

/// Crate version for backend identification.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Backend identifier for reporting.
pub const BACKEND_ID: &str = "bluesforge-backend-midi";
