//! Composition engine: one parameter tuple to four event streams.
//!
//! [`compose`] performs a single deterministic forward scan over the 192-step
//! grid (12 bars of 16 sixteenth-note steps) and emits note events onto four
//! independent voice streams: stomp percussion, rhythm stabs, slide lead, and
//! bass. Events may be emitted out of time order within a stream; ordering is
//! imposed later by the serializer.
//!
//! There is no randomness anywhere. The backbeat density test uses the
//! fractional part of `step * grit`, which is equidistributed for
//! irrational-like ratios and so reads like a probability while staying a pure
//! function of its inputs.

mod error;


pub use error::ComposeError;

/// Bars per piece.
pub const BARS: usize = 12;

/// Sixteenth-note steps per bar.
pub const STEPS_PER_BAR: u32 = 16;

/// Total steps in one piece.
pub const TOTAL_STEPS: u32 = BARS as u32 * STEPS_PER_BAR;

/// Ticks separating adjacent steps (a sixteenth note at 480 ticks per quarter).
pub const TICKS_PER_STEP: u32 = 120;

/// Scale intervals: minor pentatonic plus the tritone.
pub const SCALE: [u8; 7] = [0, 3, 5, 6, 7, 10, 12];

/// Per-bar root offsets of the 12-bar progression.
pub const PROGRESSION: [u8; BARS] = [0, 0, 0, 0, 5, 5, 0, 0, 7, 5, 0, 7];

/// Acceptance threshold for the backbeat density test.
const GRIT_THRESHOLD: f64 = 0.3;

/// GM kick drum note.
const KICK_NOTE: u8 = 35;

/// GM hand clap note.
const CLAP_NOTE: u8 = 39;

/// A single note event on one voice stream.
///
/// Immutable once emitted. `start` is an absolute tick time and is always a
/// multiple of [`TICKS_PER_STEP`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteEvent {
    /// MIDI note number.
    pub key: u8,
    /// Note-on velocity.
    pub velocity: u8,
    /// Absolute start time in ticks.
    pub start: u32,
    /// Duration in ticks.
    pub duration: u32,
    /// Pitch-bend magnitude for slide notes, in pitch wheel units.
    pub bend: Option<u16>,
}

impl NoteEvent {
    /// Create a plain note event.
    pub fn plain(key: u8, velocity: u8, start: u32, duration: u32) -> Self {
        Self {
            key,
            velocity,
            start,
            duration,
            bend: None,
        }
    }

    /// Create a slide note event with the given bend magnitude.
    pub fn slide(key: u8, velocity: u8, start: u32, duration: u32, magnitude: u16) -> Self {
        Self {
            key,
            velocity,
            start,
            duration,
            bend: Some(magnitude),
        }
    }
}

/// The four voice streams of one composed piece.
///
/// Streams are independent; they share only the absolute tick axis. Any stream
/// may be empty (a grit constant that rejects every backbeat is valid).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composition {
    /// Percussion: kick on downbeats, clap accents on accepted backbeats.
    pub stomp: Vec<NoteEvent>,
    /// Two-note stabs on the off-beats.
    pub rhythm: Vec<NoteEvent>,
    /// Four-note slide phrases, one every four bars.
    pub lead: Vec<NoteEvent>,
    /// Root notes an octave down, locked to the kick.
    pub bass: Vec<NoteEvent>,
}

/// Deterministic backbeat acceptance test.
///
/// The exact formula matters: `(step * grit) mod 1 > 0.3`. Replacing it with a
/// seeded RNG would change output bytes for existing parameter tuples.
pub fn backbeat_accepted(step: u32, grit: f64) -> bool {
    (step as f64 * grit) % 1.0 > GRIT_THRESHOLD
}

/// Scale index for note `k` of a lead phrase starting in `bar`.
pub fn lead_scale_index(k: usize, bar: usize) -> usize {
    let scaled = ((k + bar) as f64).sin().abs() * SCALE.len() as f64;
    scaled as usize % SCALE.len()
}

/// Compose the four voice streams for one run.
///
/// `root` is the tonic MIDI note, `grit` the backbeat density constant in
/// [0, 1], and `slide_magnitude` the pitch-bend depth applied to every lead
/// note. The root is range-checked up front so no emitted note can leave
/// 0..=127; nothing else can fail.
pub fn compose(
    root: u8,
    grit: f64,
    slide_magnitude: u16,
) -> Result<Composition, ComposeError> {
    // Extremes over the whole scan: bass reaches root - 12, the lead reaches
    // root + max progression offset + top scale interval + 12.
    let lowest = root as i32 - 12;
    let highest = root as i32 + 7 + SCALE[SCALE.len() - 1] as i32 + 12;
    if lowest < 0 || highest > 127 {
        return Err(ComposeError::RootOutOfRange {
            root,
            lowest,
            highest,
        });
    }

    let mut piece = Composition::default();

    for i in 0..TOTAL_STEPS {
        let t = i * TICKS_PER_STEP;
        // Clamp is unreachable for i < TOTAL_STEPS but guards the arithmetic.
        let bar = ((i / STEPS_PER_BAR) as usize).min(BARS - 1);
        let current_root = root + PROGRESSION[bar];
        let beat = i % STEPS_PER_BAR;

        // Kick on the downbeats, with the bass locked an octave down.
        if beat % 8 == 0 {
            piece.stomp.push(NoteEvent::plain(KICK_NOTE, 110, t, 100));
            piece.bass.push(NoteEvent::plain(current_root - 12, 100, t, 200));
        }

        // Clap on the backbeats, thinned by the grit test.
        if (beat == 4 || beat == 12) && backbeat_accepted(i, grit) {
            piece.stomp.push(NoteEvent::plain(CLAP_NOTE, 100, t, 50));
        }

        // Syncopated two-note stab on the off-beat: root and perfect fifth.
        if beat % 4 == 2 {
            piece.rhythm.push(NoteEvent::plain(current_root, 85, t, 100));
            piece.rhythm.push(NoteEvent::plain(current_root + 7, 85, t, 100));
        }

        // A four-note slide phrase every four bars, one octave up.
        if i % 64 == 0 {
            for k in 0..4 {
                let local_t = t + k as u32 * 4 * TICKS_PER_STEP;
                let idx = lead_scale_index(k, bar);
                let note = current_root + SCALE[idx] + 12;
                piece
                    .lead
                    .push(NoteEvent::slide(note, 100, local_t, 400, slide_magnitude));
            }
        }
    }

    Ok(piece)
}
