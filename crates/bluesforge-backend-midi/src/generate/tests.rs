//! Tests for the generation entry point.

use pretty_assertions::assert_eq;

use bluesforge_spec::{BackendError, KeySignature, TrackParams};

use crate::smf::validate_smf_bytes;

use super::*;

fn reference_params() -> TrackParams {
    TrackParams::new(KeySignature::EMinor, 65, 0.4, 2000)
}

#[test]
fn generated_output_is_byte_identical_across_runs() {
    let first = generate_track(&reference_params()).unwrap();
    let second = generate_track(&reference_params()).unwrap();

    assert_eq!(first.data, second.data);
    assert_eq!(first.hash, second.hash);
    assert_eq!(first.extension, "mid");
}

#[test]
fn generated_output_passes_smf_validation() {
    let result = generate_track(&reference_params()).unwrap();
    assert!(validate_smf_bytes(&result.data).is_ok());

    // Format 1, four tracks, division 480.
    assert_eq!(u16::from_be_bytes([result.data[8], result.data[9]]), 1);
    assert_eq!(u16::from_be_bytes([result.data[10], result.data[11]]), 4);
    assert_eq!(u16::from_be_bytes([result.data[12], result.data[13]]), 480);
}

#[test]
fn tempo_meta_opens_the_stomp_track() {
    let result = generate_track(&reference_params()).unwrap();

    // First track chunk starts right after the 14-byte header.
    assert_eq!(&result.data[14..18], b"MTrk");
    // Delta 0, then FF 51 03 and the 65 BPM tempo value.
    assert_eq!(
        &result.data[22..29],
        &[0x00, 0xFF, 0x51, 0x03, 0x0E, 0x15, 0xC5]
    );
}

#[test]
fn distinct_parameters_produce_distinct_bytes() {
    let base = generate_track(&reference_params()).unwrap();

    for params in [
        TrackParams::new(KeySignature::AMinor, 65, 0.4, 2000),
        TrackParams::new(KeySignature::EMinor, 85, 0.4, 2000),
        TrackParams::new(KeySignature::EMinor, 65, 0.95, 2000),
        TrackParams::new(KeySignature::EMinor, 65, 0.4, 8000),
    ] {
        let other = generate_track(&params).unwrap();
        assert_ne!(base.hash, other.hash, "params {:?}", params);
    }
}

#[test]
fn invalid_parameters_are_rejected_before_generation() {
    let params = TrackParams::new(KeySignature::EMinor, 65, 1.5, 2000);
    let err = generate_track(&params).unwrap_err();
    assert_eq!(err.code(), "MIDI_001");
    assert!(err.to_string().contains("SPEC_003"));
}

#[test]
fn test_tempo_microseconds() {
    // 60e6 / 65 = 923076.92..., rounded up.
    assert_eq!(tempo_microseconds(65), 923_077);
    assert_eq!(tempo_microseconds(120), 500_000);
}

#[test]
fn tempo_rounds_to_nearest_microsecond_over_the_catalog() {
    for bpm in bluesforge_spec::catalog::tempos() {
        let expected = (60_000_000.0 / bpm as f64).round() as u32;
        assert_eq!(tempo_microseconds(bpm), expected, "bpm {}", bpm);
    }
}

#[test]
fn document_has_one_tempo_and_three_program_changes() {
    let piece = crate::compose::compose(40, 0.4, 2000).unwrap();
    let document = build_document(&piece, 65);

    assert_eq!(document.tracks.len(), 4);
    assert!(matches!(
        document.tracks[0].messages[0].kind,
        MessageKind::Tempo { .. }
    ));
    for (track, program) in document.tracks[1..].iter().zip([25u8, 29, 32]) {
        assert_eq!(
            track.messages[0].kind,
            MessageKind::ProgramChange { program }
        );
    }
}
