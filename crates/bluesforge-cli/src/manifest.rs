//! Manifest CSV formatting for batch runs.
//!
//! One row per generated track, describing the parameter combination used.

use bluesforge_spec::TrackParams;

/// Filename of the manifest written next to the generated tracks.
pub const MANIFEST_FILENAME: &str = "manifest.csv";

/// The manifest header row.
pub fn manifest_header() -> String {
    ["Filename", "Key", "BPM", "GritConstant", "SlideMagnitude", "Author"].join(",")
}

/// Format one manifest row for a generated track.
pub fn manifest_row(filename: &str, params: &TrackParams, author: &str) -> String {
    [
        csv_escape(filename),
        csv_escape(params.key.name()),
        params.bpm.to_string(),
        params.grit.to_string(),
        params.slide_magnitude.to_string(),
        csv_escape(author),
    ]
    .join(",")
}

/// Escape a string for CSV (quote if contains comma, quote, or newline).
fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use bluesforge_spec::{KeySignature, TrackParams};

    use super::*;

    #[test]
    fn test_manifest_header() {
        assert_eq!(
            manifest_header(),
            "Filename,Key,BPM,GritConstant,SlideMagnitude,Author"
        );
    }

    #[test]
    fn test_manifest_row() {
        let params = TrackParams::new(KeySignature::EMinor, 65, 0.4, 2000);
        assert_eq!(
            manifest_row("Blues_E_Minor_65_0.4_2000.mid", &params, "Bluesforge"),
            "Blues_E_Minor_65_0.4_2000.mid,E_Minor,65,0.4,2000,Bluesforge"
        );
    }

    #[test]
    fn test_author_with_comma_is_quoted() {
        let params = TrackParams::new(KeySignature::AMinor, 71, 0.7, 4000);
        let row = manifest_row("x.mid", &params, "Doe, Jane");
        assert!(row.ends_with("\"Doe, Jane\""));
    }

    #[test]
    fn test_csv_escape_plain() {
        assert_eq!(csv_escape("hello"), "hello");
    }

    #[test]
    fn test_csv_escape_quote() {
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
