//! Generate command implementation.
//!
//! Generates a single track from one parameter tuple and writes the SMF file.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use bluesforge_backend_midi::generate_track;
use bluesforge_spec::{track_filename, BackendError, KeySignature, TrackParams};

/// Machine-readable output for `--json`.
#[derive(Debug, Serialize)]
struct GenerateOutput<'a> {
    file: String,
    hash: &'a str,
    bytes: usize,
}

/// Run the generate command.
///
/// # Returns
/// Exit code: 0 on success, 1 if the parameters are rejected.
pub fn run(
    key: &str,
    bpm: u16,
    grit: f64,
    slide: u16,
    output: Option<&str>,
    json: bool,
) -> Result<ExitCode> {
    let key = match key.parse::<KeySignature>() {
        Ok(key) => key,
        Err(err) => {
            eprintln!("{} {}", "Invalid parameters:".red().bold(), err);
            return Ok(ExitCode::FAILURE);
        }
    };

    let params = TrackParams::new(key, bpm, grit, slide);
    let result = match generate_track(&params) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("{} [{}] {}", "Generation failed:".red().bold(), err.code(), err);
            return Ok(ExitCode::FAILURE);
        }
    };

    let path = output
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(track_filename(&params)));
    fs::write(&path, &result.data)
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;

    if json {
        let output = GenerateOutput {
            file: path.display().to_string(),
            hash: &result.hash,
            bytes: result.data.len(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{} {}", "Generated:".green().bold(), path.display());
        println!("{} {}", "BLAKE3:".blue().bold(), result.hash);
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.mid");

        run("E_Minor", 65, 0.4, 2000, Some(path.to_str().unwrap()), true).unwrap();

        let data = fs::read(&path).unwrap();
        assert_eq!(&data[0..4], b"MThd");
    }

    #[test]
    fn test_unknown_key_fails_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.mid");

        run("H_Minor", 65, 0.4, 2000, Some(path.to_str().unwrap()), true).unwrap();

        assert!(!path.exists());
    }
}
