//! Validate command implementation.
//!
//! Checks a parameter tuple without generating anything.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::process::ExitCode;

use bluesforge_spec::{KeySignature, TrackParams, ValidationError};

/// Machine-readable output for `--json`.
#[derive(Debug, Serialize)]
struct ValidateOutput {
    valid: bool,
    errors: Vec<ValidationEntry>,
}

#[derive(Debug, Serialize)]
struct ValidationEntry {
    code: String,
    message: String,
}

/// Collect every validation error for the given raw parameters.
pub fn check(key: &str, bpm: u16, grit: f64, slide: u16) -> Vec<ValidationError> {
    match key.parse::<KeySignature>() {
        Ok(key) => TrackParams::new(key, bpm, grit, slide).validate().errors,
        Err(err) => {
            // Still report range errors for the remaining fields.
            let mut errors = vec![err];
            let probe = TrackParams::new(KeySignature::EMinor, bpm, grit, slide);
            errors.extend(probe.validate().errors);
            errors
        }
    }
}

/// Run the validate command.
///
/// # Returns
/// Exit code: 0 if the parameters are valid, 1 otherwise.
pub fn run(key: &str, bpm: u16, grit: f64, slide: u16, json: bool) -> Result<ExitCode> {
    let errors = check(key, bpm, grit, slide);

    if json {
        let output = ValidateOutput {
            valid: errors.is_empty(),
            errors: errors
                .iter()
                .map(|e| ValidationEntry {
                    code: e.code.code().to_string(),
                    message: e.message.clone(),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if errors.is_empty() {
        println!(
            "{} {} @ {} BPM (grit {}, slide {})",
            "Valid:".green().bold(),
            key,
            bpm,
            grit,
            slide
        );
    } else {
        for error in &errors {
            eprintln!("{} [{}] {}", "Invalid:".red().bold(), error.code, error.message);
        }
    }

    if errors.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}
