//! Batch command implementation.
//!
//! Generates the full catalog cross-product, writes one SMF file per
//! combination plus a CSV manifest, and produces a summary report. A failed
//! combination is reported and skipped; it never blocks its sibling runs.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use bluesforge_backend_midi::generate_track;
use bluesforge_spec::{catalog, track_filename};

use crate::manifest;

/// Result of generating a single track.
#[derive(Debug, Clone, Serialize)]
pub struct TrackResult {
    /// Generated filename.
    pub filename: String,
    /// Whether generation succeeded.
    pub success: bool,
    /// Error message if failed.
    pub error: Option<String>,
    /// BLAKE3 hash of the output bytes.
    pub hash: Option<String>,
}

/// Summary report for one batch run.
#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    /// Total combinations processed.
    pub total_tracks: usize,
    /// Successful generations.
    pub successful: usize,
    /// Failed generations.
    pub failed: usize,
    /// Total runtime in seconds.
    pub runtime_seconds: f64,
    /// Path of the written manifest.
    pub manifest_path: String,
    /// Results for each track.
    pub tracks: Vec<TrackResult>,
}

/// Run the batch command.
///
/// # Returns
/// Exit code: 0 on success, 1 if any combination failed.
pub fn run(out_root: &str, author: &str, json: bool) -> Result<ExitCode> {
    let start = Instant::now();
    let out_path = Path::new(out_root);

    fs::create_dir_all(out_path)
        .with_context(|| format!("Failed to create output directory: {}", out_root))?;

    if !json {
        println!("{}", "======================================".cyan());
        println!("{}", "  Bluesforge Library Generator".cyan());
        println!("{}", "======================================".cyan());
        println!();
        println!("{} {}", "Output directory:".blue().bold(), out_root);
        println!("{} {}", "Manifest author:".blue().bold(), author);
        println!();
    }

    let mut manifest_rows = vec![manifest::manifest_header()];
    let mut tracks: Vec<TrackResult> = Vec::new();
    let mut successful = 0usize;
    let mut failed = 0usize;

    for params in catalog() {
        let filename = track_filename(&params);

        let write_result = generate_track(&params).map_err(anyhow::Error::from).and_then(|result| {
            let path = out_path.join(&filename);
            fs::write(&path, &result.data)
                .with_context(|| format!("Failed to write track: {}", path.display()))?;
            Ok(result.hash)
        });

        match write_result {
            Ok(hash) => {
                manifest_rows.push(manifest::manifest_row(&filename, &params, author));
                successful += 1;
                if !json && successful % 100 == 0 {
                    println!("{} {} tracks...", "Generated".green(), successful);
                }
                tracks.push(TrackResult {
                    filename,
                    success: true,
                    error: None,
                    hash: Some(hash),
                });
            }
            Err(err) => {
                failed += 1;
                if !json {
                    eprintln!("{} {}: {:#}", "FAILED".red().bold(), filename, err);
                }
                tracks.push(TrackResult {
                    filename,
                    success: false,
                    error: Some(format!("{:#}", err)),
                    hash: None,
                });
            }
        }
    }

    let manifest_path = out_path.join(manifest::MANIFEST_FILENAME);
    let mut manifest_data = manifest_rows.join("\n");
    manifest_data.push('\n');
    fs::write(&manifest_path, manifest_data)
        .with_context(|| format!("Failed to write manifest: {}", manifest_path.display()))?;

    let summary = BatchSummary {
        total_tracks: tracks.len(),
        successful,
        failed,
        runtime_seconds: start.elapsed().as_secs_f64(),
        manifest_path: manifest_path.display().to_string(),
        tracks,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!();
        println!("{} {}", "Total tracks:".blue().bold(), summary.total_tracks);
        println!("{} {}", "Successful:".green().bold(), summary.successful);
        if summary.failed > 0 {
            println!("{} {}", "Failed:".red().bold(), summary.failed);
        }
        println!(
            "{} {:.2}s",
            "Runtime:".blue().bold(),
            summary.runtime_seconds
        );
        println!("{} {}", "Manifest:".blue().bold(), manifest_path.display());
    }

    if failed > 0 {
        Ok(ExitCode::from(1))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
