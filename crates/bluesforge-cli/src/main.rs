//! Bluesforge CLI - Deterministic blues MIDI library generator
//!
//! This binary provides commands for generating single tracks, producing the
//! full parameter-sweep library, and validating parameter tuples.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use bluesforge_cli::commands;

/// Bluesforge - Deterministic Blues MIDI Generator
#[derive(Parser)]
#[command(name = "bluesforge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a single track from one parameter tuple
    Generate {
        /// Key signature (E_Minor, A_Minor, D_Minor, B_Minor)
        #[arg(short, long)]
        key: String,

        /// Tempo in beats per minute
        #[arg(short, long)]
        bpm: u16,

        /// Grit constant in [0, 1] controlling backbeat density
        #[arg(short, long)]
        grit: f64,

        /// Slide magnitude in pitch wheel units (max 8192)
        #[arg(short, long)]
        slide: u16,

        /// Output file path (default: catalog filename in current directory)
        #[arg(short, long)]
        output: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Generate the full parameter-sweep library with a CSV manifest
    Batch {
        /// Output root directory
        #[arg(short, long, default_value = "./blues-library")]
        out_root: String,

        /// Author recorded in the manifest
        #[arg(short, long, default_value = "Bluesforge")]
        author: String,

        /// Output machine-readable JSON summary (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Validate a parameter tuple without generating anything
    Validate {
        /// Key signature (E_Minor, A_Minor, D_Minor, B_Minor)
        #[arg(short, long)]
        key: String,

        /// Tempo in beats per minute
        #[arg(short, long)]
        bpm: u16,

        /// Grit constant in [0, 1]
        #[arg(short, long)]
        grit: f64,

        /// Slide magnitude in pitch wheel units
        #[arg(short, long)]
        slide: u16,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            key,
            bpm,
            grit,
            slide,
            output,
            json,
        } => commands::generate::run(&key, bpm, grit, slide, output.as_deref(), json),
        Commands::Batch {
            out_root,
            author,
            json,
        } => commands::batch::run(&out_root, &author, json),
        Commands::Validate {
            key,
            bpm,
            grit,
            slide,
            json,
        } => commands::validate::run(&key, bpm, grit, slide, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
