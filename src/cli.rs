//! Command-line interface.
//!
//! # Exit Codes
//! - `0`: command succeeded (`check`: the text starts with a flag)
//! - `1`: `check` found no flag at the start of the text
//! - `2`: configuration rejected, or an I/O error
//!
//! # Design Decisions
//! - Handlers write to any `Write` and read from any `Read` so they run in tests
//! - `scan` decodes input lossily; captured payloads are often not UTF-8

use std::fs::File;
use std::io::{Read, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::lifecycle::TulipContext;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_NO_MATCH: u8 = 1;
pub const EXIT_ERROR: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "tulip-config")]
#[command(about = "Service registry and flag matcher for the Tulip traffic monitor")]
#[command(long_about = None)]
pub struct Cli {
    /// TOML file overriding the built-in defaults
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level when RUST_LOG is unset (defaults to the config file's level)
    #[arg(long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List monitored services
    Services {
        /// Print the JSON served to the web UI
        #[arg(long)]
        json: bool,
    },
    /// Print the MongoDB connection URI
    Mongo,
    /// Check whether TEXT starts with a flag.
    ///
    /// Prints `match <flag>` and exits 0, or prints `no match` and exits 1.
    /// A rejected configuration exits 2.
    Check { text: String },
    /// Print every flag found in FILE (stdin if omitted)
    Scan { file: Option<PathBuf> },
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Run a command against a started context, returning the exit code.
pub fn run<R: Read, W: Write>(
    command: &Commands,
    ctx: &TulipContext,
    stdin: R,
    out: &mut W,
) -> Result<u8, CliError> {
    match command {
        Commands::Services { json } => services(ctx, *json, out),
        Commands::Mongo => mongo(ctx, out),
        Commands::Check { text } => check(ctx, text, out),
        Commands::Scan { file: Some(path) } => scan(ctx, File::open(path)?, out),
        Commands::Scan { file: None } => scan(ctx, stdin, out),
    }
}

pub fn services<W: Write>(ctx: &TulipContext, json: bool, out: &mut W) -> Result<u8, CliError> {
    if json {
        writeln!(out, "{}", ctx.registry().to_json()?)?;
    } else {
        for svc in ctx.list_services() {
            writeln!(out, "{:<16} {}", svc.name(), svc.endpoint())?;
        }
    }
    Ok(EXIT_SUCCESS)
}

pub fn mongo<W: Write>(ctx: &TulipContext, out: &mut W) -> Result<u8, CliError> {
    writeln!(out, "{}", ctx.mongo_uri())?;
    Ok(EXIT_SUCCESS)
}

pub fn check<W: Write>(ctx: &TulipContext, text: &str, out: &mut W) -> Result<u8, CliError> {
    match ctx.matcher().match_flag(text) {
        Some(flag) => {
            writeln!(out, "match {}", flag)?;
            Ok(EXIT_SUCCESS)
        }
        None => {
            writeln!(out, "no match")?;
            Ok(EXIT_NO_MATCH)
        }
    }
}

/// Print every flag in `input`, one per line.
pub fn scan<R: Read, W: Write>(
    ctx: &TulipContext,
    mut input: R,
    out: &mut W,
) -> Result<u8, CliError> {
    let mut raw = Vec::new();
    input.read_to_end(&mut raw)?;
    let payload = String::from_utf8_lossy(&raw);

    let flags = ctx.matcher().find_flags(&payload);
    tracing::info!(bytes = raw.len(), count = flags.len(), "Scan complete");
    for flag in flags {
        writeln!(out, "{}", flag)?;
    }
    Ok(EXIT_SUCCESS)
}
