//! Tulip configuration CLI.
//!
//! Resolves the monitor configuration the same way the services do
//! (defaults, optional TOML file, `TULIP_MONGO` / `REACT_APP_FLAG_REGEX`)
//! and answers questions about it. Exit codes are listed in `tulip_config::cli`.

use std::process::ExitCode;

use clap::Parser;

use tulip_config::cli::{self, Cli, EXIT_ERROR};
use tulip_config::config::loader;
use tulip_config::lifecycle;
use tulip_config::observability::logging::init_logging;

fn main() -> ExitCode {
    let args = Cli::parse();

    // Logging first, so environment overrides applied while loading are reported
    let level = args
        .log_level
        .clone()
        .unwrap_or_else(|| loader::configured_log_level(args.config.as_deref()));
    if let Err(e) = init_logging(&level) {
        eprintln!("Error: {}", e);
        return ExitCode::from(EXIT_ERROR);
    }

    let config = match loader::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Configuration rejected");
            return ExitCode::from(EXIT_ERROR);
        }
    };
    let ctx = match lifecycle::startup(config) {
        Ok(ctx) => ctx,
        Err(e) => {
            tracing::error!(error = %e, "Startup failed");
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let stdout = std::io::stdout();
    match cli::run(&args.command, ctx, std::io::stdin().lock(), &mut stdout.lock()) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
