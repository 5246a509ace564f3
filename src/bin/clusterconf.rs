//! clusterconf CLI Binary
//!
//! Command-line interface for resolving cluster sizing configurations.

use clap::Parser;
use clusterconf::cli::{exit_code, load_tool_config, map_error, Cli, RunContext};
use clusterconf::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{debug, error};

fn main() {
    let cli = Cli::parse();

    let tool_config = match load_tool_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(exit_code(&e));
        }
    };

    let logging_config = build_logging_config(&cli, tool_config.logging.clone());
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    debug!(backend = ?tool_config.store.backend, "clusterconf starting");

    let context = match RunContext::new(&tool_config) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error opening profile store: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(exit_code(&e));
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(exit_code(&e));
        }
    }
}

/// Fold logging flags into the configured logging settings.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli, mut config: LoggingConfig) -> LoggingConfig {
    if cli.quiet {
        config.enabled = false;
    }
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
    }
    config
}
