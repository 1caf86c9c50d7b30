//! Command-line interface entry point for `chartkit`

mod args;
mod commands;

use args::{Cli, Command, LogLevelArg};
use chartkit::config::Config;
use clap::Parser;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config; otherwise use config logging.level; fallback warn
    let level = if args.debug_flag {
        "debug"
    } else {
        args.log_level
            .map(LogLevelArg::as_str)
            .or_else(|| parse_level(&config.logging.level))
            .unwrap_or("warn")
    };

    let verbose = args.verbose || config.logging.verbose;

    // File logging: CLI flag wins, otherwise use config logging.file if set
    let config_log_path: Option<PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(PathBuf::from(&config.logging.file))
    };
    let log_path = args.log_file.clone().or(config_log_path);

    if let Err(e) = init_logging(level, log_path.as_deref()) {
        eprintln!("✗ Failed to initialize file logging: {e}");
        let _ = init_logging(level, None);
    } else if let Some(path) = &log_path {
        if verbose {
            eprintln!("✓ File logging initialized at: {}", path.display());
        }
        info!("File logging initialized at: {}", path.display());
    }

    let ok = match args.command {
        Command::Config { subcommand } => commands::config::run(subcommand, &mut config, &defaults),
        Command::Graph {
            input_file,
            output,
            no_render,
        } => commands::graph::run(&input_file, output.as_deref(), no_render, &config, verbose),
        Command::Plot {
            input_file,
            output,
            width,
            height,
            no_render,
        } => commands::plot::run(
            &input_file,
            commands::plot::PlotOptions {
                output: output.as_deref(),
                width,
                height,
                no_render,
            },
            &config,
            verbose,
        ),
    };

    if !ok {
        std::process::exit(1);
    }
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over `level` when set. With a log file, events
/// are appended there without ANSI colors; otherwise they go to stderr.
fn init_logging(level: &str, log_file: Option<&Path>) -> std::io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match log_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }

    Ok(())
}

fn parse_level(val: &str) -> Option<&'static str> {
    match val.to_ascii_lowercase().as_str() {
        "error" => Some("error"),
        "warn" | "warning" => Some("warn"),
        "info" => Some("info"),
        "debug" => Some("debug"),
        "trace" => Some("trace"),
        _ => None,
    }
}
