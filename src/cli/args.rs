//! CLI argument definitions for `chartkit`

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use chartkit::config::ConfigOverrides;

/// CLI log level argument
///
/// Converts to the lowercase filter strings understood by
/// `tracing_subscriber::EnvFilter` and stored in the config file.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
    /// Trace-level logging
    Trace,
}

impl LogLevelArg {
    /// Filter directive for this level
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `dot`, `out_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Draw a weighted directed graph with Graphviz.
    ///
    /// Reads `matrix` and optional `node_weights` from a TOML file, writes
    /// `<BASE>.dot` and renders `<BASE>.png`.
    Graph {
        /// Path to the graph TOML file
        #[arg(value_name = "FILE")]
        input_file: PathBuf,

        /// Output base name (defaults to `<out_dir>/<input stem>`)
        #[arg(short, long, value_name = "BASE")]
        output: Option<PathBuf>,

        /// Write the DOT document only
        #[arg(long)]
        no_render: bool,
    },
    /// Draw a line plot with gnuplot.
    ///
    /// Reads `x` and `[[series]]` tables from a TOML file, writes
    /// `<BASE>.csv` and `<BASE>.plt` and renders `<BASE>.png`.
    Plot {
        /// Path to the plot TOML file
        #[arg(value_name = "FILE")]
        input_file: PathBuf,

        /// Output base name (defaults to `<out_dir>/<input stem>`)
        #[arg(short, long, value_name = "BASE")]
        output: Option<PathBuf>,

        /// Image width in pixels (overrides input file and config)
        #[arg(long, value_name = "PIXELS")]
        width: Option<u32>,

        /// Image height in pixels (overrides input file and config)
        #[arg(long, value_name = "PIXELS")]
        height: Option<u32>,

        /// Write the data and script documents only
        #[arg(long)]
        no_render: bool,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "chartkit",
    about = "Graphviz and gnuplot document generator",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level. Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override the Graphviz executable
    #[arg(long = "dot-program", value_name = "PATH")]
    pub dot_program: Option<String>,

    /// Override the gnuplot executable
    #[arg(long = "gnuplot-program", value_name = "PATH")]
    pub gnuplot_program: Option<String>,

    /// Override config output directory
    #[arg(long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `None` means no override. Logging flags are resolved in `main` and
    /// never reach the configuration.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            dot: self.dot_program.clone(),
            gnuplot: self.gnuplot_program.clone(),
            out_dir: self
                .out_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}
