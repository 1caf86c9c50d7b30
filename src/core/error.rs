//! Error types shared by the graph and plot formatters

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, ChartError>;

/// Failures surfaced by document generation
///
/// Renderer failures are deliberately absent: they travel inside a
/// [`RenderReport`](crate::core::render::RenderReport) instead.
#[derive(Debug, Error)]
pub enum ChartError {
    /// Malformed or mismatched graph input shapes
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An axis or series length disagrees with the length already fixed
    #[error("Inconsistent length: expected {expected}, got {actual}")]
    InconsistentLength {
        /// Length fixed by the x-axis
        expected: usize,
        /// Length that was offered
        actual: usize,
    },

    /// Rendering was requested before an x-axis was set
    #[error("X values not set")]
    MissingAxis,

    /// Rendering was requested before any series was added
    #[error("No series added to plot")]
    EmptyInput,

    /// A document could not be written (or an input file read)
    #[error("I/O failure on {}: {source}", .path.display())]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// An input file did not have the expected shape
    #[error("Failed to parse {}: {message}", .path.display())]
    Parse {
        /// File being parsed
        path: PathBuf,
        /// Parser message
        message: String,
    },
}

impl ChartError {
    /// Build an [`ChartError::Io`] for `path`
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
