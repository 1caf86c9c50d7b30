//! Renderer boundary
//!
//! Document generation never starts a process itself. Callers pass a
//! [`Renderer`] which turns a written document into an image; the command
//! line tool uses [`GraphvizRenderer`] and [`GnuplotRenderer`], tests use fakes.

pub mod command;

pub use command::{GnuplotRenderer, GraphvizRenderer};

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure reported by an external renderer
#[derive(Debug, Error)]
pub enum RenderError {
    /// The renderer program could not be started
    #[error("Failed to run {program}: {source}")]
    Spawn {
        /// Program name or path
        program: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The renderer ran but exited unsuccessfully
    #[error("{program} exited with {status}")]
    Failed {
        /// Program name or path
        program: String,
        /// Exit status description
        status: String,
    },
}

/// Something that turns a document on disk into an image
pub trait Renderer {
    /// Render `document` and return the path of the produced image
    ///
    /// # Errors
    /// Returns a [`RenderError`] if the renderer cannot run or fails
    fn render(&self, document: &Path) -> Result<PathBuf, RenderError>;
}

impl<R: Renderer + ?Sized> Renderer for &R {
    fn render(&self, document: &Path) -> Result<PathBuf, RenderError> {
        (**self).render(document)
    }
}

/// Result of a draw/render call
///
/// Documents are always written when a report exists; `outcome` tells
/// whether the image step succeeded.
#[derive(Debug)]
pub struct RenderReport {
    /// Documents written to disk, in write order
    pub documents: Vec<PathBuf>,
    /// Image path on success, renderer failure otherwise
    pub outcome: Result<PathBuf, RenderError>,
}

impl RenderReport {
    /// Whether the renderer reported success
    #[must_use]
    pub const fn is_rendered(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Produced image, if rendering succeeded
    #[must_use]
    pub fn image(&self) -> Option<&Path> {
        self.outcome.as_ref().ok().map(PathBuf::as_path)
    }

    /// Renderer failure, if any
    #[must_use]
    pub fn error(&self) -> Option<&RenderError> {
        self.outcome.as_ref().err()
    }
}

/// Renderer that never runs anything
///
/// Used for `--no-render`: documents are written and the "image" is the
/// document itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRenderer;

impl Renderer for NoopRenderer {
    fn render(&self, document: &Path) -> Result<PathBuf, RenderError> {
        Ok(document.to_path_buf())
    }
}

/// Append `.ext` to the full file name of `base`
///
/// Unlike [`Path::with_extension`] this never replaces an existing suffix,
/// so `run.v1` becomes `run.v1.csv`.
#[must_use]
pub fn derive_path(base: &Path, ext: &str) -> PathBuf {
    let mut name = base.as_os_str().to_owned();
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}
