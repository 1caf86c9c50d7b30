//! Write a DOT description next to its image and render it

use super::formatter::GraphFormatter;
use crate::core::error::Result;
use crate::core::render::{derive_path, RenderReport, Renderer};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Generates `<base>.dot` and hands it to a renderer
pub struct GraphDrawer;

impl GraphDrawer {
    /// Generate, write and render a graph
    ///
    /// The renderer is only called once the document is fully written. A
    /// renderer failure is logged and returned inside the report; the DOT
    /// file stays on disk.
    ///
    /// # Errors
    /// Returns [`ChartError::InvalidInput`](crate::ChartError::InvalidInput)
    /// for malformed input and [`ChartError::Io`](crate::ChartError::Io) if
    /// the document cannot be written
    pub fn draw<R: Renderer + ?Sized>(
        matrix: &[Vec<f64>],
        base: &Path,
        node_weights: Option<&[f64]>,
        renderer: &R,
    ) -> Result<RenderReport> {
        let dot_path = Self::write_document(matrix, base, node_weights)?;

        let outcome = renderer.render(&dot_path);
        if let Err(err) = &outcome {
            warn!("Graph rendering failed for {}: {err}", dot_path.display());
        }

        Ok(RenderReport {
            documents: vec![dot_path],
            outcome,
        })
    }

    /// Generate and write `<base>.dot` without rendering
    ///
    /// # Errors
    /// Same as [`GraphDrawer::draw`]
    pub fn write_document(
        matrix: &[Vec<f64>],
        base: &Path,
        node_weights: Option<&[f64]>,
    ) -> Result<PathBuf> {
        let description = GraphFormatter::generate(matrix, node_weights)?;
        let dot_path = Self::dot_path(base);
        description.write_to(&dot_path)?;
        Ok(dot_path)
    }

    /// Path of the DOT document for `base`
    #[must_use]
    pub fn dot_path(base: &Path) -> PathBuf {
        derive_path(base, "dot")
    }
}
