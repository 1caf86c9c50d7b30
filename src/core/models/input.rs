//! TOML input files accepted by the CLI
//!
//! A graph input:
//! ```toml
//! matrix = [[0, 1], [1, 0]]
//! node_weights = [0.5, 1.0]
//! ```
//!
//! A plot input:
//! ```toml
//! x = [0, 1, 2]
//! width = 1024
//!
//! [[series]]
//! title = "A"
//! data = [10, 20, 30]
//! ```

use crate::core::error::{ChartError, Result};
use crate::core::plot::PlotSession;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Adjacency matrix plus optional node weights
#[derive(Debug, Clone, Deserialize)]
pub struct GraphInput {
    /// Square adjacency matrix, row = source node
    pub matrix: Vec<Vec<f64>>,
    /// Optional per-node weights used for node sizing
    #[serde(default)]
    pub node_weights: Option<Vec<f64>>,
}

/// One `[[series]]` table of a plot input
#[derive(Debug, Clone, Deserialize)]
pub struct SeriesInput {
    /// Legend title
    pub title: String,
    /// Y-values
    pub data: Vec<f64>,
}

/// X-axis, series and optional output size
#[derive(Debug, Clone, Deserialize)]
pub struct PlotInput {
    /// Shared x-axis
    #[serde(default)]
    pub x: Vec<i64>,
    /// Output width in pixels
    #[serde(default)]
    pub width: Option<u32>,
    /// Output height in pixels
    #[serde(default)]
    pub height: Option<u32>,
    /// Data series in legend order
    #[serde(default)]
    pub series: Vec<SeriesInput>,
}

impl GraphInput {
    /// Parse a graph input from a TOML string
    ///
    /// # Errors
    /// Returns [`ChartError::Parse`] if the TOML is malformed
    pub fn from_toml(toml_str: &str, origin: &Path) -> Result<Self> {
        parse_toml(toml_str, origin)
    }

    /// Read and parse a graph input file
    ///
    /// # Errors
    /// Returns [`ChartError::Io`] if the file cannot be read, or
    /// [`ChartError::Parse`] if its content is malformed
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ChartError::io(path, e))?;
        Self::from_toml(&content, path)
    }

    /// Node weights as the optional slice the formatter expects
    #[must_use]
    pub fn weights(&self) -> Option<&[f64]> {
        self.node_weights.as_deref()
    }
}

impl PlotInput {
    /// Parse a plot input from a TOML string
    ///
    /// # Errors
    /// Returns [`ChartError::Parse`] if the TOML is malformed
    pub fn from_toml(toml_str: &str, origin: &Path) -> Result<Self> {
        parse_toml(toml_str, origin)
    }

    /// Read and parse a plot input file
    ///
    /// # Errors
    /// Returns [`ChartError::Io`] if the file cannot be read, or
    /// [`ChartError::Parse`] if its content is malformed
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ChartError::io(path, e))?;
        Self::from_toml(&content, path)
    }

    /// Build a plot session writing to `base`
    ///
    /// Dimensions from the input win over the session defaults.
    ///
    /// # Errors
    /// Returns [`ChartError::InconsistentLength`] if the axis cannot be set
    pub fn into_session(self, base: impl Into<PathBuf>) -> Result<PlotSession> {
        let mut session = PlotSession::new(base);
        session.set_x_axis(self.x)?;

        let (width, height) = session.dimensions();
        session.set_dimensions(self.width.unwrap_or(width), self.height.unwrap_or(height));

        for series in self.series {
            session.add_series(series.data, series.title);
        }
        Ok(session)
    }
}

fn parse_toml<T: for<'de> Deserialize<'de>>(toml_str: &str, origin: &Path) -> Result<T> {
    toml::from_str(toml_str).map_err(|e| ChartError::Parse {
        path: origin.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_input_with_weights() {
        let input = GraphInput::from_toml(
            "matrix = [[0, 1.5], [0, 0]]\nnode_weights = [1, 0.5]\n",
            Path::new("graph.toml"),
        )
        .expect("valid graph input");

        assert_eq!(input.matrix, vec![vec![0.0, 1.5], vec![0.0, 0.0]]);
        assert_eq!(input.weights(), Some(&[1.0, 0.5][..]));
    }

    #[test]
    fn test_graph_input_without_weights() {
        let input = GraphInput::from_toml("matrix = [[0]]", Path::new("graph.toml"))
            .expect("valid graph input");
        assert!(input.weights().is_none());
    }

    #[test]
    fn test_graph_input_parse_error() {
        let err = GraphInput::from_toml("matrix = 3", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, ChartError::Parse { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_plot_input_into_session() {
        let input = PlotInput::from_toml(
            r#"
x = [0, 1, 2]
height = 400

[[series]]
title = "A"
data = [10, 20, 30]

[[series]]
title = "B"
data = [1.5, 2.5, 3.5]
"#,
            Path::new("plot.toml"),
        )
        .expect("valid plot input");

        let session = input.into_session("out/run").expect("axis accepted");
        assert_eq!(session.dimensions(), (800, 400));
        assert_eq!(session.x_axis(), Some(&[0, 1, 2][..]));
        assert_eq!(session.series().len(), 2);
        assert_eq!(session.series()[1].title(), "B");
    }
}
