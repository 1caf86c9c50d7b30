//! Graphviz DOT generator for weighted directed graphs
//!
//! Produces a left-to-right digraph with circular nodes named `N0..Nn`. Edges
//! are emitted in row-major order for every positive matrix cell, labelled with
//! the weight and drawn with a pen width proportional to it. Node pen widths
//! are only emitted when per-node weights are supplied.

use crate::core::error::{ChartError, Result};
use crate::core::numfmt::{fixed2, general};
use std::fmt::{self, Write};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Multiplier from edge weight to pen width
pub const EDGE_THICKNESS_MULTIPLIER: f64 = 5.0;

/// Multiplier from node weight to pen width
pub const NODE_SIZE_MULTIPLIER: f64 = 20.0;

/// Smallest node pen width ever emitted
pub const MIN_NODE_SIZE: f64 = 0.1;

/// A generated DOT document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphDescription {
    document: String,
    dimension: usize,
    edge_count: usize,
    sized_nodes: bool,
}

impl GraphDescription {
    /// Full document text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.document
    }

    /// Number of nodes (matrix dimension)
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.dimension
    }

    /// Number of edge statements
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether per-node size statements were emitted
    #[must_use]
    pub const fn has_node_sizes(&self) -> bool {
        self.sized_nodes
    }

    /// Write the document to `path`, replacing any existing file
    ///
    /// # Errors
    /// Returns [`ChartError::Io`] if the file cannot be written
    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, &self.document).map_err(|e| ChartError::io(path, e))?;
        info!("DOT file written: {}", path.display());
        Ok(())
    }
}

impl fmt::Display for GraphDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.document)
    }
}

/// Generator for DOT graph descriptions
pub struct GraphFormatter;

impl GraphFormatter {
    /// Generate a DOT description from an adjacency matrix
    ///
    /// # Arguments
    /// * `matrix` - Square matrix; cell `(i, j) > 0` is an edge `Ni -> Nj`
    /// * `node_weights` - Optional per-node weights, one per matrix row
    ///
    /// # Errors
    /// Returns [`ChartError::InvalidInput`] if the matrix is empty or not
    /// square, or if `node_weights` does not have one entry per node
    pub fn generate(
        matrix: &[Vec<f64>],
        node_weights: Option<&[f64]>,
    ) -> Result<GraphDescription> {
        let dimension = Self::validate(matrix, node_weights)?;

        let mut output = String::from("digraph G {\n");
        output.push_str("    rankdir=LR;\n");
        output.push_str("    node [shape=circle];\n");

        if let Some(weights) = node_weights {
            for (index, &weight) in weights.iter().enumerate() {
                let _ = writeln!(
                    output,
                    "    N{index}[label=\"N{index}\", penwidth={}];",
                    general(Self::node_size(weight))
                );
            }
        }

        let mut edge_count = 0;
        for (from, row) in matrix.iter().enumerate() {
            for (to, &weight) in row.iter().enumerate() {
                if weight > 0.0 {
                    let _ = writeln!(
                        output,
                        "    N{from} -> N{to} [label=\"{}\", penwidth={}];",
                        fixed2(weight),
                        fixed2(Self::edge_thickness(weight))
                    );
                    edge_count += 1;
                }
            }
        }

        output.push_str("}\n");
        debug!("Generated DOT description: {dimension} nodes, {edge_count} edges");

        Ok(GraphDescription {
            document: output,
            dimension,
            edge_count,
            sized_nodes: node_weights.is_some(),
        })
    }

    /// Pen width for a node of the given weight, floored at [`MIN_NODE_SIZE`]
    #[must_use]
    pub fn node_size(weight: f64) -> f64 {
        (weight * NODE_SIZE_MULTIPLIER).max(MIN_NODE_SIZE)
    }

    /// Pen width for an edge of the given weight (no floor)
    #[must_use]
    pub fn edge_thickness(weight: f64) -> f64 {
        weight * EDGE_THICKNESS_MULTIPLIER
    }

    /// Check shapes and return the matrix dimension
    fn validate(matrix: &[Vec<f64>], node_weights: Option<&[f64]>) -> Result<usize> {
        if matrix.is_empty() {
            return Err(ChartError::InvalidInput(
                "Adjacency matrix is empty".to_string(),
            ));
        }

        let dimension = matrix.len();
        if let Some((row, cells)) = matrix
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != dimension)
        {
            return Err(ChartError::InvalidInput(format!(
                "Adjacency matrix must be square: row {row} has {} entries, expected {dimension}",
                cells.len()
            )));
        }

        if let Some(weights) = node_weights {
            if weights.len() != dimension {
                return Err(ChartError::InvalidInput(format!(
                    "Node weights vector size must match matrix size ({} != {dimension})",
                    weights.len()
                )));
            }
        }

        Ok(dimension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_node_cycle() {
        let matrix = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
        let graph = GraphFormatter::generate(&matrix, None).expect("valid matrix");

        assert_eq!(
            graph.as_str(),
            "digraph G {\n\
             \x20   rankdir=LR;\n\
             \x20   node [shape=circle];\n\
             \x20   N0 -> N1 [label=\"1.00\", penwidth=5.00];\n\
             \x20   N1 -> N0 [label=\"1.00\", penwidth=5.00];\n\
             }\n"
        );
        assert_eq!(graph.edge_count(), 2);
        assert!(!graph.has_node_sizes());
    }

    #[test]
    fn test_node_weights_emit_sizes() {
        let matrix = vec![vec![0.0, 0.5], vec![0.0, 0.0]];
        let graph =
            GraphFormatter::generate(&matrix, Some(&[1.0, 0.0])).expect("valid weights");

        assert!(graph
            .as_str()
            .contains("    N0[label=\"N0\", penwidth=20];\n"));
        assert!(graph
            .as_str()
            .contains("    N1[label=\"N1\", penwidth=0.1];\n"));
        assert!(graph
            .as_str()
            .contains("    N0 -> N1 [label=\"0.50\", penwidth=2.50];\n"));
        assert!(graph.has_node_sizes());
    }

    #[test]
    fn test_node_lines_precede_edges() {
        let matrix = vec![vec![1.0]];
        let graph = GraphFormatter::generate(&matrix, Some(&[0.25])).expect("valid");
        let node = graph.as_str().find("N0[label").expect("node line");
        let edge = graph.as_str().find("N0 -> N0").expect("self loop");
        assert!(node < edge);
    }

    #[test]
    fn test_node_size_floor() {
        assert!((GraphFormatter::node_size(0.0) - 0.1).abs() < f64::EPSILON);
        assert!((GraphFormatter::node_size(-1.0) - 0.1).abs() < f64::EPSILON);
        assert!((GraphFormatter::node_size(1.0) - 20.0).abs() < f64::EPSILON);
        assert!(GraphFormatter::node_size(2.0) > GraphFormatter::node_size(1.0));
    }

    #[test]
    fn test_edge_thickness_has_no_floor() {
        assert!((GraphFormatter::edge_thickness(0.01) - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_empty_matrix_rejected() {
        let err = GraphFormatter::generate(&[], None).unwrap_err();
        assert!(matches!(err, ChartError::InvalidInput(_)));
    }

    #[test]
    fn test_non_square_rejected() {
        let matrix = vec![vec![0.0, 1.0], vec![1.0]];
        let err = GraphFormatter::generate(&matrix, None).unwrap_err();
        assert!(matches!(err, ChartError::InvalidInput(_)));
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn test_empty_weights_are_not_absent() {
        let matrix = vec![vec![0.0]];
        let err = GraphFormatter::generate(&matrix, Some(&[])).unwrap_err();
        assert!(matches!(err, ChartError::InvalidInput(_)));
    }

    #[test]
    fn test_nan_weight_is_no_edge() {
        let matrix = vec![vec![f64::NAN]];
        let graph = GraphFormatter::generate(&matrix, None).expect("valid shape");
        assert_eq!(graph.edge_count(), 0);
    }
}
