//! Graph description generation
//!
//! Provides the DOT formatter for weighted adjacency matrices and a drawer
//! that writes the document and hands it to a renderer.

pub mod drawer;
pub mod formatter;

pub use drawer::GraphDrawer;
pub use formatter::{GraphDescription, GraphFormatter};
