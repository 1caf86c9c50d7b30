//! Shared library for `chartkit`
//!
//! Turns adjacency matrices into Graphviz documents and data series into
//! gnuplot data/script pairs, then hands them to an external renderer.

pub mod core;
pub mod shared;

pub use crate::core::config;
pub use crate::core::error::{ChartError, Result};
pub use shared::*;
