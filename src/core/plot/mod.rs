//! Line plot generation for gnuplot
//!
//! A [`PlotSession`] collects an x-axis and any number of series, writes a
//! column data file plus a gnuplot script that references it, and hands the
//! script to a renderer.

pub mod documents;
pub mod session;

pub use session::{PlotSession, DEFAULT_HEIGHT, DEFAULT_WIDTH};
