//! Data models for plot series and CLI input files

pub mod input;
pub mod series;

pub use input::{GraphInput, PlotInput, SeriesInput};
pub use series::Series;
