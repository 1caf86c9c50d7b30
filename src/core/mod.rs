//! Core functionality: document formatters, renderers and configuration

pub mod config;
pub mod error;
pub mod graph;
pub mod models;
pub mod numfmt;
pub mod plot;
pub mod render;

