//! Graph command handler
//!
//! Loads an adjacency matrix from TOML, writes the DOT document and renders
//! it with Graphviz.

use super::{print_report, resolve_base};
use chartkit::config::Config;
use chartkit::core::{
    graph::GraphDrawer,
    models::GraphInput,
    render::{GraphvizRenderer, NoopRenderer, Renderer},
};
use std::path::Path;
use tracing::{error, info};

/// Run the graph command. Returns `false` if nothing could be written.
///
/// # Arguments
/// * `input_file` - Path to the graph TOML file
/// * `output` - Optional output base name
/// * `no_render` - Skip the Graphviz step
/// * `config` - Configuration with the output directory and `dot` executable
/// * `verbose` - Whether to list written documents
pub fn run(
    input_file: &Path,
    output: Option<&Path>,
    no_render: bool,
    config: &Config,
    verbose: bool,
) -> bool {
    match draw(input_file, output, no_render, config, verbose) {
        Ok(()) => true,
        Err(err) => {
            eprintln!("{err}");
            false
        }
    }
}

fn draw(
    input_file: &Path,
    output: Option<&Path>,
    no_render: bool,
    config: &Config,
    verbose: bool,
) -> Result<(), String> {
    let input = GraphInput::load(input_file).map_err(|e| {
        error!("Failed to load graph {}: {e}", input_file.display());
        format!("✗ Failed to load {}: {e}", input_file.display())
    })?;

    info!(
        "Graph loaded: {} ({} nodes)",
        input_file.display(),
        input.matrix.len()
    );

    let base = resolve_base(input_file, output, config)?;

    let renderer: Box<dyn Renderer> = if no_render {
        Box::new(NoopRenderer)
    } else {
        Box::new(GraphvizRenderer::with_program(&config.render.dot))
    };

    let report = GraphDrawer::draw(&input.matrix, &base, input.weights(), renderer.as_ref())
        .map_err(|e| {
            error!("Graph generation failed for {}: {e}", input_file.display());
            format!("✗ Failed to generate graph for {}: {e}", input_file.display())
        })?;

    print_report(&report, verbose, !no_render);
    Ok(())
}
