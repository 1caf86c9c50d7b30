//! Plot command handler
//!
//! Loads an x-axis and series from TOML, writes the data table and gnuplot
//! script, then runs gnuplot.

use super::{print_report, resolve_base};
use chartkit::config::Config;
use chartkit::core::{
    models::PlotInput,
    render::{GnuplotRenderer, NoopRenderer, Renderer},
};
use std::path::Path;
use tracing::{error, info};

/// Options of the plot command beyond the input file
#[derive(Debug, Clone, Copy, Default)]
pub struct PlotOptions<'a> {
    /// Output base name
    pub output: Option<&'a Path>,
    /// Width override
    pub width: Option<u32>,
    /// Height override
    pub height: Option<u32>,
    /// Skip the gnuplot step
    pub no_render: bool,
}

/// Run the plot command. Returns `false` if nothing could be written.
///
/// Image size precedence: command-line flags, then the input file, then the
/// configured defaults.
pub fn run(input_file: &Path, options: PlotOptions<'_>, config: &Config, verbose: bool) -> bool {
    match plot(input_file, options, config, verbose) {
        Ok(()) => true,
        Err(err) => {
            eprintln!("{err}");
            false
        }
    }
}

fn plot(
    input_file: &Path,
    options: PlotOptions<'_>,
    config: &Config,
    verbose: bool,
) -> Result<(), String> {
    let mut input = PlotInput::load(input_file).map_err(|e| {
        error!("Failed to load plot {}: {e}", input_file.display());
        format!("✗ Failed to load {}: {e}", input_file.display())
    })?;

    info!(
        "Plot loaded: {} ({} series, {} points)",
        input_file.display(),
        input.series.len(),
        input.x.len()
    );

    apply_dimensions(&mut input, &options, config);

    let base = resolve_base(input_file, options.output, config)?;
    let session = input.into_session(base).map_err(|e| {
        error!("Invalid plot input {}: {e}", input_file.display());
        format!("✗ Invalid plot input {}: {e}", input_file.display())
    })?;

    let renderer: Box<dyn Renderer> = if options.no_render {
        Box::new(NoopRenderer)
    } else {
        Box::new(GnuplotRenderer::with_program(&config.render.gnuplot))
    };

    let report = session.render(renderer.as_ref()).map_err(|e| {
        error!("Plot generation failed for {}: {e}", input_file.display());
        format!("✗ Failed to generate plot for {}: {e}", input_file.display())
    })?;

    print_report(&report, verbose, !options.no_render);
    Ok(())
}

/// Fill in the image size: flags, then the input file, then the config
fn apply_dimensions(input: &mut PlotInput, options: &PlotOptions<'_>, config: &Config) {
    input.width = options.width.or(input.width).or(Some(config.render.width));
    input.height = options
        .height
        .or(input.height)
        .or(Some(config.render.height));
}
