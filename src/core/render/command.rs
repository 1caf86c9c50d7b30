//! Renderers backed by external Graphviz and gnuplot executables

use super::{RenderError, Renderer};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, info};

/// Default Graphviz executable
pub const DEFAULT_DOT: &str = "dot";

/// Default gnuplot executable
pub const DEFAULT_GNUPLOT: &str = "gnuplot";

/// Renders `.dot` documents to PNG with Graphviz
#[derive(Debug, Clone)]
pub struct GraphvizRenderer {
    /// Graphviz executable name or path
    program: String,
}

impl GraphvizRenderer {
    /// Create a renderer using the default `dot` executable
    #[must_use]
    pub fn new() -> Self {
        Self::with_program(DEFAULT_DOT)
    }

    /// Create a renderer using a custom executable
    #[must_use]
    pub fn with_program(program: &str) -> Self {
        Self {
            program: program.to_owned(),
        }
    }

    /// Executable this renderer runs
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for GraphvizRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for GraphvizRenderer {
    /// Run `dot -Tpng <doc> -o <doc stem>.png`
    fn render(&self, document: &Path) -> Result<PathBuf, RenderError> {
        let image = document.with_extension("png");
        let mut command = Command::new(&self.program);
        command
            .arg("-Tpng")
            .arg(document)
            .arg("-o")
            .arg(&image);

        run(&self.program, &mut command)?;
        info!("Graph image created: {}", image.display());
        Ok(image)
    }
}

/// Runs gnuplot scripts
///
/// The script itself names its output image; this renderer assumes the
/// `<base>.plt` / `<base>.png` pairing used by
/// [`PlotSession`](crate::core::plot::PlotSession).
#[derive(Debug, Clone)]
pub struct GnuplotRenderer {
    /// gnuplot executable name or path
    program: String,
}

impl GnuplotRenderer {
    /// Create a renderer using the default `gnuplot` executable
    #[must_use]
    pub fn new() -> Self {
        Self::with_program(DEFAULT_GNUPLOT)
    }

    /// Create a renderer using a custom executable
    #[must_use]
    pub fn with_program(program: &str) -> Self {
        Self {
            program: program.to_owned(),
        }
    }

    /// Executable this renderer runs
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for GnuplotRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for GnuplotRenderer {
    fn render(&self, document: &Path) -> Result<PathBuf, RenderError> {
        let mut command = Command::new(&self.program);
        command.arg(document);

        run(&self.program, &mut command)?;
        let image = document.with_extension("png");
        info!("Plot created successfully: {}", image.display());
        Ok(image)
    }
}

/// Run `command` to completion, mapping spawn errors and non-zero exits
fn run(program: &str, command: &mut Command) -> Result<(), RenderError> {
    debug!("Running renderer: {command:?}");
    let status = command
        .stdout(Stdio::null())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| RenderError::Spawn {
            program: program.to_owned(),
            source,
        })?;

    if !status.success() {
        return Err(RenderError::Failed {
            program: program.to_owned(),
            status: status.to_string(),
        });
    }

    Ok(())
}
