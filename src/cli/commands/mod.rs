//! CLI command handlers for `chartkit`.
//!
//! Each command is implemented in its own submodule; helpers shared by the
//! drawing commands live here.

pub mod config;
pub mod graph;
pub mod plot;

use chartkit::config::Config;
use chartkit::core::render::RenderReport;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::error;

/// Resolve the output base name for `input_file`
///
/// An explicit `--output` wins; otherwise the input file stem is placed in
/// the configured output directory, which is created if needed.
pub fn resolve_base(
    input_file: &Path,
    output: Option<&Path>,
    config: &Config,
) -> Result<PathBuf, String> {
    if let Some(base) = output {
        return Ok(base.to_path_buf());
    }

    let out_dir = if config.paths.out_dir.is_empty() {
        PathBuf::from(".")
    } else {
        PathBuf::from(&config.paths.out_dir)
    };

    fs::create_dir_all(&out_dir).map_err(|e| {
        error!("Failed to create output directory {}: {e}", out_dir.display());
        format!("✗ Failed to create output directory: {}", out_dir.display())
    })?;

    let stem = input_file
        .file_stem()
        .ok_or_else(|| format!("✗ Cannot derive an output name from {}", input_file.display()))?;
    Ok(out_dir.join(stem))
}

/// Print the outcome of a draw/render call
///
/// Documents are always listed in verbose mode. A renderer failure is
/// printed as a warning; the documents are still usable.
pub fn print_report(report: &RenderReport, verbose: bool, rendered: bool) {
    for line in status_lines(report, verbose, rendered) {
        println!("{line}");
    }

    if rendered {
        if let Some(err) = report.error() {
            eprintln!("⚠ Rendering failed ({err}); documents were kept");
        }
    }
}

/// Status lines printed on stdout for a report
///
/// Without rendering there is no image line, since the "image" is only the
/// document handed back by the no-op renderer.
fn status_lines(report: &RenderReport, verbose: bool, rendered: bool) -> Vec<String> {
    let mut lines = Vec::new();
    if verbose {
        lines.extend(
            report
                .documents
                .iter()
                .map(|document| format!("✓ Written: {}", document.display())),
        );
    }
    if rendered {
        if let Some(image) = report.image() {
            lines.push(format!("✓ Image created: {}", image.display()));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use chartkit::core::render::RenderError;

    fn config_in(out_dir: &Path) -> Config {
        let mut config = Config::from_defaults();
        config.paths.out_dir = out_dir.to_string_lossy().to_string();
        config
    }

    fn report(outcome: Result<PathBuf, RenderError>) -> RenderReport {
        RenderReport {
            documents: vec![PathBuf::from("out/g.dot")],
            outcome,
        }
    }

    #[test]
    fn test_resolve_base_explicit_output() {
        let dir = tempfile::tempdir().expect("temp dir");
        let out_dir = dir.path().join("never-created");

        let base = resolve_base(
            Path::new("data/network.toml"),
            Some(Path::new("custom/run1")),
            &config_in(&out_dir),
        )
        .expect("explicit output");

        assert_eq!(base, PathBuf::from("custom/run1"));
        assert!(!out_dir.exists());
    }

    #[test]
    fn test_resolve_base_uses_out_dir_and_stem() {
        let dir = tempfile::tempdir().expect("temp dir");
        let out_dir = dir.path().join("nested").join("out");

        let base = resolve_base(Path::new("data/network.v2.toml"), None, &config_in(&out_dir))
            .expect("default base");

        assert_eq!(base, out_dir.join("network.v2"));
        assert!(out_dir.is_dir());
    }

    #[test]
    fn test_resolve_base_out_dir_is_a_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let blocker = dir.path().join("out");
        fs::write(&blocker, "").expect("write file");

        let result = resolve_base(Path::new("network.toml"), None, &config_in(&blocker));
        assert!(result.is_err());
    }

    #[test]
    fn test_status_lines_without_render() {
        let noop = report(Ok(PathBuf::from("out/g.dot")));
        assert!(status_lines(&noop, false, false).is_empty());
        assert_eq!(status_lines(&noop, true, false), vec!["✓ Written: out/g.dot"]);
    }

    #[test]
    fn test_status_lines_rendered() {
        let ok = report(Ok(PathBuf::from("out/g.png")));
        assert_eq!(status_lines(&ok, false, true), vec!["✓ Image created: out/g.png"]);

        let failed = report(Err(RenderError::Failed {
            program: "dot".to_string(),
            status: "exit status: 1".to_string(),
        }));
        assert!(status_lines(&failed, false, true).is_empty());
    }
}
