//! Plot session: axis, series, dimensions and derived file paths

use super::documents::{data_table, gnuplot_script, ScriptLayout};
use crate::core::error::{ChartError, Result};
use crate::core::models::Series;
use crate::core::render::{derive_path, RenderReport, Renderer};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Default image width in pixels
pub const DEFAULT_WIDTH: u32 = 800;

/// Default image height in pixels
pub const DEFAULT_HEIGHT: u32 = 600;

/// A line plot under construction
///
/// All output files derive from one base name: `<base>.csv` holds the data,
/// `<base>.plt` the gnuplot script and `<base>.png` the image the script
/// produces.
///
/// The x-axis length is fixed by the first [`set_x_axis`](Self::set_x_axis)
/// call. Series are accepted without a length check; mismatches are reported
/// by [`render`](Self::render).
#[derive(Debug, Clone)]
pub struct PlotSession {
    base: PathBuf,
    width: u32,
    height: u32,
    expected_len: Option<usize>,
    x_axis: Option<Vec<i64>>,
    series: Vec<Series>,
}

impl PlotSession {
    /// Create an empty session writing files next to `base`
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            expected_len: None,
            x_axis: None,
            series: Vec::new(),
        }
    }

    /// Set the shared x-axis
    ///
    /// The first call fixes the expected length. Later calls may replace the
    /// values but not change the length.
    ///
    /// # Errors
    /// Returns [`ChartError::InconsistentLength`] if a different length was
    /// already fixed; the session is left unchanged
    pub fn set_x_axis(&mut self, values: impl Into<Vec<i64>>) -> Result<()> {
        let values = values.into();
        match self.expected_len {
            Some(expected) if expected != values.len() => {
                return Err(ChartError::InconsistentLength {
                    expected,
                    actual: values.len(),
                });
            }
            Some(_) => {}
            None => self.expected_len = Some(values.len()),
        }
        self.x_axis = Some(values);
        Ok(())
    }

    /// Append a series; its length is checked at render time
    pub fn add_series<I, T>(&mut self, data: I, title: impl Into<String>)
    where
        I: IntoIterator<Item = T>,
        T: Into<f64>,
    {
        self.series.push(Series::new(data, title));
    }

    /// Override the output image size
    pub fn set_dimensions(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Output image size as `(width, height)`
    #[must_use]
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Base name every output path derives from
    #[must_use]
    pub fn base_name(&self) -> &Path {
        &self.base
    }

    /// Path of the data table (`<base>.csv`)
    #[must_use]
    pub fn data_path(&self) -> PathBuf {
        derive_path(&self.base, "csv")
    }

    /// Path of the gnuplot script (`<base>.plt`)
    #[must_use]
    pub fn script_path(&self) -> PathBuf {
        derive_path(&self.base, "plt")
    }

    /// Path of the image the script produces (`<base>.png`)
    #[must_use]
    pub fn image_path(&self) -> PathBuf {
        derive_path(&self.base, "png")
    }

    /// Registered series in insertion order
    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// The x-axis, if one was set
    #[must_use]
    pub fn x_axis(&self) -> Option<&[i64]> {
        self.x_axis.as_deref()
    }

    /// Build the data table text
    ///
    /// # Errors
    /// Same preconditions as [`render`](Self::render)
    pub fn data_document(&self) -> Result<String> {
        let x_axis = self.validated_axis()?;
        Ok(data_table(x_axis, &self.series))
    }

    /// Build the gnuplot script text
    ///
    /// # Errors
    /// Same preconditions as [`render`](Self::render)
    pub fn script_document(&self) -> Result<String> {
        let x_axis = self.validated_axis()?;
        let image = self.image_path();
        let data = self.data_path();
        let layout = ScriptLayout {
            width: self.width,
            height: self.height,
            image: &image,
            data: &data,
        };
        Ok(gnuplot_script(&layout, x_axis, &self.series))
    }

    /// Write the data table and script, then render the script
    ///
    /// The renderer runs only after both documents are written. Its failure
    /// is logged and carried in the returned report; the documents remain on
    /// disk either way. Calling `render` again regenerates everything.
    ///
    /// # Errors
    /// * [`ChartError::EmptyInput`] if no series were added
    /// * [`ChartError::MissingAxis`] if no (or an empty) x-axis was set
    /// * [`ChartError::InconsistentLength`] if a series length differs from
    ///   the axis length
    /// * [`ChartError::Io`] if a document cannot be written
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &R) -> Result<RenderReport> {
        let data = self.data_document()?;
        let script = self.script_document()?;

        let data_path = self.data_path();
        fs::write(&data_path, data).map_err(|e| ChartError::io(&data_path, e))?;
        debug!("Data file written: {}", data_path.display());

        let script_path = self.script_path();
        fs::write(&script_path, script).map_err(|e| ChartError::io(&script_path, e))?;
        info!(
            "Plot documents written: {}, {}",
            data_path.display(),
            script_path.display()
        );

        let outcome = renderer.render(&script_path);
        if let Err(err) = &outcome {
            warn!("Plot rendering failed for {}: {err}", script_path.display());
        }

        Ok(RenderReport {
            documents: vec![data_path, script_path],
            outcome,
        })
    }

    /// Check render preconditions and return the axis
    fn validated_axis(&self) -> Result<&[i64]> {
        if self.series.is_empty() {
            return Err(ChartError::EmptyInput);
        }

        let x_axis = match self.x_axis.as_deref() {
            Some(axis) if !axis.is_empty() => axis,
            _ => return Err(ChartError::MissingAxis),
        };

        if let Some(series) = self.series.iter().find(|s| s.len() != x_axis.len()) {
            return Err(ChartError::InconsistentLength {
                expected: x_axis.len(),
                actual: series.len(),
            });
        }

        Ok(x_axis)
    }
}
