//! A named sequence of y-values plotted against a shared x-axis

/// One data series inside a plot
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Legend title
    title: String,
    /// Y-values in x-axis order
    data: Vec<f64>,
}

impl Series {
    /// Create a new series from any values convertible to `f64`
    ///
    /// # Arguments
    /// * `data` - Y-values, one per x-axis position
    /// * `title` - Legend title shown by the plotting tool
    pub fn new<I, T>(data: I, title: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<f64>,
    {
        Self {
            title: title.into(),
            data: data.into_iter().map(Into::into).collect(),
        }
    }

    /// Replace the legend title
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Legend title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Y-values
    #[must_use]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Number of values
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the series has no values
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_from_integers() {
        let series = Series::new(vec![1_i32, 2, 3], "ints");
        assert_eq!(series.data(), &[1.0, 2.0, 3.0]);
        assert_eq!(series.len(), 3);
        assert_eq!(series.title(), "ints");
    }

    #[test]
    fn test_set_title() {
        let mut series = Series::new([0.5_f32], "old");
        series.set_title("new");
        assert_eq!(series.title(), "new");
        assert!(!series.is_empty());
    }
}
