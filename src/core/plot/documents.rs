//! Data table and gnuplot script text
//!
//! Both functions assume the caller already checked that every series has
//! one value per x-axis entry.

use crate::core::models::Series;
use crate::core::numfmt::{general, push_field};
use std::fmt::Write;
use std::path::Path;

/// Data file column holding the first series (column 1 is the x value)
pub const FIRST_SERIES_COLUMN: usize = 2;

/// Output settings written at the top of a gnuplot script
#[derive(Debug, Clone, Copy)]
pub struct ScriptLayout<'a> {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Image the script writes
    pub image: &'a Path,
    /// Data file the plot clauses read
    pub data: &'a Path,
}

/// Build the whitespace-column data table
///
/// One row per x-axis entry: the x value followed by each series' value at
/// that position, every field right-aligned in a 12-character column and
/// followed by a tab.
#[must_use]
pub fn data_table(x_axis: &[i64], series: &[Series]) -> String {
    let mut output = String::new();
    for (index, x) in x_axis.iter().enumerate() {
        push_field(&mut output, &x.to_string());
        for chart in series {
            push_field(&mut output, &general(chart.data()[index]));
        }
        output.push('\n');
    }
    output
}

/// Build the gnuplot command script
///
/// The x range spans the first to the last axis value as given (the axis is
/// not sorted). The final `plot` statement carries one clause per series and
/// has no trailing newline.
#[must_use]
pub fn gnuplot_script(layout: &ScriptLayout<'_>, x_axis: &[i64], series: &[Series]) -> String {
    let mut commands = String::new();
    let _ = writeln!(commands, "set term png size {},{}", layout.width, layout.height);
    let _ = writeln!(commands, "set output '{}'", layout.image.display());
    if let (Some(first), Some(last)) = (x_axis.first(), x_axis.last()) {
        let _ = writeln!(commands, "set xrange [{first}:{last}]");
    }
    commands.push_str("set grid\n");
    commands.push_str("set key outside right top\n");
    commands.push_str("plot ");

    let clauses: Vec<String> = series
        .iter()
        .enumerate()
        .map(|(index, chart)| {
            format!(
                "'{}' using 1:{} with linespoints title '{}'",
                layout.data.display(),
                index + FIRST_SERIES_COLUMN,
                chart.title()
            )
        })
        .collect();
    commands.push_str(&clauses.join(", "));
    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_table_columns() {
        let series = vec![
            Series::new([10, 20], "A"),
            Series::new([0.5, 1.25], "B"),
        ];
        let table = data_table(&[0, 1], &series);

        assert_eq!(
            table,
            "           0\t          10\t         0.5\t\n           1\t          20\t        1.25\t\n"
        );
    }

    #[test]
    fn test_script_has_no_trailing_separator() {
        let series = vec![Series::new([1], "first"), Series::new([2], "second")];
        let layout = ScriptLayout {
            width: 640,
            height: 480,
            image: Path::new("run.png"),
            data: Path::new("run.csv"),
        };
        let script = gnuplot_script(&layout, &[3], &series);

        assert_eq!(
            script,
            "set term png size 640,480\n\
             set output 'run.png'\n\
             set xrange [3:3]\n\
             set grid\n\
             set key outside right top\n\
             plot 'run.csv' using 1:2 with linespoints title 'first', \
             'run.csv' using 1:3 with linespoints title 'second'"
        );
    }

    #[test]
    fn test_xrange_keeps_axis_order() {
        let layout = ScriptLayout {
            width: 800,
            height: 600,
            image: Path::new("p.png"),
            data: Path::new("p.csv"),
        };
        let script = gnuplot_script(&layout, &[5, 9, 1], &[Series::new([1, 2, 3], "s")]);
        assert!(script.contains("set xrange [5:1]\n"));
    }
}
