//! Numeric text formatting for generated documents
//!
//! Graphviz and gnuplot documents are compared byte for byte by downstream
//! tooling, so numbers are printed the way a C `printf` family would print
//! them rather than with Rust's shortest round-trip representation.

use std::fmt::Write;

/// Significant digits used by [`general`] (the `%g` default)
const PRECISION: i32 = 6;

/// Width of every field in a data document row
pub const FIELD_WIDTH: usize = 12;

/// Format `value` like `printf("%g", value)`
///
/// Six significant digits, trailing zeros removed, scientific notation when
/// the decimal exponent is below -4 or at least 6.
///
/// ```
/// use chartkit::core::numfmt::general;
///
/// assert_eq!(general(20.0), "20");
/// assert_eq!(general(0.1), "0.1");
/// assert_eq!(general(1_234_567.0), "1.23457e+06");
/// ```
#[must_use]
pub fn general(value: f64) -> String {
    if value.is_nan() {
        return String::from("nan");
    }
    if value.is_infinite() {
        return String::from(if value > 0.0 { "inf" } else { "-inf" });
    }
    if value == 0.0 {
        return String::from(if value.is_sign_negative() { "-0" } else { "0" });
    }

    // Rounding to the target precision can bump the exponent (999999.5 -> 1e+06),
    // so take the exponent from the already-rounded scientific form.
    let digits = usize::try_from(PRECISION - 1).unwrap_or(0);
    let scientific = format!("{value:.digits$e}");
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = usize::try_from(PRECISION - 1 - exponent).unwrap_or(0);
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

/// Format `value` with exactly two decimal digits (`%.2f`)
#[must_use]
pub fn fixed2(value: f64) -> String {
    if value.is_nan() {
        return String::from("nan");
    }
    format!("{value:.2}")
}

/// Append `text` right-aligned in a [`FIELD_WIDTH`] column followed by a tab
pub fn push_field(row: &mut String, text: &str) {
    let _ = write!(row, "{text:>FIELD_WIDTH$}\t");
}

/// Drop trailing zeros (and a dangling dot) from a decimal fraction
fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
