//! Textual report of measurement errors
//!
//! All values are printed with exactly two fractional digits, rounded from the exact
//! binary value (so `2.675` prints as `2.67`).

use crate::analysis::Summary;
use std::io::{self, Write};
use std::path::Path;

/// Formats a value with exactly two fractional digits
pub fn format_two_decimals(value: f64) -> String {
    format!("{:.2}", value)
}

/// Formats values as a bracketed list of quoted two-decimal strings
///
/// e.g. `['5.00', '7.00']`
pub fn format_value_list(values: &[f64]) -> String {
    let items: Vec<String> = values
        .iter()
        .map(|value| format!("'{}'", format_two_decimals(*value)))
        .collect();
    format!("[{}]", items.join(", "))
}

/// Writes the expected, actual and error sequences followed by mean and deviation
pub fn write_report<W: Write>(
    out: &mut W,
    expected: &[f64],
    actual: &[f64],
    summary: &Summary,
) -> io::Result<()> {
    writeln!(out, "Expected: {}", format_value_list(expected))?;
    writeln!(out, "Actual:   {}", format_value_list(actual))?;
    writeln!(
        out,
        "Errors (Actual - Expected): {}",
        format_value_list(&summary.errors)
    )?;

    writeln!(out)?;
    writeln!(out, "Mean of errors: {}", format_two_decimals(summary.mean))?;
    writeln!(
        out,
        "Standard Deviation of errors: {}",
        format_two_decimals(summary.std_dev)
    )?;
    Ok(())
}

/// Writes the notice printed once the histogram has been saved
pub fn write_saved_notice<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Saved histogram to: {}", path.display())
}
