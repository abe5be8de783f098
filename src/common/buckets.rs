//! ASCII table of histogram bins
//!
//! Each [`BinRow`] carries an error range with its frequency, share of all samples and
//! running cumulative share. Tables are rendered with the [`tabled`] crate.

use crate::analysis::Histogram;
use crate::report::format_two_decimals;
use tabled::{Table, Tabled};

/// One histogram bin, formatted for display
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct BinRow {
    /// Error range, closed on the right only for the last bin (e.g. "[1.41, 1.67)")
    #[tabled(rename = "Error Range")]
    pub range: String,
    #[tabled(rename = "Frequency")]
    pub frequency: usize,
    /// Share of all samples in this bin
    #[tabled(rename = "Share")]
    pub share: String,
    /// Share of all samples at or below this bin's right edge
    #[tabled(rename = "Cumulative")]
    pub cumulative: String,
}

/// Formats `part / total` as a two-decimal percentage; `0.00%` when `total` is zero
fn percent(part: usize, total: usize) -> String {
    if total == 0 {
        return "0.00%".to_string();
    }
    format!("{:.2}%", part as f64 / total as f64 * 100.0)
}

/// Converts histogram bins into display rows, accumulating the running share
pub fn bin_rows(histogram: &Histogram) -> Vec<BinRow> {
    let total = histogram.total();
    let last = histogram.counts.len().saturating_sub(1);
    let mut running = 0;

    histogram
        .iter_bins()
        .enumerate()
        .map(|(index, (left, right, frequency))| {
            running += frequency;
            let close = if index == last { ']' } else { ')' };
            BinRow {
                range: format!(
                    "[{}, {}{}",
                    format_two_decimals(left),
                    format_two_decimals(right),
                    close
                ),
                frequency,
                share: percent(frequency, total),
                cumulative: percent(running, total),
            }
        })
        .collect()
}

/// Renders the bins of `histogram` as an ASCII table under an underlined title
pub fn format_bin_table(histogram: &Histogram, title: &str) -> String {
    let rows = bin_rows(histogram);
    if rows.is_empty() {
        return format!("{}: no bins", title);
    }

    format!(
        "{}\n{}\n{}",
        title,
        "=".repeat(title.len()),
        Table::new(rows)
    )
}
