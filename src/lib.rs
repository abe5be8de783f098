//! Measurement error statistics for robotics lab readings
//!
//! Parses expected distances such as `"5cm"`, compares them with measured values,
//! reports per-sample error, mean and population standard deviation, and renders a
//! histogram of the errors to a PNG file.

pub mod analysis;
pub mod common;
pub mod config;
pub mod dataset;
pub mod parsing;
pub mod report;

use analysis::{Histogram, Summary};
use common::buckets::format_bin_table;
use config::HistogramConfig;
use dataset::Dataset;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during a measurement analysis run
#[derive(Error, Debug)]
pub enum LabError {
    #[error("Parsing error: {0}")]
    Parsing(#[from] parsing::ParseError),

    #[error("Statistics error: {0}")]
    Statistics(#[from] analysis::StatisticsError),

    #[error("Binning error: {0}")]
    Binning(#[from] analysis::BinningError),

    #[error("Plot error: {0}")]
    Plot(#[from] common::PlotError),

    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = core::result::Result<T, LabError>;

/// Runs the full analysis: parse, compute, report, then render the histogram
///
/// Parsing and statistics failures abort before anything is written to `out`.
/// A rendering failure aborts after the textual report has been written.
///
/// # Arguments
/// * `dataset` - Expected tokens and measured values
/// * `config` - Histogram output settings
/// * `out` - Destination for the textual report
///
/// # Returns
/// * `Ok(Summary)` - Errors and statistics of the run
/// * `Err(LabError)` - If any stage failed
pub fn run<W: Write>(
    dataset: &Dataset,
    config: &HistogramConfig,
    out: &mut W,
) -> Result<Summary> {
    let expected = parsing::parse_expected(&dataset.expected_tokens)?;
    let summary = Summary::compute(&expected, &dataset.actual)?;
    let histogram = Histogram::auto(&summary.errors)?;

    report::write_report(out, &expected, &dataset.actual, &summary)?;

    log::info!("\n{}", format_bin_table(&histogram, "Error Histogram Bins"));

    common::plots::create_error_histogram(&histogram, config)?;
    report::write_saved_notice(out, &config.output_path)?;

    Ok(summary)
}
