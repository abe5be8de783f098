//! Automatic histogram binning
//!
//! Bin widths follow the `"auto"` estimator popularised by NumPy: the smaller of the
//! Sturges and Freedman–Diaconis widths, falling back to Sturges when the
//! interquartile range is zero. Edges are evenly spaced between the minimum and
//! maximum value.

use thiserror::Error;

/// Errors that can occur while binning values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BinningError {
    #[error("Cannot bin an empty sequence")]
    EmptyInput,

    #[error("Cannot bin non-finite value at index {index}")]
    NonFinite { index: usize },
}

type Result<T> = core::result::Result<T, BinningError>;

/// Upper bound on the automatic bin count; wider estimates fall back to Sturges
pub const MAX_BINS: usize = 10_000;

/// Frequency counts over evenly spaced bins
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Ascending bin edges; always `counts.len() + 1` entries
    pub bin_edges: Vec<f64>,
    /// Number of values falling in each bin
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bins `values` using the automatic width estimator
    ///
    /// Each bin is half-open `[left, right)` except the last, which also contains
    /// the maximum value.
    ///
    /// # Returns
    /// * `Ok(Histogram)` - Edges and counts; counts sum to `values.len()`
    /// * `Err(BinningError)` - If `values` is empty or contains NaN/infinity
    pub fn auto(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(BinningError::EmptyInput);
        }

        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(BinningError::NonFinite { index });
        }

        let mut sorted = values.to_vec();
        sorted.sort_unstable_by(f64::total_cmp);

        let min = sorted[0];
        let max = sorted[sorted.len() - 1];

        let (first_edge, last_edge, bins) = if max > min {
            (min, max, auto_bin_count(&sorted))
        } else {
            // All values equal; widen to a unit range around them
            (min - 0.5, max + 0.5, 1)
        };

        let width = (last_edge - first_edge) / bins as f64;
        let mut bin_edges: Vec<f64> = (0..bins)
            .map(|index| first_edge + width * index as f64)
            .collect();
        bin_edges.push(last_edge);

        let mut counts = vec![0usize; bins];
        for value in &sorted {
            let index = ((value - first_edge) / width) as usize;
            counts[index.min(bins - 1)] += 1;
        }

        log::debug!(
            "Binned {} values into {} bins over [{}, {}]",
            values.len(),
            bins,
            first_edge,
            last_edge
        );

        Ok(Self { bin_edges, counts })
    }

    /// Total number of binned values
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Largest single bin count
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Iterates `(left_edge, right_edge, count)` for every bin
    pub fn iter_bins(&self) -> impl Iterator<Item = (f64, f64, usize)> + '_ {
        self.bin_edges
            .windows(2)
            .zip(&self.counts)
            .map(|(edges, &count)| (edges[0], edges[1], count))
    }
}

/// Number of bins for sorted, non-constant data, never more than [`MAX_BINS`]
///
/// A tiny interquartile range next to a wide outlier can make the Freedman–Diaconis
/// estimate astronomically large; such estimates are replaced by the Sturges count.
fn auto_bin_count(sorted: &[f64]) -> usize {
    let ptp = sorted[sorted.len() - 1] - sorted[0];
    let sturges = sturges_width(sorted.len(), ptp);
    let fd = freedman_diaconis_width(sorted);

    let width = if fd > 0.0 { fd.min(sturges) } else { sturges };
    let estimate = (ptp / width).ceil();

    if estimate.is_finite() && estimate <= MAX_BINS as f64 {
        (estimate as usize).max(1)
    } else {
        log::warn!(
            "Automatic bin estimate {} exceeds {} bins, using Sturges",
            estimate,
            MAX_BINS
        );
        sturges_bin_count(sorted.len())
    }
}

/// Sturges bin count: `ceil(log2(n) + 1)`
fn sturges_bin_count(n: usize) -> usize {
    ((n as f64).log2() + 1.0).ceil() as usize
}

/// Sturges bin width: `ptp / (log2(n) + 1)`
fn sturges_width(n: usize, ptp: f64) -> f64 {
    ptp / ((n as f64).log2() + 1.0)
}

/// Freedman–Diaconis bin width: `2 * IQR * n^(-1/3)`
fn freedman_diaconis_width(sorted: &[f64]) -> f64 {
    let iqr = percentile(sorted, 75.0) - percentile(sorted, 25.0);
    2.0 * iqr * (sorted.len() as f64).powf(-1.0 / 3.0)
}

/// Percentile of sorted data using linear interpolation between closest ranks
fn percentile(sorted: &[f64], pct: f64) -> f64 {
    let rank = (pct / 100.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let fraction = rank - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}
