//! Error sequence and summary statistics
//!
//! Errors are always `actual - expected`, paired by position. Both the mean and the
//! standard deviation are population statistics (divisor `N`).

use thiserror::Error;

/// Errors that can occur while computing measurement statistics
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatisticsError {
    #[error("Cannot compute statistics of an empty sequence")]
    EmptyInput,

    #[error("Expected and actual sequences differ in length ({expected} expected vs {actual} actual)")]
    LengthMismatch { expected: usize, actual: usize },
}

type Result<T> = core::result::Result<T, StatisticsError>;

/// Errors of a measurement run together with their summary statistics
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Per-sample error, `actual[i] - expected[i]`
    pub errors: Vec<f64>,
    /// Arithmetic mean of [`Self::errors`]
    pub mean: f64,
    /// Population standard deviation of [`Self::errors`]
    pub std_dev: f64,
}

impl Summary {
    /// Computes the error sequence and its statistics for paired measurements
    ///
    /// # Arguments
    /// * `expected` - Nominal measurement values
    /// * `actual` - Observed measurement values, positionally matching `expected`
    ///
    /// # Returns
    /// * `Ok(Summary)` - Errors, mean and population standard deviation
    /// * `Err(StatisticsError)` - If the sequences are empty or differ in length
    pub fn compute(expected: &[f64], actual: &[f64]) -> Result<Self> {
        let errors = compute_errors(expected, actual)?;
        let mean = mean(&errors)?;
        let std_dev = population_std_dev(&errors)?;

        log::debug!(
            "Computed statistics over {} samples: mean={}, std_dev={}",
            errors.len(),
            mean,
            std_dev
        );

        Ok(Self {
            errors,
            mean,
            std_dev,
        })
    }
}

/// Computes `actual[i] - expected[i]` for every sample
///
/// Fails fast when the sequences differ in length instead of silently truncating.
pub fn compute_errors(expected: &[f64], actual: &[f64]) -> Result<Vec<f64>> {
    if expected.len() != actual.len() {
        return Err(StatisticsError::LengthMismatch {
            expected: expected.len(),
            actual: actual.len(),
        });
    }

    if expected.is_empty() {
        return Err(StatisticsError::EmptyInput);
    }

    Ok(actual
        .iter()
        .zip(expected)
        .map(|(actual, expected)| actual - expected)
        .collect())
}

/// Arithmetic mean, `sum / N`
pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(StatisticsError::EmptyInput);
    }

    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation, `sqrt(sum((x - mean)^2) / N)`
pub fn population_std_dev(values: &[f64]) -> Result<f64> {
    let mu = mean(values)?;
    let sum_sq: f64 = values.iter().map(|x| (x - mu).powi(2)).sum();
    Ok((sum_sq / values.len() as f64).sqrt())
}
