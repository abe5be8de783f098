//! Numeric analysis of measurement errors
//!
//! This module contains:
//! - Error sequence and summary statistics
//! - Automatic histogram binning

pub mod binning;
pub mod statistics;

// Re-export analysis types for convenience
pub use binning::{BinningError, Histogram};
pub use statistics::{StatisticsError, Summary};
