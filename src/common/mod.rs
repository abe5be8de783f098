//! Shared output infrastructure
//!
//! This module provides reusable infrastructure for:
//! - Bucket types and ASCII table formatting
//! - Plotting the error histogram

pub mod buckets;
pub mod plots;

// Re-export commonly used items
pub use plots::PlotError;
