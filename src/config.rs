//! Chart settings used when rendering the error histogram

use std::path::PathBuf;

/// Default output file, relative to the working directory
pub const DEFAULT_OUTPUT_FILE: &str = "error_histogram.png";

/// Settings for the rendered histogram
///
/// The defaults reproduce the lab figure: a 7x4 inch chart at 200 DPI.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramConfig {
    /// Where the PNG is written; an existing file is overwritten
    pub output_path: PathBuf,
    /// Figure size in inches as `(width, height)`
    pub figure_size_in: (f64, f64),
    /// Dots per inch
    pub dpi: u32,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl HistogramConfig {
    /// Same as [`Default`], but writing to `output_path`
    pub fn with_output_path(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            ..Self::default()
        }
    }

    /// Backend resolution in pixels derived from figure size and DPI
    pub fn pixel_size(&self) -> (u32, u32) {
        let dpi = self.dpi as f64;
        (
            (self.figure_size_in.0 * dpi).round() as u32,
            (self.figure_size_in.1 * dpi).round() as u32,
        )
    }

    /// Scales a font size given in points (1/72 inch) to pixels
    pub fn font_px(&self, points: f64) -> u32 {
        (points * self.dpi as f64 / 72.0).round() as u32
    }
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            figure_size_in: (7.0, 4.0),
            dpi: 200,
            title: "Histogram of Errors (Actual - Expected)".to_string(),
            x_label: "Error".to_string(),
            y_label: "Frequency".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_figure_is_1400_by_800() {
        let config = HistogramConfig::default();
        assert_eq!(config.pixel_size(), (1400, 800));
        assert_eq!(config.output_path, PathBuf::from("error_histogram.png"));
    }

    #[test]
    fn with_output_path_keeps_other_defaults() {
        let config = HistogramConfig::with_output_path("/tmp/out.png");
        assert_eq!(config.output_path, PathBuf::from("/tmp/out.png"));
        assert_eq!(config.dpi, 200);
        assert_eq!(config.title, "Histogram of Errors (Actual - Expected)");
    }

    #[test]
    fn font_size_scales_with_dpi() {
        let config = HistogramConfig::default();
        assert_eq!(config.font_px(12.0), 33);
        assert_eq!(config.font_px(72.0), 200);
    }
}
