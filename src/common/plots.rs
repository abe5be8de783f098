//! Plotting infrastructure for the error histogram
//!
//! This module draws a bar-style histogram using the [`plotters`] crate and saves it as
//! a PNG file. Resolution is derived from [`HistogramConfig`] (1400x800 by default).

use crate::analysis::Histogram;
use crate::config::HistogramConfig;
use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during plot generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Failed to save plot to file: {0}")]
    FileSave(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

type Result<T> = core::result::Result<T, PlotError>;

/// Fraction of the data range left empty on each side of the x-axis
const X_MARGIN: f64 = 0.05;

/// Creates the error histogram and saves it as a PNG file
///
/// # Arguments
/// * `histogram` - Binned error values
/// * `config` - Output path, figure size, DPI and labels
///
/// # Returns
/// * `Ok(())` - If the chart was successfully created and saved
/// * `Err(PlotError)` - If an error occurred during chart generation
///
/// # Chart Properties
/// * Resolution: `figure_size_in * dpi` pixels
/// * Format: PNG, replacing any existing file
/// * Bars: filled, with black edges
/// * Font rendering: requires the `ttf` feature and a system sans-serif font
///
/// The chart is rendered into a temporary file next to `config.output_path` and only
/// moved into place once rendering succeeded. A failed render leaves any previous
/// chart untouched, and an unwritable directory is reported as [`PlotError::FileSave`].
pub fn create_error_histogram(histogram: &Histogram, config: &HistogramConfig) -> Result<()> {
    validate_histogram(histogram)?;

    let (width, height) = config.pixel_size();
    if width == 0 || height == 0 {
        return Err(PlotError::InvalidData(format!(
            "Figure resolution {}x{} must be non-zero",
            width, height
        )));
    }

    write_via_temp_file(&config.output_path, |temp_path| {
        render_histogram(histogram, config, temp_path, (width, height))
    })?;

    log::info!("Saved histogram to {}", config.output_path.display());
    Ok(())
}

/// Runs `render` against a temporary PNG path in the directory of `output_path`,
/// then atomically replaces `output_path` with the result
///
/// The temporary file is removed if `render` fails.
fn write_via_temp_file<F>(output_path: &Path, render: F) -> Result<()>
where
    F: FnOnce(&Path) -> Result<()>,
{
    let directory = match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // The bitmap encoder picks the image format from the extension
    let temp_file = tempfile::Builder::new()
        .prefix(".histogram-")
        .suffix(".png")
        .tempfile_in(directory)?;

    render(temp_file.path())?;

    temp_file
        .persist(output_path)
        .map_err(|e| PlotError::FileSave(e.error))?;
    Ok(())
}

/// Draws the histogram bars and axes into a PNG at `path`
fn render_histogram(
    histogram: &Histogram,
    config: &HistogramConfig,
    path: &Path,
    size: (u32, u32),
) -> Result<()> {
    let root = BitMapBackend::new(path, size);
    let drawing_area = root.into_drawing_area();

    drawing_area
        .fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let (x_min, x_max) = x_range(histogram);
    let y_max = (histogram.max_count() as f64 * 1.05).max(1.0);

    let mut chart_context = ChartBuilder::on(&drawing_area)
        .caption(&config.title, ("sans-serif", config.font_px(12.0)))
        .margin(config.font_px(6.0))
        .x_label_area_size(config.font_px(26.0))
        .y_label_area_size(config.font_px(30.0))
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    let mut mesh = chart_context.configure_mesh();
    mesh.disable_mesh()
        .x_desc(config.x_label.as_str())
        .y_desc(config.y_label.as_str())
        .axis_desc_style(("sans-serif", config.font_px(10.0)))
        .label_style(("sans-serif", config.font_px(9.0)))
        .x_label_formatter(&|x| format!("{:.2}", x))
        .y_label_formatter(&|y| format!("{:.0}", y));

    mesh.draw().map_err(|e| PlotError::Drawing(e.to_string()))?;

    // Bars, then their outlines on top
    chart_context
        .draw_series(histogram.iter_bins().map(|(left, right, count)| {
            Rectangle::new([(left, 0.0), (right, count as f64)], BLUE.mix(0.8).filled())
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart_context
        .draw_series(histogram.iter_bins().map(|(left, right, count)| {
            Rectangle::new([(left, 0.0), (right, count as f64)], BLACK.stroke_width(1))
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    // Ensure everything is properly rendered and saved
    drawing_area
        .present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

/// Checks that a histogram has at least one bin and consistent edges
fn validate_histogram(histogram: &Histogram) -> Result<()> {
    if histogram.counts.is_empty() {
        return Err(PlotError::InvalidData(
            "Histogram must have at least one bin".to_string(),
        ));
    }

    if histogram.bin_edges.len() != histogram.counts.len() + 1 {
        return Err(PlotError::InvalidData(format!(
            "Expected {} bin edges, found {}",
            histogram.counts.len() + 1,
            histogram.bin_edges.len()
        )));
    }

    if histogram.bin_edges.iter().any(|edge| !edge.is_finite()) {
        return Err(PlotError::InvalidData(
            "Bin edges must be finite".to_string(),
        ));
    }

    Ok(())
}

/// X-axis range covering all bins plus a small margin on either side
fn x_range(histogram: &Histogram) -> (f64, f64) {
    let first = histogram.bin_edges[0];
    let last = histogram.bin_edges[histogram.bin_edges.len() - 1];
    let span = (last - first).max(f64::EPSILON);
    (first - span * X_MARGIN, last + span * X_MARGIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn sample_histogram() -> Histogram {
        Histogram::auto(&[1.88, 2.97, 1.41, 1.67, 1.77, 1.57, 1.57, 1.54, 1.91, 1.70]).unwrap()
    }

    /// Whether the `ttf` backend can find a sans-serif font on this machine
    fn fonts_available() -> bool {
        let mut buffer = vec![0u8; 32 * 32 * 3];
        let area = BitMapBackend::with_buffer(&mut buffer, (32, 32)).into_drawing_area();
        let available = area
            .draw(&Text::new("0", (0, 0), ("sans-serif", 12).into_font()))
            .is_ok();
        drop(area);
        available
    }

    fn file_count(dir: &Path) -> usize {
        fs::read_dir(dir).unwrap().count()
    }

    #[test]
    fn test_unwritable_path_is_file_save_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output_path = temp_dir.path().join("missing").join("error_histogram.png");

        let config = HistogramConfig::with_output_path(&output_path);
        let result = create_error_histogram(&sample_histogram(), &config);

        assert!(matches!(result, Err(PlotError::FileSave(_))));
        assert!(!output_path.exists());
    }

    #[test]
    fn test_failed_render_keeps_previous_chart() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output_path = temp_dir.path().join("error_histogram.png");
        fs::write(&output_path, b"previous chart").unwrap();

        let result = write_via_temp_file(&output_path, |partial| {
            fs::write(partial, b"half drawn")?;
            Err(PlotError::Drawing("font unavailable".to_string()))
        });

        assert!(matches!(result, Err(PlotError::Drawing(_))));
        assert_eq!(fs::read(&output_path).unwrap(), b"previous chart");
        // Temporary file is cleaned up
        assert_eq!(file_count(temp_dir.path()), 1);
    }

    #[test]
    fn test_successful_render_replaces_chart() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output_path = temp_dir.path().join("error_histogram.png");
        fs::write(&output_path, b"stale").unwrap();

        write_via_temp_file(&output_path, |partial| {
            assert_eq!(partial.extension().unwrap(), "png");
            fs::write(partial, b"new chart")?;
            Ok(())
        })
        .unwrap();

        assert_eq!(fs::read(&output_path).unwrap(), b"new chart");
        assert_eq!(file_count(temp_dir.path()), 1);
    }

    #[test]
    fn test_create_error_histogram_validation() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = HistogramConfig::with_output_path(temp_dir.path().join("test.png"));

        // Test empty bins
        let empty = Histogram {
            bin_edges: vec![0.0],
            counts: vec![],
        };
        let result = create_error_histogram(&empty, &config);
        assert!(matches!(result, Err(PlotError::InvalidData(_))));

        // Test mismatched edges
        let mismatched = Histogram {
            bin_edges: vec![0.0, 1.0, 2.0],
            counts: vec![1],
        };
        let result = create_error_histogram(&mismatched, &config);
        assert!(matches!(result, Err(PlotError::InvalidData(_))));

        // Test zero-sized figure
        let mut tiny = config.clone();
        tiny.dpi = 0;
        let result = create_error_histogram(&sample_histogram(), &tiny);
        assert!(matches!(result, Err(PlotError::InvalidData(_))));

        // Nothing is written for invalid input
        assert_eq!(file_count(temp_dir.path()), 0);
    }

    #[test]
    fn test_x_range_adds_margin() {
        let histogram = Histogram {
            bin_edges: vec![0.0, 5.0, 10.0],
            counts: vec![1, 1],
        };
        assert_eq!(x_range(&histogram), (-0.5, 10.5));
    }

    #[test]
    fn test_rendering_twice_overwrites() {
        if !fonts_available() {
            eprintln!("skipping: no sans-serif font available for rendering");
            return;
        }

        let temp_dir = tempfile::tempdir().unwrap();
        let config = HistogramConfig::with_output_path(temp_dir.path().join("error_histogram.png"));
        fs::write(&config.output_path, b"stale").unwrap();

        create_error_histogram(&sample_histogram(), &config).unwrap();
        create_error_histogram(&sample_histogram(), &config).unwrap();

        let bytes = fs::read(&config.output_path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        assert_eq!(file_count(temp_dir.path()), 1);
    }
}
