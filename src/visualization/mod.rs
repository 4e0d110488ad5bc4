//! Output surfaces: signal export and the PNG comparison plot.
//!
//! Exports assume all cases were sampled on the same time grid, which
//! `analyze_case` guarantees when driven from one run.

use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::{BufWriter, Write as IoWrite};
use std::path::Path;

use image::{Rgb, RgbImage};
use serde::Serialize;

use crate::error::{RotorError, RotorResult};
use crate::rotor::analysis::CaseResult;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(feature = "tui")]
pub use tui::VibrationTui;

// ============================================================================
// Signal export
// ============================================================================

/// Export format for sampled signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// CSV with one column per case.
    Csv,
    /// JSON Lines, one frame per time sample.
    JsonLines,
}

impl ExportFormat {
    /// Pick a format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for unsupported extensions.
    pub fn from_path(path: &Path) -> RotorResult<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("csv") => Ok(Self::Csv),
            Some("jsonl" | "ndjson") => Ok(Self::JsonLines),
            other => Err(RotorError::invalid_parameter(
                "export",
                format!(
                    "unsupported export extension {:?}, expected .csv or .jsonl",
                    other.unwrap_or("")
                ),
            )),
        }
    }
}

/// One exported frame: a timestamp plus every case's proxy value.
#[derive(Debug, Serialize)]
struct SignalFrame<'a> {
    time: f64,
    #[serde(flatten)]
    values: std::collections::BTreeMap<&'a str, f64>,
}

/// Write the sampled signals of all cases to `path`, format chosen by
/// extension.
///
/// # Errors
///
/// Returns error on unsupported extension, signal length mismatch, or
/// file I/O failure.
pub fn export_signals(results: &[CaseResult], path: &Path) -> RotorResult<()> {
    if results.is_empty() {
        return Err(RotorError::invalid_parameter(
            "results",
            "nothing to export",
        ));
    }
    let samples = results[0].signal.len();
    if results.iter().any(|r| r.signal.len() != samples) {
        return Err(RotorError::serialization(
            "cases were sampled on different time grids",
        ));
    }

    match ExportFormat::from_path(path)? {
        ExportFormat::Csv => to_csv(results, samples, path),
        ExportFormat::JsonLines => to_json_lines(results, samples, path),
    }
}

fn to_csv(results: &[CaseResult], samples: usize, path: &Path) -> RotorResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let mut header = String::from("time");
    for result in results {
        let _ = write!(header, ",{}", result.name);
    }
    writeln!(writer, "{header}")?;

    for i in 0..samples {
        let mut line = format!("{}", results[0].signal[i].time);
        for result in results {
            let _ = write!(line, ",{}", result.signal[i].value);
        }
        writeln!(writer, "{line}")?;
    }

    writer.flush()?;
    Ok(())
}

fn to_json_lines(results: &[CaseResult], samples: usize, path: &Path) -> RotorResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for i in 0..samples {
        let frame = SignalFrame {
            time: results[0].signal[i].time,
            values: results
                .iter()
                .map(|r| (r.name.as_str(), r.signal[i].value))
                .collect(),
        };
        let json = serde_json::to_string(&frame)
            .map_err(|e| RotorError::serialization(format!("JSON serialization failed: {e}")))?;
        writeln!(writer, "{json}")?;
    }

    writer.flush()?;
    Ok(())
}

// ============================================================================
// PNG comparison plot
// ============================================================================

const COLOR_BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const COLOR_GRID: Rgb<u8> = Rgb([225, 225, 225]);
const COLOR_AXIS: Rgb<u8> = Rgb([120, 120, 120]);
const COLOR_FRAME: Rgb<u8> = Rgb([80, 80, 80]);
const COLOR_SIGNAL: Rgb<u8> = Rgb([31, 119, 180]);

/// Plot geometry.
#[derive(Debug, Clone)]
pub struct PlotStyle {
    /// Width of each case panel (px).
    pub panel_width: u32,
    /// Panel height (px).
    pub panel_height: u32,
    /// Margin around each panel's plot area (px).
    pub margin: u32,
    /// Number of grid divisions per axis.
    pub grid_divisions: u32,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            panel_width: 900,
            panel_height: 750,
            margin: 40,
            grid_divisions: 10,
        }
    }
}

/// Render a side-by-side waveform comparison, one panel per case, all
/// panels sharing the same y scale, and save it as PNG.
///
/// # Errors
///
/// Returns error if there are no results, a signal is empty, or the
/// image cannot be written.
pub fn render_comparison_png(
    results: &[CaseResult],
    path: &Path,
    style: &PlotStyle,
) -> RotorResult<()> {
    if results.is_empty() {
        return Err(RotorError::invalid_parameter("results", "nothing to plot"));
    }
    if results.iter().any(|r| r.signal.is_empty()) {
        return Err(RotorError::render("cannot plot an empty signal"));
    }

    let width = style.panel_width * results.len() as u32;
    let height = style.panel_height;
    let mut img = RgbImage::from_pixel(width, height, COLOR_BACKGROUND);

    // Shared y scale across panels, padded 10%.
    let mut y_max = results
        .iter()
        .flat_map(|r| r.signal.iter())
        .map(|p| p.value.abs())
        .fold(0.0_f64, f64::max);
    if y_max <= 0.0 {
        y_max = 1.0;
    }
    y_max *= 1.1;

    for (panel, result) in results.iter().enumerate() {
        draw_panel(&mut img, style, panel as u32, result, y_max);
    }

    img.save(path)
        .map_err(|e| RotorError::render(format!("failed to write plot {}: {e}", path.display())))?;
    Ok(())
}

fn draw_panel(img: &mut RgbImage, style: &PlotStyle, panel: u32, result: &CaseResult, y_max: f64) {
    let x0 = panel * style.panel_width + style.margin;
    let y0 = style.margin;
    let plot_w = style.panel_width - 2 * style.margin;
    let plot_h = style.panel_height - 2 * style.margin;

    // Gridlines.
    for div in 1..style.grid_divisions {
        let gx = x0 + div * plot_w / style.grid_divisions;
        let gy = y0 + div * plot_h / style.grid_divisions;
        draw_line(img, gx as f64, y0.into(), gx as f64, (y0 + plot_h).into(), COLOR_GRID);
        draw_line(img, x0.into(), gy as f64, (x0 + plot_w).into(), gy as f64, COLOR_GRID);
    }

    // Zero axis.
    let zero_y = f64::from(y0) + f64::from(plot_h) / 2.0;
    draw_line(img, x0.into(), zero_y, (x0 + plot_w).into(), zero_y, COLOR_AXIS);

    // Panel frame.
    let (left, right) = (f64::from(x0), f64::from(x0 + plot_w));
    let (top, bottom) = (f64::from(y0), f64::from(y0 + plot_h));
    draw_line(img, left, top, right, top, COLOR_FRAME);
    draw_line(img, left, bottom, right, bottom, COLOR_FRAME);
    draw_line(img, left, top, left, bottom, COLOR_FRAME);
    draw_line(img, right, top, right, bottom, COLOR_FRAME);

    // Waveform polyline.
    let t_max = result.signal.last().map_or(1.0, |p| p.time).max(f64::MIN_POSITIVE);
    let to_px = |p: &crate::signal::DataPoint| {
        let px = left + p.time / t_max * f64::from(plot_w);
        let py = zero_y - p.value / y_max * f64::from(plot_h) / 2.0;
        (px, py)
    };
    for window in result.signal.windows(2) {
        let (ax, ay) = to_px(&window[0]);
        let (bx, by) = to_px(&window[1]);
        draw_line(img, ax, ay, bx, by, COLOR_SIGNAL);
    }
}

/// Draw a line segment by stepping the longer axis one pixel at a time.
fn draw_line(img: &mut RgbImage, x0: f64, y0: f64, x1: f64, y1: f64, color: Rgb<u8>) {
    let dx = x1 - x0;
    let dy = y1 - y0;
    let steps = dx.abs().max(dy.abs()).ceil().max(1.0);
    let n = steps as u32;
    for i in 0..=n {
        let t = f64::from(i) / steps;
        let x = (x0 + t * dx).round();
        let y = (y0 + t * dy).round();
        if x >= 0.0 && y >= 0.0 && (x as u32) < img.width() && (y as u32) < img.height() {
            img.put_pixel(x as u32, y as u32, color);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::rotor::Vec2;
    use crate::signal::DataPoint;

    fn sample_result(name: &str, amplitude: f64) -> CaseResult {
        let signal = (0..10)
            .map(|i| DataPoint {
                time: f64::from(i) * 0.1,
                value: amplitude * (f64::from(i) * 0.7).sin(),
            })
            .collect();
        CaseResult {
            name: name.to_string(),
            total_mass: 1.0,
            center_of_mass: Vec2::new(amplitude, 0.0),
            radial_offset: amplitude,
            centrifugal_force: amplitude * 100.0,
            signal,
        }
    }

    #[test]
    fn test_export_format_from_path() {
        assert_eq!(
            ExportFormat::from_path(Path::new("out.csv")).unwrap(),
            ExportFormat::Csv
        );
        assert_eq!(
            ExportFormat::from_path(Path::new("out.jsonl")).unwrap(),
            ExportFormat::JsonLines
        );
        assert_eq!(
            ExportFormat::from_path(Path::new("out.ndjson")).unwrap(),
            ExportFormat::JsonLines
        );
        assert!(ExportFormat::from_path(Path::new("out.parquet")).is_err());
        assert!(ExportFormat::from_path(Path::new("out")).is_err());
    }

    #[test]
    fn test_export_rejects_empty_results() {
        assert!(export_signals(&[], Path::new("out.csv")).is_err());
    }

    #[test]
    fn test_export_rejects_mismatched_grids() {
        let a = sample_result("a", 1.0);
        let mut b = sample_result("b", 0.5);
        b.signal.pop();
        let err = export_signals(&[a, b], Path::new("out.csv"));
        assert!(matches!(err, Err(RotorError::Serialization(_))));
    }

    #[test]
    fn test_plot_rejects_empty_input() {
        let style = PlotStyle::default();
        assert!(render_comparison_png(&[], Path::new("out.png"), &style).is_err());
    }

    #[test]
    fn test_plot_style_default_geometry() {
        let style = PlotStyle::default();
        assert!(style.panel_width > 2 * style.margin);
        assert!(style.panel_height > 2 * style.margin);
        assert!(style.grid_divisions >= 2);
    }
}
