//! Interactive terminal viewer for the waveform comparison.
//!
//! This module is only available with the `tui` feature. It replaces
//! the plot window of a desktop toolkit: an alternate-screen ratatui
//! app charting every case's vibration proxy, with the numeric summary
//! underneath. `q` or Esc closes it.

use std::fmt::Write as FmtWrite;
use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
};

use crate::error::{RotorError, RotorResult};
use crate::rotor::analysis::CaseResult;

const DATASET_COLORS: [Color; 4] = [Color::Cyan, Color::Magenta, Color::Yellow, Color::Green];

/// Pure viewer state, separated from the terminal for testability.
#[derive(Debug)]
pub struct ViewerState {
    /// One (name, points) series per case.
    series: Vec<(String, Vec<(f64, f64)>)>,
    /// Summary lines shown under the chart.
    summary: String,
    /// X axis bounds (s).
    x_bounds: [f64; 2],
    /// Y axis bounds (m).
    y_bounds: [f64; 2],
}

impl ViewerState {
    /// Build viewer state from analysis results.
    #[must_use]
    pub fn from_results(results: &[CaseResult], rpm: f64) -> Self {
        let series: Vec<(String, Vec<(f64, f64)>)> = results
            .iter()
            .map(|r| {
                (
                    r.name.clone(),
                    r.signal.iter().map(|p| (p.time, p.value)).collect(),
                )
            })
            .collect();

        let x_max = series
            .iter()
            .filter_map(|(_, pts)| pts.last().map(|p| p.0))
            .fold(0.0_f64, f64::max)
            .max(f64::MIN_POSITIVE);
        let mut y_max = series
            .iter()
            .flat_map(|(_, pts)| pts.iter())
            .map(|p| p.1.abs())
            .fold(0.0_f64, f64::max);
        if y_max <= 0.0 {
            y_max = 1.0;
        }
        y_max *= 1.1;

        let mut summary = format!("Speed: {rpm:.1} RPM\n");
        for result in results {
            let _ = write!(
                summary,
                "\n{}: mass {:.3} kg, COM offset {:.6} m, force {:.2} N",
                result.name, result.total_mass, result.radial_offset, result.centrifugal_force
            );
        }

        Self {
            series,
            summary,
            x_bounds: [0.0, x_max],
            y_bounds: [-y_max, y_max],
        }
    }

    /// Summary text for the lower panel.
    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Number of charted series.
    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// Y axis bounds.
    #[must_use]
    pub const fn y_bounds(&self) -> [f64; 2] {
        self.y_bounds
    }
}

/// Interactive waveform viewer.
pub struct VibrationTui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    state: ViewerState,
}

impl VibrationTui {
    /// Create and initialize the viewer.
    ///
    /// # Errors
    ///
    /// Returns error if terminal initialization fails.
    pub fn new(state: ViewerState) -> RotorResult<Self> {
        enable_raw_mode().map_err(|e| RotorError::io(format!("Failed to enable raw mode: {e}")))?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)
            .map_err(|e| RotorError::io(format!("Failed to enter alternate screen: {e}")))?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)
            .map_err(|e| RotorError::io(format!("Failed to create terminal: {e}")))?;

        Ok(Self { terminal, state })
    }

    /// Convenience entry point: build state, open the viewer, block
    /// until the user quits.
    ///
    /// # Errors
    ///
    /// Returns error on terminal or event failures.
    pub fn show(results: &[CaseResult], rpm: f64) -> RotorResult<()> {
        let mut viewer = Self::new(ViewerState::from_results(results, rpm))?;
        viewer.run()
    }

    /// Run the render/event loop until quit.
    ///
    /// # Errors
    ///
    /// Returns error on terminal or event failures.
    pub fn run(&mut self) -> RotorResult<()> {
        loop {
            self.render()?;
            if !Self::wait_for_continue()? {
                break;
            }
        }
        self.restore_terminal()
    }

    fn render(&mut self) -> RotorResult<()> {
        let state = &self.state;

        self.terminal
            .draw(|frame| {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
                    .split(frame.area());

                let datasets: Vec<Dataset> = state
                    .series
                    .iter()
                    .enumerate()
                    .map(|(i, (name, points))| {
                        Dataset::default()
                            .name(name.clone())
                            .marker(Marker::Braille)
                            .graph_type(GraphType::Line)
                            .style(Style::default().fg(DATASET_COLORS[i % DATASET_COLORS.len()]))
                            .data(points)
                    })
                    .collect();

                let x_axis = Axis::default()
                    .title("t (s)")
                    .style(Style::default().fg(Color::Gray))
                    .bounds(state.x_bounds)
                    .labels([
                        format!("{:.2}", state.x_bounds[0]),
                        format!("{:.2}", state.x_bounds[1] / 2.0),
                        format!("{:.2}", state.x_bounds[1]),
                    ]);
                let y_axis = Axis::default()
                    .title("displacement proxy (m)")
                    .style(Style::default().fg(Color::Gray))
                    .bounds(state.y_bounds)
                    .labels([
                        format!("{:.4}", state.y_bounds[0]),
                        "0".to_string(),
                        format!("{:.4}", state.y_bounds[1]),
                    ]);

                let chart = Chart::new(datasets)
                    .block(
                        Block::default()
                            .title(" Vibration Proxy Comparison ")
                            .borders(Borders::ALL)
                            .border_style(Style::default().fg(Color::Cyan)),
                    )
                    .x_axis(x_axis)
                    .y_axis(y_axis);
                frame.render_widget(chart, chunks[0]);

                let summary = Paragraph::new(format!("{}\n\n[Q] Quit", state.summary))
                    .block(
                        Block::default()
                            .title(" Summary ")
                            .borders(Borders::ALL)
                            .border_style(Style::default().fg(Color::Magenta)),
                    )
                    .style(Style::default().fg(Color::White));
                frame.render_widget(summary, chunks[1]);
            })
            .map_err(|e| RotorError::io(format!("Render failed: {e}")))?;

        Ok(())
    }

    /// Poll for input; returns `Ok(false)` when the viewer should close.
    fn wait_for_continue() -> RotorResult<bool> {
        if event::poll(Duration::from_millis(250))
            .map_err(|e| RotorError::io(format!("Event poll failed: {e}")))?
        {
            if let Event::Key(key) =
                event::read().map_err(|e| RotorError::io(format!("Event read failed: {e}")))?
            {
                if key.kind == KeyEventKind::Press
                    && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
                {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    /// Restore terminal state.
    fn restore_terminal(&mut self) -> RotorResult<()> {
        disable_raw_mode().map_err(|e| RotorError::io(format!("Failed to disable raw mode: {e}")))?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)
            .map_err(|e| RotorError::io(format!("Failed to leave alternate screen: {e}")))?;
        self.terminal
            .show_cursor()
            .map_err(|e| RotorError::io(format!("Failed to show cursor: {e}")))?;
        Ok(())
    }
}

impl Drop for VibrationTui {
    fn drop(&mut self) {
        // Best effort to restore terminal
        let _ = self.restore_terminal();
    }
}
