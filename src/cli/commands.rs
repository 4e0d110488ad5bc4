//! CLI command handlers.

use std::path::Path;
use std::process::ExitCode;

use crate::config::{
    default_cases, validate_run_parameters, ScenarioConfig, DEFAULT_DURATION, DEFAULT_PLOT_PATH,
    DEFAULT_RPM, DEFAULT_SAMPLES,
};
use crate::error::RotorResult;
use crate::rotor::analysis::{analyze_case, omega_from_rpm, CaseResult};
use crate::visualization::{export_signals, render_comparison_png, PlotStyle};

use super::output::{print_help, print_summary, print_version};
use super::{Args, Command, RunOptions};

/// Main CLI entry point: dispatch to the command handler.
#[must_use]
pub fn run_cli(args: &Args) -> ExitCode {
    match &args.command {
        Command::Run(opts) => match run_comparison(opts) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::from(1)
            }
        },
        Command::Help => {
            print_help();
            ExitCode::SUCCESS
        }
        Command::Version => {
            print_version();
            ExitCode::SUCCESS
        }
    }
}

/// Run the comparison pipeline: resolve parameters, analyze every
/// case, print the summary, then emit the requested outputs.
pub(crate) fn run_comparison(opts: &RunOptions) -> RotorResult<()> {
    let (rpm, duration, samples, cases) = resolve_run(opts)?;
    validate_run_parameters(rpm, duration, samples)?;

    let omega = omega_from_rpm(rpm);
    let results: Vec<CaseResult> = cases
        .iter()
        .map(|case| analyze_case(case, omega, duration, samples))
        .collect::<RotorResult<_>>()?;

    print_summary(&results, rpm);

    let plot_path = opts
        .save_plot
        .clone()
        .unwrap_or_else(|| DEFAULT_PLOT_PATH.to_string());
    if !plot_path.is_empty() {
        render_comparison_png(&results, Path::new(&plot_path), &PlotStyle::default())?;
        println!("Saved plot: {plot_path}");
    }

    if let Some(path) = &opts.export {
        export_signals(&results, path)?;
        println!("Exported signals: {}", path.display());
    }

    if !opts.no_show {
        show_viewer(&results, rpm)?;
    }

    Ok(())
}

/// Resolve run parameters: scenario file values when given, built-in
/// defaults otherwise, explicit CLI flags override either.
fn resolve_run(
    opts: &RunOptions,
) -> RotorResult<(f64, f64, usize, Vec<crate::rotor::RotorCase>)> {
    let (mut rpm, mut duration, mut samples, cases) = match &opts.scenario {
        Some(path) => {
            let config = ScenarioConfig::load(path)?;
            let cases = config.rotor_cases()?;
            (config.rpm, config.duration, config.samples, cases)
        }
        None => {
            let (unbalanced, balanced) = default_cases()?;
            (
                DEFAULT_RPM,
                DEFAULT_DURATION,
                DEFAULT_SAMPLES,
                vec![unbalanced, balanced],
            )
        }
    };

    if let Some(v) = opts.rpm {
        rpm = v;
    }
    if let Some(v) = opts.duration {
        duration = v;
    }
    if let Some(v) = opts.samples {
        samples = v;
    }

    Ok((rpm, duration, samples, cases))
}

#[cfg(feature = "tui")]
fn show_viewer(results: &[CaseResult], rpm: f64) -> RotorResult<()> {
    crate::visualization::VibrationTui::show(results, rpm)
}

#[cfg(not(feature = "tui"))]
fn show_viewer(_results: &[CaseResult], _rpm: f64) -> RotorResult<()> {
    println!("Interactive viewer unavailable: rebuild with the `tui` feature or pass --no-show.");
    Ok(())
}
