//! CLI argument parsing.
//!
//! Hand-rolled flag parser over an argument iterator so parsing can be
//! tested without touching the process environment. Unlike a lenient
//! parser, malformed values and unknown flags are hard errors: the
//! contract is exit code 0 on success, non-zero with a message on any
//! invalid argument.

use std::path::PathBuf;

use crate::error::{RotorError, RotorResult};

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    /// The command to execute.
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Run the imbalance comparison (the default command).
    Run(RunOptions),
    /// Show help.
    Help,
    /// Show version.
    Version,
}

/// Options for the comparison run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunOptions {
    /// Rotational speed override (RPM).
    pub rpm: Option<f64>,
    /// Duration override (s).
    pub duration: Option<f64>,
    /// Sample count override.
    pub samples: Option<usize>,
    /// Plot output path; `None` means the default path, an empty
    /// string skips the plot entirely.
    pub save_plot: Option<String>,
    /// Skip the interactive viewer.
    pub no_show: bool,
    /// Scenario YAML file replacing the built-in rotor cases.
    pub scenario: Option<PathBuf>,
    /// Signal export path (.csv or .jsonl).
    pub export: Option<PathBuf>,
}

impl Args {
    /// Parse command-line arguments from an iterator.
    ///
    /// The first item is treated as the program name and skipped.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for unknown flags, missing values,
    /// and unparsable numbers.
    pub fn try_parse_from<I, S>(args: I) -> RotorResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::try_parse_vec(&args)
    }

    /// Parse command-line arguments from the environment.
    ///
    /// # Errors
    ///
    /// Same contract as [`Args::try_parse_from`].
    pub fn try_parse() -> RotorResult<Self> {
        Self::try_parse_from(std::env::args())
    }

    fn try_parse_vec(args: &[String]) -> RotorResult<Self> {
        let mut opts = RunOptions::default();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "-h" | "--help" | "help" => {
                    return Ok(Self {
                        command: Command::Help,
                    })
                }
                "-V" | "--version" | "version" => {
                    return Ok(Self {
                        command: Command::Version,
                    })
                }
                "--rpm" => {
                    opts.rpm = Some(parse_f64("--rpm", take_value(args, &mut i)?)?);
                }
                "--duration" => {
                    opts.duration = Some(parse_f64("--duration", take_value(args, &mut i)?)?);
                }
                "--samples" => {
                    let raw = take_value(args, &mut i)?;
                    opts.samples = Some(raw.parse().map_err(|_| {
                        RotorError::invalid_parameter(
                            "--samples",
                            format!("expected a non-negative integer, got '{raw}'"),
                        )
                    })?);
                }
                "--save-plot" => {
                    opts.save_plot = Some(take_value(args, &mut i)?.to_string());
                }
                "--no-show" => {
                    opts.no_show = true;
                    i += 1;
                }
                "--scenario" => {
                    opts.scenario = Some(PathBuf::from(take_value(args, &mut i)?));
                }
                "--export" => {
                    opts.export = Some(PathBuf::from(take_value(args, &mut i)?));
                }
                unknown => {
                    return Err(RotorError::invalid_parameter(
                        unknown,
                        "unknown flag, see --help for usage",
                    ));
                }
            }
        }

        Ok(Self {
            command: Command::Run(opts),
        })
    }
}

/// Consume a flag's value, advancing past both the flag and the value.
fn take_value<'a>(args: &'a [String], i: &mut usize) -> RotorResult<&'a str> {
    let flag = &args[*i];
    if *i + 1 >= args.len() {
        return Err(RotorError::invalid_parameter(
            flag.clone(),
            "expected a value after this flag",
        ));
    }
    *i += 2;
    Ok(&args[*i - 1])
}

fn parse_f64(flag: &str, raw: &str) -> RotorResult<f64> {
    raw.parse().map_err(|_| {
        RotorError::invalid_parameter(flag, format!("expected a number, got '{raw}'"))
    })
}
