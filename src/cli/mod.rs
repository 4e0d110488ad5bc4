//! CLI module for rotorvib.
//!
//! All CLI logic lives here rather than in main.rs so argument parsing
//! and command behavior are fully testable. The entry point `run_cli`
//! is called from main.rs with parsed arguments.

mod args;
mod commands;
mod output;

pub use args::{Args, Command, RunOptions};
pub use commands::run_cli;
pub use output::{print_help, print_summary, print_version};
