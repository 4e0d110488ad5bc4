//! rotorvib CLI entry point.

use std::process::ExitCode;

use rotorvib::cli::{run_cli, Args};

fn main() -> ExitCode {
    match Args::try_parse() {
        Ok(args) => run_cli(&args),
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Run `rotorvib --help` for usage.");
            ExitCode::from(2)
        }
    }
}
