//! CLI output formatting.

use crate::rotor::analysis::CaseResult;

/// Print version information.
pub fn print_version() {
    println!("rotorvib {}", env!("CARGO_PKG_VERSION"));
}

/// Print help message.
pub fn print_help() {
    println!(
        r"rotorvib - rotor mass-imbalance vibration estimator

Compares how rotor mass balance affects COM offset, centrifugal force,
and a sinusoidal vibration proxy.

USAGE:
    rotorvib [OPTIONS]

OPTIONS:
    --rpm <N>           Rotational speed in RPM, > 0 (default: 600)
    --duration <N>      Simulation duration in seconds, > 0 (default: 2)
    --samples <N>       Number of time samples, >= 2 (default: 1000)
    --save-plot <PATH>  Output path for the comparison PNG
                        (default: axis_comparison.png; '' skips it)
    --no-show           Skip the interactive terminal viewer
    --scenario <PATH>   Load rotor cases from a scenario YAML file
                        instead of the built-in comparison
    --export <PATH>     Export sampled signals as .csv or .jsonl

    -h, --help          Show this help message
    -V, --version       Show version information

EXAMPLES:
    rotorvib --rpm 1200 --duration 1.0 --no-show
    rotorvib --scenario rotor.yaml --export signals.csv
    rotorvib --save-plot '' --no-show
"
    );
}

/// Print per-case metrics for all analyzed cases.
pub fn print_summary(results: &[CaseResult], rpm: f64) {
    println!("Simulation speed: {rpm:.1} RPM\n");
    for result in results {
        println!("{}:", result.name);
        println!("  Total mass: {:.3} kg", result.total_mass);
        println!(
            "  Center of mass: ({:.4}, {:.4}) m",
            result.center_of_mass.x, result.center_of_mass.y
        );
        println!("  Radial COM offset: {:.6} m", result.radial_offset);
        println!("  Centrifugal force: {:.2} N", result.centrifugal_force);
        println!();
    }
}
