//! File output tests: CSV / JSON Lines export and the PNG plot.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use rotorvib::config::default_cases;
use rotorvib::prelude::*;
use rotorvib::visualization::{export_signals, render_comparison_png, PlotStyle};

fn comparison_results(samples: usize) -> Vec<CaseResult> {
    let (unbalanced, balanced) = default_cases().unwrap();
    let omega = omega_from_rpm(600.0);
    vec![
        analyze_case(&unbalanced, omega, 2.0, samples).unwrap(),
        analyze_case(&balanced, omega, 2.0, samples).unwrap(),
    ]
}

#[test]
fn csv_export_has_header_and_one_row_per_sample() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("signals.csv");
    let results = comparison_results(50);

    export_signals(&results, &path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 51);
    assert_eq!(lines[0], "time,Unbalanced,Balanced");
    // Every row carries one value per case.
    for line in &lines[1..] {
        assert_eq!(line.split(',').count(), 3);
    }
    // First sample is t=0 with zero proxy values.
    let first: Vec<f64> = lines[1].split(',').map(|v| v.parse().unwrap()).collect();
    assert!(first[0].abs() < f64::EPSILON);
    assert!(first[1].abs() < f64::EPSILON);
}

#[test]
fn jsonl_export_is_parsable_and_named_by_case() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("signals.jsonl");
    let results = comparison_results(20);

    export_signals(&results, &path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 20);

    let frame: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert!(frame.get("time").is_some());
    assert!(frame.get("Unbalanced").is_some());
    assert!(frame.get("Balanced").is_some());
    assert!((frame["time"].as_f64().unwrap()).abs() < f64::EPSILON);
}

#[test]
fn export_rejects_unknown_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("signals.xml");
    let results = comparison_results(10);
    assert!(export_signals(&results, &path).is_err());
}

#[test]
fn png_plot_is_written_with_one_panel_per_case() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("comparison.png");
    let results = comparison_results(200);
    let style = PlotStyle::default();

    render_comparison_png(&results, &path, &style).unwrap();

    let (width, height) = image::image_dimensions(&path).unwrap();
    assert_eq!(width, style.panel_width * 2);
    assert_eq!(height, style.panel_height);
}

#[test]
fn png_plot_handles_flat_balanced_signal() {
    // A perfectly balanced rotor has a flat zero signal; the y scale
    // must fall back to a finite range instead of dividing by zero.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flat.png");
    let case = RotorCase::new(
        "flat",
        vec![
            MassPoint::new(1.0, 0.1, 0.0).unwrap(),
            MassPoint::new(1.0, 0.1, std::f64::consts::PI).unwrap(),
        ],
    );
    let result = analyze_case(&case, omega_from_rpm(600.0), 1.0, 50).unwrap();

    render_comparison_png(&[result], &path, &PlotStyle::default()).unwrap();
    assert!(path.exists());
}
