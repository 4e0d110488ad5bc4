//! Scenario configuration with YAML schema and validation.
//!
//! Mistake-proofing happens in three layers:
//! - Type-safe structs parsed by serde (`deny_unknown_fields`)
//! - Declarative schema validation via the validator derive
//! - Semantic validation of the physics invariants

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::error::{RotorError, RotorResult};
use crate::rotor::{MassPoint, RotorCase};

/// Default rotational speed (RPM).
pub const DEFAULT_RPM: f64 = 600.0;
/// Default simulation duration (s).
pub const DEFAULT_DURATION: f64 = 2.0;
/// Default number of time samples.
pub const DEFAULT_SAMPLES: usize = 1000;
/// Default comparison plot output path.
pub const DEFAULT_PLOT_PATH: &str = "axis_comparison.png";

/// Top-level scenario configuration, loaded from YAML.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Rotational speed (RPM, > 0).
    #[serde(default = "default_rpm")]
    pub rpm: f64,

    /// Simulation duration (s, > 0).
    #[serde(default = "default_duration")]
    pub duration: f64,

    /// Number of time samples (>= 2).
    #[serde(default = "default_samples")]
    pub samples: usize,

    /// Rotor cases to analyze and compare.
    #[validate(length(min = 1), nested)]
    pub cases: Vec<CaseConfig>,
}

/// One named rotor configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CaseConfig {
    /// Case name for reports and plot panels.
    #[validate(length(min = 1))]
    pub name: String,

    /// Mass points in polar coordinates.
    #[validate(length(min = 1))]
    pub points: Vec<PointConfig>,

    /// Derive an additional balanced variant of this case via
    /// counterweight placement.
    #[serde(default)]
    pub derive_balanced: bool,
}

/// One mass point entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PointConfig {
    /// Mass (kg, > 0).
    pub mass: f64,
    /// Radial distance from the spin axis (m, >= 0).
    pub radius: f64,
    /// Angular position (radians).
    #[serde(default)]
    pub angle: f64,
}

fn default_rpm() -> f64 {
    DEFAULT_RPM
}

fn default_duration() -> f64 {
    DEFAULT_DURATION
}

fn default_samples() -> usize {
    DEFAULT_SAMPLES
}

impl ScenarioConfig {
    /// Load a scenario configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, YAML parsing fails,
    /// or validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> RotorResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a scenario configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> RotorResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        config.validate_semantic()?;
        Ok(config)
    }

    /// Validate the physics invariants beyond the schema.
    fn validate_semantic(&self) -> RotorResult<()> {
        validate_run_parameters(self.rpm, self.duration, self.samples)?;
        for case in &self.cases {
            for point in &case.points {
                MassPoint::new(point.mass, point.radius, point.angle).map_err(|e| {
                    RotorError::config(format!("case '{}': {e}", case.name))
                })?;
            }
        }
        Ok(())
    }

    /// Build the rotor cases described by this scenario, including any
    /// derived balanced variants.
    ///
    /// # Errors
    ///
    /// Returns error if a point violates the model invariants or a
    /// balanced variant cannot be derived.
    pub fn rotor_cases(&self) -> RotorResult<Vec<RotorCase>> {
        let mut cases = Vec::with_capacity(self.cases.len());
        for case_config in &self.cases {
            let points = case_config
                .points
                .iter()
                .map(|p| MassPoint::new(p.mass, p.radius, p.angle))
                .collect::<RotorResult<Vec<MassPoint>>>()?;
            let case = RotorCase::new(case_config.name.clone(), points);
            if case_config.derive_balanced {
                let balanced = case.balanced(format!("{} (balanced)", case_config.name))?;
                cases.push(case);
                cases.push(balanced);
            } else {
                cases.push(case);
            }
        }
        Ok(cases)
    }
}

/// Validate the run parameters shared by the CLI and scenario files.
///
/// # Errors
///
/// Returns `InvalidParameter` naming the first offending parameter.
pub fn validate_run_parameters(rpm: f64, duration: f64, samples: usize) -> RotorResult<()> {
    if !rpm.is_finite() || rpm <= 0.0 {
        return Err(RotorError::invalid_parameter(
            "rpm",
            format!("must be > 0, got {rpm}"),
        ));
    }
    if !duration.is_finite() || duration <= 0.0 {
        return Err(RotorError::invalid_parameter(
            "duration",
            format!("must be > 0 seconds, got {duration}"),
        ));
    }
    if samples < 2 {
        return Err(RotorError::invalid_parameter(
            "samples",
            format!("must be >= 2, got {samples}"),
        ));
    }
    Ok(())
}

/// Built-in baseline scenario: an unbalanced three-component rotor and
/// its counterweight-balanced variant.
///
/// # Errors
///
/// Never fails in practice; the signature matches the fallible
/// constructors it delegates to.
pub fn default_cases() -> RotorResult<(RotorCase, RotorCase)> {
    let unbalanced = RotorCase::new(
        "Unbalanced",
        vec![
            MassPoint::from_xy(2.0, 1.0, 2.0)?,
            MassPoint::from_xy(1.5, -1.0, -2.0)?,
            MassPoint::from_xy(2.5, 2.0, 1.0)?,
        ],
    );
    let balanced = unbalanced.balanced("Balanced")?;
    Ok((unbalanced, balanced))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::rotor::analysis::center_of_mass;

    const VALID_YAML: &str = r"
rpm: 1200.0
duration: 1.0
samples: 500
cases:
  - name: test rotor
    points:
      - mass: 2.0
        radius: 0.5
        angle: 0.0
      - mass: 1.0
        radius: 0.25
        angle: 3.14159
";

    #[test]
    fn test_from_yaml_valid() {
        let config = ScenarioConfig::from_yaml(VALID_YAML).unwrap();
        assert!((config.rpm - 1200.0).abs() < f64::EPSILON);
        assert_eq!(config.samples, 500);
        assert_eq!(config.cases.len(), 1);
        assert_eq!(config.cases[0].points.len(), 2);
    }

    #[test]
    fn test_from_yaml_defaults() {
        let config = ScenarioConfig::from_yaml(
            r"
cases:
  - name: minimal
    points:
      - mass: 1.0
        radius: 0.1
",
        )
        .unwrap();
        assert!((config.rpm - DEFAULT_RPM).abs() < f64::EPSILON);
        assert!((config.duration - DEFAULT_DURATION).abs() < f64::EPSILON);
        assert_eq!(config.samples, DEFAULT_SAMPLES);
        // Angle defaults to 0.
        assert!(config.cases[0].points[0].angle.abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_yaml_rejects_unknown_fields() {
        let result = ScenarioConfig::from_yaml(
            r"
rpm: 600.0
shaft_stiffness: 1e9
cases:
  - name: a
    points:
      - mass: 1.0
        radius: 0.1
",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_from_yaml_rejects_empty_cases() {
        let result = ScenarioConfig::from_yaml("cases: []");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_yaml_rejects_bad_rpm() {
        let result = ScenarioConfig::from_yaml(
            r"
rpm: -600.0
cases:
  - name: a
    points:
      - mass: 1.0
        radius: 0.1
",
        );
        assert!(matches!(
            result,
            Err(RotorError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_from_yaml_rejects_non_positive_mass() {
        let result = ScenarioConfig::from_yaml(
            r"
cases:
  - name: a
    points:
      - mass: 0.0
        radius: 0.1
",
        );
        assert!(matches!(result, Err(RotorError::Config { .. })));
    }

    #[test]
    fn test_rotor_cases_with_derived_balance() {
        let config = ScenarioConfig::from_yaml(
            r"
cases:
  - name: lopsided
    derive_balanced: true
    points:
      - mass: 2.0
        radius: 0.5
        angle: 0.0
",
        )
        .unwrap();
        let cases = config.rotor_cases().unwrap();
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[1].name(), "lopsided (balanced)");
        let (com, _) = center_of_mass(cases[1].points()).unwrap();
        assert!(com.magnitude() < 1e-12);
    }

    #[test]
    fn test_validate_run_parameters() {
        assert!(validate_run_parameters(600.0, 2.0, 1000).is_ok());
        assert!(validate_run_parameters(0.0, 2.0, 1000).is_err());
        assert!(validate_run_parameters(600.0, -1.0, 1000).is_err());
        assert!(validate_run_parameters(600.0, 2.0, 1).is_err());
        assert!(validate_run_parameters(f64::NAN, 2.0, 1000).is_err());
    }

    #[test]
    fn test_default_cases_balanced_has_zero_offset() {
        let (unbalanced, balanced) = default_cases().unwrap();
        let (com_u, total_u) = center_of_mass(unbalanced.points()).unwrap();
        let (com_b, _) = center_of_mass(balanced.points()).unwrap();
        assert!((total_u - 6.0).abs() < 1e-12);
        assert!(com_u.magnitude() > 1.0);
        assert!(com_b.magnitude() < 1e-12);
    }
}
