//! Imbalance analysis for rotor cases.
//!
//! # Governing equations
//!
//! ```text
//! COM:    r̄ = Σ mᵢ·pᵢ / Σ mᵢ
//! Force:  F = M·ω²·|r̄|
//! Proxy:  s(t) = |r̄|·sin(ω·t)
//! ```
//!
//! The COM radial offset doubles as the displacement proxy amplitude,
//! so a perfectly balanced rotor produces a flat signal and zero force
//! at any speed.

use serde::Serialize;

use crate::error::{RotorError, RotorResult};
use crate::rotor::{MassPoint, RotorCase, Vec2};
use crate::signal::{DataPoint, VibrationProxy};

/// Convert rotational speed in RPM to angular speed in rad/s.
#[must_use]
pub fn omega_from_rpm(rpm: f64) -> f64 {
    rpm * (2.0 * std::f64::consts::PI / 60.0)
}

/// Mass-weighted center of mass of a set of points.
///
/// Returns the COM position in the rotor plane and the total mass.
///
/// # Errors
///
/// Returns `InvalidParameter` if the point list is empty or the total
/// mass is not strictly positive (deserialized points can carry
/// arbitrary values, so this is checked even though the `MassPoint`
/// constructor rejects non-positive masses).
pub fn center_of_mass(points: &[MassPoint]) -> RotorResult<(Vec2, f64)> {
    if points.is_empty() {
        return Err(RotorError::invalid_parameter(
            "points",
            "at least one mass point is required",
        ));
    }

    let total_mass: f64 = points.iter().map(|p| p.mass).sum();
    if !total_mass.is_finite() || total_mass <= 0.0 {
        return Err(RotorError::invalid_parameter(
            "mass",
            format!("total mass must be > 0 kg, got {total_mass}"),
        ));
    }

    let moment = points
        .iter()
        .fold(Vec2::zero(), |acc, p| acc + p.moment());

    Ok((moment.scale(1.0 / total_mass), total_mass))
}

/// Centrifugal force magnitude: F = m·ω²·r.
#[must_use]
pub fn centrifugal_force(total_mass: f64, omega: f64, radial_offset: f64) -> f64 {
    total_mass * omega * omega * radial_offset
}

/// Computed outputs for one rotor configuration.
#[derive(Debug, Clone, Serialize)]
pub struct CaseResult {
    /// Case name.
    pub name: String,
    /// Total mass (kg).
    pub total_mass: f64,
    /// Center of mass in the rotor plane (m).
    pub center_of_mass: Vec2,
    /// Radial COM offset from the spin axis (m).
    pub radial_offset: f64,
    /// Centrifugal force at the analysis speed (N).
    pub centrifugal_force: f64,
    /// Sampled vibration proxy signal.
    pub signal: Vec<DataPoint>,
}

/// Run the full analysis pipeline for one case.
///
/// # Errors
///
/// Returns `InvalidParameter` for an empty case, non-positive total
/// mass, non-positive duration, or fewer than 2 samples.
pub fn analyze_case(
    case: &RotorCase,
    omega: f64,
    duration: f64,
    samples: usize,
) -> RotorResult<CaseResult> {
    let (com, total_mass) = center_of_mass(case.points())?;
    let radial_offset = com.magnitude();
    let force = centrifugal_force(total_mass, omega, radial_offset);
    let signal: Vec<DataPoint> =
        VibrationProxy::new(radial_offset, omega, duration, samples)?.collect();

    Ok(CaseResult {
        name: case.name().to_string(),
        total_mass,
        center_of_mass: com,
        radial_offset,
        centrifugal_force: force,
        signal,
    })
}
