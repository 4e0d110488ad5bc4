//! Rotor assembly model.
//!
//! A rotor is modeled as a rigid set of point masses fixed at polar
//! positions around the spin axis. Everything in this module is
//! closed-form geometry; shaft flexibility, damping, and bearing
//! dynamics are out of scope.

use serde::{Deserialize, Serialize};

use crate::error::{RotorError, RotorResult};

pub mod analysis;

/// COM radial offsets below this are treated as already balanced (m).
pub const BALANCE_TOLERANCE: f64 = 1e-12;

/// 2D vector in the rotor plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
}

impl Vec2 {
    /// Create a new vector.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Zero vector.
    #[must_use]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Magnitude squared.
    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Magnitude (length).
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Scale by scalar.
    #[must_use]
    pub fn scale(&self, s: f64) -> Self {
        Self {
            x: self.x * s,
            y: self.y * s,
        }
    }

    /// Check if both components are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl std::ops::Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl std::ops::Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

/// A point mass rigidly fixed to the rotor at a polar position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MassPoint {
    /// Mass (kg, > 0).
    pub mass: f64,
    /// Radial distance from the spin axis (m, >= 0).
    pub radius: f64,
    /// Angular position (radians).
    pub angle: f64,
}

impl MassPoint {
    /// Create a new mass point.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the mass is not strictly positive,
    /// the radius is negative, or any field is non-finite.
    pub fn new(mass: f64, radius: f64, angle: f64) -> RotorResult<Self> {
        let point = Self {
            mass,
            radius,
            angle,
        };
        point.check()?;
        Ok(point)
    }

    /// Create a mass point from Cartesian coordinates in the rotor plane.
    ///
    /// # Errors
    ///
    /// Same invariants as [`MassPoint::new`].
    pub fn from_xy(mass: f64, x: f64, y: f64) -> RotorResult<Self> {
        Self::new(mass, x.hypot(y), y.atan2(x))
    }

    /// Validate the model invariants.
    ///
    /// Deserialized points bypass the constructor, so configuration
    /// loading re-runs this check.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` on the first violated invariant.
    pub fn check(&self) -> RotorResult<()> {
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(RotorError::invalid_parameter(
                "mass",
                format!("must be > 0 kg, got {}", self.mass),
            ));
        }
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(RotorError::invalid_parameter(
                "radius",
                format!("must be >= 0 m, got {}", self.radius),
            ));
        }
        if !self.angle.is_finite() {
            return Err(RotorError::invalid_parameter(
                "angle",
                format!("must be finite, got {}", self.angle),
            ));
        }
        Ok(())
    }

    /// Cartesian position in the rotor plane.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.radius * self.angle.cos(), self.radius * self.angle.sin())
    }

    /// Mass moment about the spin axis: m * position.
    #[must_use]
    pub fn moment(&self) -> Vec2 {
        self.position().scale(self.mass)
    }
}

/// A named configuration of mass points on one rotor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotorCase {
    name: String,
    points: Vec<MassPoint>,
}

impl RotorCase {
    /// Create a new rotor case.
    #[must_use]
    pub fn new(name: impl Into<String>, points: Vec<MassPoint>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    /// Case name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Mass points, in insertion order.
    #[must_use]
    pub fn points(&self) -> &[MassPoint] {
        &self.points
    }

    /// Sum of all point masses (kg).
    #[must_use]
    pub fn total_mass(&self) -> f64 {
        self.points.iter().map(|p| p.mass).sum()
    }

    /// Derive a balanced variant by appending a counterweight that
    /// nulls the COM offset.
    ///
    /// The counterweight sits opposite the current COM direction at
    /// the largest radius present in the case (1 m when all radii are
    /// zero), with mass `M * r_com / r_counter` so the mass moment
    /// vector sum cancels exactly. A case whose COM offset is already
    /// below [`BALANCE_TOLERANCE`] is returned with its points
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the case has no points or its
    /// total mass is not strictly positive.
    pub fn balanced(&self, name: impl Into<String>) -> RotorResult<Self> {
        let (com, total_mass) = analysis::center_of_mass(&self.points)?;
        let com_radius = com.magnitude();

        let mut points = self.points.clone();
        if com_radius > BALANCE_TOLERANCE {
            let mut counter_radius = self
                .points
                .iter()
                .map(|p| p.radius)
                .fold(0.0_f64, f64::max);
            if counter_radius <= 0.0 {
                counter_radius = 1.0;
            }
            let counter_mass = total_mass * com_radius / counter_radius;
            let counter_angle = (-com.y).atan2(-com.x);
            points.push(MassPoint::new(counter_mass, counter_radius, counter_angle)?);
        }

        Ok(Self {
            name: name.into(),
            points,
        })
    }
}
