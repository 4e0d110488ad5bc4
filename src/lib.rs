//! # rotorvib
//!
//! Rotor mass-imbalance vibration estimator.
//!
//! Given a set of point masses fixed around a spin axis, rotorvib
//! computes the combined center of mass, its radial offset from the
//! axis, the centrifugal force that offset generates at a given
//! angular speed, and a simplified sinusoidal vibration proxy for an
//! unbalanced and a counterweight-balanced configuration.
//!
//! ## Example
//!
//! ```rust
//! use rotorvib::prelude::*;
//!
//! // 3000 RPM in rad/s
//! let omega = omega_from_rpm(3000.0);
//! // F = m·ω²·r for a 6 kg rotor with 1 mm COM offset
//! let force = centrifugal_force(6.0, omega, 0.001);
//! assert!(force > 0.0);
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::suboptimal_flops,  // Numerical code choices are intentional
    clippy::imprecise_flops,
    clippy::missing_const_for_fn,  // Many functions can't be const in stable Rust
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod rotor;
pub mod signal;
pub mod visualization;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::ScenarioConfig;
    pub use crate::error::{RotorError, RotorResult};
    pub use crate::rotor::analysis::{
        analyze_case, center_of_mass, centrifugal_force, omega_from_rpm, CaseResult,
    };
    pub use crate::rotor::{MassPoint, RotorCase, Vec2};
    pub use crate::signal::{DataPoint, VibrationProxy};
}

/// Re-export for public API
pub use error::{RotorError, RotorResult};
