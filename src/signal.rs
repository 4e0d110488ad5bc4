//! Time-domain vibration proxy synthesis.
//!
//! The proxy is a pure sinusoid with zero phase: `s(t) = A·sin(ω·t)`.
//! It stands in for the true displacement response and deliberately
//! ignores damping and stiffness.

use serde::{Deserialize, Serialize};

use crate::error::{RotorError, RotorResult};

/// Time-series sample for plotting and export.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Timestamp (s).
    pub time: f64,
    /// Displacement proxy value (m).
    pub value: f64,
}

/// Lazy, restartable sinusoidal vibration proxy.
///
/// Yields `samples` evenly spaced `(t, A·sin(ω·t))` pairs over
/// `[0, duration]`, endpoints included. The iterator is deterministic:
/// [`VibrationProxy::restart`] replays the exact same sequence, and a
/// clone continues from the same cursor as its source.
#[derive(Debug, Clone)]
pub struct VibrationProxy {
    amplitude: f64,
    omega: f64,
    duration: f64,
    samples: usize,
    index: usize,
}

impl VibrationProxy {
    /// Create a new proxy signal.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `samples < 2`, `duration <= 0`,
    /// or the amplitude/omega are non-finite.
    pub fn new(amplitude: f64, omega: f64, duration: f64, samples: usize) -> RotorResult<Self> {
        if samples < 2 {
            return Err(RotorError::invalid_parameter(
                "samples",
                format!("at least 2 samples are required, got {samples}"),
            ));
        }
        if !duration.is_finite() || duration <= 0.0 {
            return Err(RotorError::invalid_parameter(
                "duration",
                format!("must be > 0 seconds, got {duration}"),
            ));
        }
        if !amplitude.is_finite() {
            return Err(RotorError::invalid_parameter(
                "amplitude",
                format!("must be finite, got {amplitude}"),
            ));
        }
        if !omega.is_finite() {
            return Err(RotorError::invalid_parameter(
                "omega",
                format!("must be finite, got {omega}"),
            ));
        }

        Ok(Self {
            amplitude,
            omega,
            duration,
            samples,
            index: 0,
        })
    }

    /// Total number of samples this proxy yields.
    #[must_use]
    pub const fn samples(&self) -> usize {
        self.samples
    }

    /// Signal amplitude (m).
    #[must_use]
    pub const fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Reset a partially consumed iterator back to t = 0.
    pub fn restart(&mut self) {
        self.index = 0;
    }

    /// Sample at a given index without advancing the iterator.
    #[must_use]
    pub fn sample_at(&self, index: usize) -> Option<DataPoint> {
        if index >= self.samples {
            return None;
        }
        let t = self.duration * index as f64 / (self.samples - 1) as f64;
        Some(DataPoint {
            time: t,
            value: self.amplitude * (self.omega * t).sin(),
        })
    }
}

impl Iterator for VibrationProxy {
    type Item = DataPoint;

    fn next(&mut self) -> Option<Self::Item> {
        let point = self.sample_at(self.index)?;
        self.index += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.samples - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for VibrationProxy {}
