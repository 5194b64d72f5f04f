use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::time::Time;

/// Angular velocity in rad/s
///
/// Carries the conversion between a star's spin period and its angular
/// frequency, ω = 2π / P. A zero or negative period is a caller error and
/// produces an infinite or negative frequency rather than a panic.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct AngularVelocity(pub f64);

impl AngularVelocity {
    pub fn from_rad_per_sec(value: f64) -> Self {
        Self(value)
    }

    /// Angular frequency of a star spinning with the given period.
    pub fn from_spin_period(period: Time) -> Self {
        Self((2.0 * PI) / period.to_seconds())
    }

    pub fn to_rad_per_sec(&self) -> f64 {
        self.0
    }

    /// Spin period of a star rotating at this angular velocity.
    pub fn to_spin_period(&self) -> Time {
        Time::from_seconds((2.0 * PI) / self.0)
    }

    /// Rotation frequency in Hz.
    pub fn to_frequency_hz(&self) -> f64 {
        self.0 / (2.0 * PI)
    }
}
