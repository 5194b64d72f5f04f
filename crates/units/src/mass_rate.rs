use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

use crate::mass::{Mass, SOLAR_MASS_G};
use crate::time::{Time, SECONDS_PER_YEAR};

/// A physical mass rate (mass per time) quantity using f64 precision.
///
/// The `MassRate` struct represents mass flow rates with grams per second as
/// the base unit, matching the CGS accretion and propeller ejection rates the
/// disc model works in. Observational accretion rates are commonly quoted in
/// solar masses per year, so that conversion is provided too.
///
/// # Examples
///
/// ```rust
/// use units::mass_rate::MassRate;
/// use units::time::Time;
///
/// let fallback = MassRate::from_grams_per_sec(1.0e30);
///
/// // Integrate over time to get total mass
/// let span = Time::from_seconds(100.0);
/// let supplied = fallback.integrate(span);
/// assert_eq!(supplied.to_grams(), 1.0e32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct MassRate(f64); // Base unit: grams per second

impl MassRate {
    /// Creates a new `MassRate` from a value in grams per second.
    pub fn from_grams_per_sec(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `MassRate` from a value in solar masses per year.
    pub fn from_solar_masses_per_year(value: f64) -> Self {
        Self(value * SOLAR_MASS_G / SECONDS_PER_YEAR)
    }

    /// Returns the mass rate value in grams per second.
    pub fn to_grams_per_sec(&self) -> f64 {
        self.0
    }

    /// Converts the mass rate to solar masses per year.
    pub fn to_solar_masses_per_year(&self) -> f64 {
        self.0 * SECONDS_PER_YEAR / SOLAR_MASS_G
    }

    /// Integrates the mass rate over a time period to get total mass.
    ///
    /// # Arguments
    ///
    /// * `duration` - The time period
    ///
    /// # Returns
    ///
    /// The integrated mass
    pub fn integrate(&self, duration: Time) -> Mass {
        Mass::from_grams(self.0 * duration.to_seconds())
    }
}

impl Add for MassRate {
    type Output = MassRate;

    fn add(self, rhs: MassRate) -> MassRate {
        MassRate(self.0 + rhs.0)
    }
}

impl Sub for MassRate {
    type Output = MassRate;

    fn sub(self, rhs: MassRate) -> MassRate {
        MassRate(self.0 - rhs.0)
    }
}

impl Mul<f64> for MassRate {
    type Output = MassRate;

    fn mul(self, rhs: f64) -> MassRate {
        MassRate(self.0 * rhs)
    }
}

impl Div<f64> for MassRate {
    type Output = MassRate;

    fn div(self, rhs: f64) -> MassRate {
        MassRate(self.0 / rhs)
    }
}

/// Allow f64 * MassRate (commutative multiplication)
impl Mul<MassRate> for f64 {
    type Output = MassRate;

    fn mul(self, rhs: MassRate) -> MassRate {
        rhs * self
    }
}
