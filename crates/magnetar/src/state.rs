//! Integration state and initial conditions.

use serde::{Deserialize, Serialize};
use units::{AngularVelocity, Mass, Time};

/// Instantaneous state of the star-disc system.
///
/// The fields are the raw quantities the derivative evaluator works in:
/// grams for the disc mass, rad/s for the angular frequency. The state is
/// owned by the integration driver; nothing in this crate mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct State {
    /// Disc mass (g)
    pub disc_mass: f64,
    /// Stellar angular frequency (rad/s)
    pub omega: f64,
}

impl State {
    /// Build the initial state from the observable quantities.
    ///
    /// # Arguments
    /// * `period_ms` - Initial spin period (milliseconds)
    /// * `disc_mass` - Initial disc mass (solar masses)
    ///
    /// The inputs are trusted: a zero period divides to an infinite
    /// frequency and a negative mass produces non-real fractional powers
    /// downstream. Neither is checked here; garbage in, garbage out.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use magnetar::State;
    ///
    /// let state = State::from_observables(1.0, 1.0e-2);
    /// assert!(state.omega > 6.0e3); // 2π kHz
    /// ```
    pub fn from_observables(period_ms: f64, disc_mass: f64) -> Self {
        let period = Time::from_milliseconds(period_ms);
        Self {
            disc_mass: Mass::from_solar_masses(disc_mass).to_grams(),
            omega: AngularVelocity::from_spin_period(period).to_rad_per_sec(),
        }
    }

    /// Current spin period.
    pub fn spin_period(&self) -> Time {
        AngularVelocity::from_rad_per_sec(self.omega).to_spin_period()
    }

    /// State vector for the integrator, ordered [disc mass, ω].
    pub fn to_array(&self) -> [f64; 2] {
        [self.disc_mass, self.omega]
    }

    /// State from an integrator vector ordered [disc mass, ω].
    pub fn from_array(y: [f64; 2]) -> Self {
        Self {
            disc_mass: y[0],
            omega: y[1],
        }
    }
}
