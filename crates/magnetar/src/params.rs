//! Scenario configuration.

use serde::{Deserialize, Serialize};
use units::{Length, Mass};

use crate::constants::R;

/// Physical configuration for one spin-evolution scenario.
///
/// Immutable over a run; the derivative evaluator borrows it on every call.
/// The first five fields pin down the scenario, the remaining four carry the
/// conventional values applied by [`ModelParams::new`]; all fields are
/// public so any of them can be overridden after construction.
///
/// # Examples
///
/// ```rust
/// use magnetar::ModelParams;
///
/// // B = 5e15 G, 1e-3 solar-mass disc at 500 km, unit fallback ratios
/// let mut params = ModelParams::new(5.0, 1.0e-3, 500.0, 1.0, 1.0);
/// params.n = 10.0; // sharper propeller switch-on
///
/// assert_eq!(params.alpha, 0.1);
/// assert_eq!(params.k, 0.9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelParams {
    /// Magnetic field strength (10¹⁵ G)
    pub b_field: f64,
    /// Initial disc mass (solar masses)
    pub disc_mass: f64,
    /// Disc radius (km)
    pub disc_radius: f64,
    /// Fallback timescale ratio: t_fb = ε t_visc
    pub epsilon: f64,
    /// Fallback mass ratio: M₀ = δ M_disc
    pub delta: f64,
    /// Propeller switch-on sharpness
    pub n: f64,
    /// Shakura-Sunyaev viscosity parameter α
    pub alpha: f64,
    /// Disc sound speed (10⁷ cm/s)
    pub cs7: f64,
    /// Alfvén radius capping fraction
    pub k: f64,
}

impl ModelParams {
    /// Creates a parameter set with the conventional defaults for the
    /// propeller switch-on (n = 1.0), viscosity (α = 0.1), sound speed
    /// (cs7 = 1.0) and capping fraction (k = 0.9).
    pub fn new(b_field: f64, disc_mass: f64, disc_radius: f64, epsilon: f64, delta: f64) -> Self {
        Self {
            b_field,
            disc_mass,
            disc_radius,
            epsilon,
            delta,
            n: 1.0,
            alpha: 0.1,
            cs7: 1.0,
            k: 0.9,
        }
    }

    /// Fiducial millisecond-magnetar scenario: B = 10¹⁵ G, a 10⁻² M☉ disc
    /// at 100 km, and unit fallback ratios.
    pub fn fiducial() -> Self {
        Self::new(1.0, 1.0e-2, 100.0, 1.0, 1.0)
    }

    /// Disc radius in centimeters.
    pub fn disc_radius_cm(&self) -> f64 {
        Length::from_km(self.disc_radius).to_cm()
    }

    /// Viscous timescale of the disc (s).
    ///
    /// t_visc = R_disc / (α c_s)
    pub fn viscous_timescale(&self) -> f64 {
        self.disc_radius_cm() / (self.alpha * self.cs7 * 1.0e7)
    }

    /// Magnetic dipole moment μ = B R³ (G·cm³).
    pub fn dipole_moment(&self) -> f64 {
        1.0e15 * self.b_field * R.powi(3)
    }

    /// Total mass budget of the fallback reservoir (g).
    pub fn fallback_mass(&self) -> f64 {
        self.delta * Mass::from_solar_masses(self.disc_mass).to_grams()
    }

    /// Fallback timescale t_fb = ε t_visc (s).
    pub fn fallback_timescale(&self) -> f64 {
        self.epsilon * self.viscous_timescale()
    }
}
