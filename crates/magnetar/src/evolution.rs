//! Coupled disc-mass and spin derivative evaluation.
//!
//! This is the right-hand side the integrator drives: given the current
//! disc mass and angular frequency it combines the fallback supply, the
//! viscous outflow split between accretion and propeller ejection, and the
//! dipole and accretion torques into the pair of time derivatives. The
//! function is deterministic and side-effect-free; the integrator may probe
//! it at repeated or out-of-order times during step refinement.

use odeint::OdeSystem;

use crate::constants::I;
use crate::params::ModelParams;
use crate::radii;
use crate::state::State;
use crate::torques;

/// Time derivatives of the state for one (state, time) sample.
///
/// Recomputed fresh on every call; both components depend nonlinearly on
/// the full state, so nothing here is worth caching across steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Derivatives {
    /// Disc mass derivative (g/s)
    pub disc_mass: f64,
    /// Angular frequency derivative (rad/s²)
    pub omega: f64,
}

/// Propelled mass fraction η₂ = ½(1 + tanh(n(w − 1))).
///
/// The hyperbolic tangent smooths what is physically a sharp threshold at
/// fastness w = 1; `n` sets how abruptly the propeller switches on. The
/// accreted fraction is the complement 1 − η₂.
pub fn propeller_efficiency(w: f64, n: f64) -> f64 {
    0.5 * (1.0 + (n * (w - 1.0)).tanh())
}

/// Fallback mass supply rate (g/s).
///
/// Ṁ_fb = (M₀ / t_fb) ((t + t_fb) / t_fb)^(−5/3)
///
/// Bound debris raining back onto the disc, declining as the classic −5/3
/// power law.
pub fn fallback_rate(m0: f64, t_fb: f64, t: f64) -> f64 {
    (m0 / t_fb) * ((t + t_fb) / t_fb).powf(-5.0 / 3.0)
}

/// Evaluate the derivatives at (state, t).
///
/// Pure function of its arguments: no clamping beyond the Alfvén cap, no
/// input validation, no retained state. Unphysical inputs (ω = 0, negative
/// disc mass) propagate as infinities or NaNs in the result; detecting
/// divergence is the integrator's job, not this function's.
pub fn derivatives(state: State, t: f64, params: &ModelParams) -> Derivatives {
    let State { disc_mass, omega } = state;

    let t_visc = params.viscous_timescale();
    let mu = params.dipole_moment();

    // Capped magnetospheric radius first; everything downstream uses it.
    let r_m = radii::magnetospheric_radius(mu, disc_mass / t_visc, omega, params.k);
    let r_c = radii::corotation_radius(omega);
    let w = radii::fastness_parameter(r_m, r_c);

    // Viscous outflow split between ejection and accretion.
    let eta_prop = propeller_efficiency(w, params.n);
    let eta_acc = 1.0 - eta_prop;
    let mdot_prop = eta_prop * (disc_mass / t_visc);
    let mdot_acc = eta_acc * (disc_mass / t_visc);
    let mdot_fb = fallback_rate(params.fallback_mass(), params.fallback_timescale(), t);

    let n_dip = torques::dipole_torque(mu, omega);
    let rot_param = torques::rotation_parameter(omega);
    let n_acc = torques::accretion_torque(r_m, mdot_acc, mdot_prop, rot_param);

    Derivatives {
        disc_mass: mdot_fb - mdot_prop - mdot_acc,
        omega: (n_acc + n_dip) / I,
    }
}

/// The spin-evolution model as an integrable ODE system.
///
/// State vector ordering is `[disc mass (g), ω (rad/s)]`, matching
/// [`State::to_array`].
#[derive(Debug, Clone)]
pub struct SpinEvolution {
    /// Scenario configuration, fixed for the lifetime of the run
    pub params: ModelParams,
}

impl SpinEvolution {
    pub fn new(params: ModelParams) -> Self {
        Self { params }
    }
}

impl OdeSystem<2> for SpinEvolution {
    fn rhs(&self, t: f64, y: &[f64; 2], dydt: &mut [f64; 2]) {
        let d = derivatives(State::from_array(*y), t, &self.params);
        dydt[0] = d.disc_mass;
        dydt[1] = d.omega;
    }
}
