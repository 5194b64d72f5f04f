//! Characteristic radii of the magnetosphere-disc system.
//!
//! Three radii control which regime the system is in: the Alfvén radius
//! (where magnetic pressure halts the viscous inflow), the corotation
//! radius (where the Keplerian angular velocity matches the stellar spin)
//! and the light cylinder (beyond which field lines cannot corotate). The
//! ratio of the first two, expressed as the fastness parameter, decides
//! between accretion and propeller ejection.

use crate::constants::{C, GM};

/// Alfvén radius (cm).
///
/// R_m = μ^(4/7) (GM)^(-1/7) Ṁ^(-2/7)
///
/// `mdot` is the viscous inflow rate M_disc / t_visc. A vanishing inflow
/// sends this to infinity; the capping in [`magnetospheric_radius`] is what
/// keeps downstream formulas meaningful in that limit.
pub fn alfven_radius(mu: f64, mdot: f64) -> f64 {
    mu.powf(4.0 / 7.0) * GM.powf(-1.0 / 7.0) * mdot.powf(-2.0 / 7.0)
}

/// Corotation radius (cm).
///
/// R_c = (GM / ω²)^(2/3)
pub fn corotation_radius(omega: f64) -> f64 {
    (GM / omega.powi(2)).powf(2.0 / 3.0)
}

/// Light-cylinder radius R_lc = c / ω (cm).
pub fn light_cylinder_radius(omega: f64) -> f64 {
    C / omega
}

/// Magnetospheric radius: the Alfvén radius capped at a fraction `k` of the
/// light cylinder (cm).
///
/// Field lines beyond k·R_lc cannot stay closed, so the magnetosphere is
/// truncated there. The cap is a physical regime boundary and is applied
/// before any quantity that depends on R_m is evaluated; the comparison is
/// inclusive, so R_m exactly at the cap is already treated as capped.
pub fn magnetospheric_radius(mu: f64, mdot: f64, omega: f64, k: f64) -> f64 {
    let r_m = alfven_radius(mu, mdot);
    let cap = k * light_cylinder_radius(omega);
    if r_m >= cap {
        cap
    } else {
        r_m
    }
}

/// Fastness parameter w = (R_m / R_c)^(3/2).
///
/// w < 1: the magnetosphere rotates slower than the local Keplerian flow
/// and matter is accreted. w > 1: the magnetosphere outruns the flow and
/// matter is propelled away.
pub fn fastness_parameter(r_m: f64, r_c: f64) -> f64 {
    (r_m / r_c).powf(3.0 / 2.0)
}
