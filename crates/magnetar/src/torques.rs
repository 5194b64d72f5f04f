//! Torques and energetics.

use crate::constants::{C, GM, I, M, R};

/// Rotation-parameter threshold above which accretion torque shuts off.
///
/// Beyond this ratio of rotational to binding energy the star cannot accept
/// further angular momentum without breaking up.
pub const BREAKUP_LIMIT: f64 = 0.27;

/// Rotational kinetic energy T = ½ I ω² (erg).
pub fn rotational_energy(omega: f64) -> f64 {
    0.5 * I * omega.powi(2)
}

/// Gravitational binding energy (erg).
///
/// |W| = 0.6 M c² · (GM/Rc²) / (1 − 0.5 GM/Rc²)
pub fn binding_energy() -> f64 {
    let compactness = GM / (R * C.powi(2));
    0.6 * M * C.powi(2) * (compactness / (1.0 - 0.5 * compactness))
}

/// Ratio of rotational to binding energy.
pub fn rotation_parameter(omega: f64) -> f64 {
    rotational_energy(omega) / binding_energy()
}

/// Magnetic dipole torque N_dip = −μ² ω³ / 6c³ (dyn cm).
///
/// Always a spin-down torque while the star rotates forward.
pub fn dipole_torque(mu: f64, omega: f64) -> f64 {
    -(mu.powi(2) * omega.powi(3)) / (6.0 * C.powi(3))
}

/// Accretion torque (dyn cm).
///
/// Angular momentum is exchanged at the magnetospheric radius, or at the
/// stellar surface when the magnetosphere is compressed inside it. The net
/// torque follows the balance of accreted against propelled matter, and
/// shuts off entirely once the rotation parameter crosses
/// [`BREAKUP_LIMIT`].
pub fn accretion_torque(r_m: f64, mdot_acc: f64, mdot_prop: f64, rot_param: f64) -> f64 {
    if rot_param > BREAKUP_LIMIT {
        return 0.0;
    }
    let lever = if r_m >= R { r_m } else { R };
    (GM * lever).sqrt() * (mdot_acc - mdot_prop)
}
