mod tests {
    use approx::assert_relative_eq;

    use crate::constants::{GM, I, R};
    use crate::torques::{
        accretion_torque, binding_energy, dipole_torque, rotation_parameter, rotational_energy,
        BREAKUP_LIMIT,
    };

    const MU: f64 = 1.0e33;

    /// Angular frequency at which the rotation parameter equals the
    /// break-up limit.
    fn critical_omega() -> f64 {
        (BREAKUP_LIMIT * binding_energy() / (0.5 * I)).sqrt()
    }

    #[test]
    fn dipole_torque_always_spins_down() {
        for omega in [1.0e2, 1.0e3, 1.0e4] {
            assert!(dipole_torque(MU, omega) < 0.0);
        }
    }

    #[test]
    fn dipole_torque_scales_as_omega_cubed() {
        let n1 = dipole_torque(MU, 1.0e3);
        let n2 = dipole_torque(MU, 2.0e3);

        assert_relative_eq!(n2 / n1, 8.0, epsilon = 1e-12);
    }

    #[test]
    fn rotation_parameter_grows_quadratically() {
        let r1 = rotation_parameter(1.0e3);
        let r2 = rotation_parameter(3.0e3);

        assert_relative_eq!(r2 / r1, 9.0, epsilon = 1e-12);
        assert_relative_eq!(
            rotational_energy(1.0e3),
            0.5 * I * 1.0e6,
            epsilon = 1e30
        );
    }

    #[test]
    fn accretion_torque_vanishes_above_the_breakup_limit() {
        let omega_hi = critical_omega() * (1.0 + 1.0e-9);
        let rot_hi = rotation_parameter(omega_hi);
        assert!(rot_hi > BREAKUP_LIMIT);

        assert_eq!(accretion_torque(5.0e6, 1.0e30, 1.0e29, rot_hi), 0.0);
    }

    #[test]
    fn accretion_torque_survives_below_the_breakup_limit() {
        let omega_lo = critical_omega() * (1.0 - 1.0e-9);
        let rot_lo = rotation_parameter(omega_lo);
        assert!(rot_lo <= BREAKUP_LIMIT);

        let n_acc = accretion_torque(5.0e6, 1.0e30, 1.0e29, rot_lo);
        assert!(n_acc != 0.0);
        assert_relative_eq!(
            n_acc,
            (GM * 5.0e6).sqrt() * (1.0e30 - 1.0e29),
            epsilon = 1e30
        );
    }

    #[test]
    fn lever_arm_never_drops_below_the_stellar_surface() {
        // A magnetosphere crushed inside the star transfers angular
        // momentum at the surface instead.
        let crushed = accretion_torque(0.5 * R, 1.0e30, 0.0, 0.1);
        let at_surface = accretion_torque(R, 1.0e30, 0.0, 0.1);

        assert_eq!(crushed, at_surface);
        assert_relative_eq!(at_surface, (GM * R).sqrt() * 1.0e30, epsilon = 1e30);

        // Outside the star the magnetospheric radius is the lever arm
        let outside = accretion_torque(4.0 * R, 1.0e30, 0.0, 0.1);
        assert_relative_eq!(outside, 2.0 * at_surface, epsilon = 1e32);
    }

    #[test]
    fn net_propeller_flow_gives_a_negative_torque() {
        // More matter flung out than accreted -> spin-down
        let n_acc = accretion_torque(5.0e6, 1.0e29, 1.0e30, 0.1);
        assert!(n_acc < 0.0);
    }
}
