mod tests {
    use approx::assert_relative_eq;

    use crate::constants::C;
    use crate::radii::{
        alfven_radius, corotation_radius, fastness_parameter, light_cylinder_radius,
        magnetospheric_radius,
    };

    const MU: f64 = 1.0e33; // B = 1e15 G, R = 1e6 cm

    #[test]
    fn alfven_radius_scales_as_mdot_to_minus_two_sevenths() {
        let r1 = alfven_radius(MU, 1.0e28);
        let r2 = alfven_radius(MU, 128.0 * 1.0e28);

        // 128^(2/7) = 4
        assert_relative_eq!(r1 / r2, 4.0, epsilon = 1e-9);
    }

    #[test]
    fn corotation_radius_scales_as_omega_to_minus_four_thirds() {
        let r1 = corotation_radius(1.0e3);
        let r2 = corotation_radius(2.0e3);

        // (GM/omega^2)^(2/3) halving in omega -> 2^(4/3) in radius
        assert_relative_eq!(r1 / r2, 2.0_f64.powf(4.0 / 3.0), epsilon = 1e-9);
    }

    #[test]
    fn light_cylinder_is_c_over_omega() {
        assert_eq!(light_cylinder_radius(1.0e4), C / 1.0e4);
    }

    #[test]
    fn cap_replaces_an_oversized_alfven_radius_exactly() {
        // Small inflow rate -> enormous uncapped Alfven radius
        let omega = 6283.2;
        let k = 0.9;
        let mdot = 1.0e27;
        assert!(alfven_radius(MU, mdot) > k * light_cylinder_radius(omega));

        let r_m = magnetospheric_radius(MU, mdot, omega, k);
        assert_eq!(r_m, k * light_cylinder_radius(omega));
    }

    #[test]
    fn cap_leaves_a_small_alfven_radius_untouched() {
        let omega = 6283.2;
        let k = 0.9;
        let mdot = 1.0e30;
        let uncapped = alfven_radius(MU, mdot);
        assert!(uncapped < k * light_cylinder_radius(omega));

        assert_eq!(magnetospheric_radius(MU, mdot, omega, k), uncapped);
    }

    #[test]
    fn zero_inflow_still_yields_a_finite_magnetospheric_radius() {
        // Mdot -> 0 sends the Alfven radius to infinity; the cap keeps the
        // magnetospheric radius pinned to the light cylinder.
        let omega = 6283.2;
        let r_m = magnetospheric_radius(MU, 0.0, omega, 0.9);

        assert!(r_m.is_finite());
        assert_eq!(r_m, 0.9 * light_cylinder_radius(omega));
    }

    #[test]
    fn fastness_is_unity_at_corotation() {
        let r = 2.5e6;
        assert_relative_eq!(fastness_parameter(r, r), 1.0, epsilon = 1e-12);

        // Faster rotator: magnetosphere outside corotation
        assert!(fastness_parameter(2.0 * r, r) > 1.0);
        assert!(fastness_parameter(0.5 * r, r) < 1.0);
    }
}
