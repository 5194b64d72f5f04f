mod tests {
    use approx::assert_relative_eq;

    use crate::params::ModelParams;
    use units::SOLAR_MASS_G;

    #[test]
    fn new_applies_conventional_defaults() {
        let params = ModelParams::new(1.0, 1.0e-2, 100.0, 1.0, 1.0);

        assert_eq!(params.n, 1.0);
        assert_eq!(params.alpha, 0.1);
        assert_eq!(params.cs7, 1.0);
        assert_eq!(params.k, 0.9);
    }

    #[test]
    fn fiducial_scenario_derived_scalars() {
        let params = ModelParams::fiducial();

        // 100 km disc -> 1e7 cm, viscous timescale 10 s
        assert_eq!(params.disc_radius_cm(), 1.0e7);
        assert_relative_eq!(params.viscous_timescale(), 10.0, epsilon = 1e-12);

        // mu = 1e15 * B * R^3 with R = 1e6 cm
        assert_relative_eq!(params.dipole_moment(), 1.0e33, epsilon = 1e20);

        // delta = 1 -> full disc mass in the fallback reservoir
        assert_relative_eq!(
            params.fallback_mass(),
            1.0e-2 * SOLAR_MASS_G,
            epsilon = 1e18
        );

        // epsilon = 1 -> fallback timescale equals viscous timescale
        assert_relative_eq!(params.fallback_timescale(), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn ratios_scale_the_fallback_reservoir() {
        let mut params = ModelParams::fiducial();
        params.epsilon = 3.0;
        params.delta = 0.5;

        assert_relative_eq!(params.fallback_timescale(), 30.0, epsilon = 1e-12);
        assert_relative_eq!(
            params.fallback_mass(),
            0.5e-2 * SOLAR_MASS_G,
            epsilon = 1e18
        );
    }

    #[test]
    fn viscosity_sets_the_viscous_timescale() {
        let mut params = ModelParams::fiducial();
        params.alpha = 0.01;

        assert_relative_eq!(params.viscous_timescale(), 100.0, epsilon = 1e-10);

        params.cs7 = 2.0;
        assert_relative_eq!(params.viscous_timescale(), 50.0, epsilon = 1e-10);
    }
}
