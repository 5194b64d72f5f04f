//! End-to-end integration of the fiducial spin-evolution scenario.
//!
//! These tests drive the full pipeline: initial-condition construction,
//! derivative evaluation, adaptive integration, and trajectory sampling.

use magnetar::{default_time_grid, log_time_grid, run, ModelParams, State};

/// Count sign changes in the successive differences of a series, ignoring
/// changes below integration noise.
fn sign_flips(series: &[f64]) -> usize {
    let mut flips = 0;
    let mut last_sign = 0.0;
    for pair in series.windows(2) {
        let delta = pair[1] - pair[0];
        if delta.abs() <= 1.0e-6 * pair[0].abs() {
            continue;
        }
        let sign = delta.signum();
        if last_sign != 0.0 && sign != last_sign {
            flips += 1;
        }
        last_sign = sign;
    }
    flips
}

#[test]
fn fiducial_scenario_evolves_sensibly() {
    let params = ModelParams::fiducial();
    let initial = State::from_observables(1.0, params.disc_mass);
    let grid = log_time_grid(1.0, 1.0e6, 1001);

    let trajectory = run(params, initial, &grid).expect("fiducial run should integrate");

    assert_eq!(trajectory.len(), grid.len());
    assert_eq!(trajectory.time.first(), grid.first());
    assert_eq!(trajectory.time.last(), grid.last());

    // Everything the model produces stays finite
    for i in 0..trajectory.len() {
        assert!(trajectory.disc_mass[i].is_finite(), "Mdisc at sample {}", i);
        assert!(trajectory.omega[i].is_finite(), "omega at sample {}", i);
        assert!(trajectory.disc_mass[i] >= 0.0);
        assert!(trajectory.omega[i] > 0.0);
    }

    // The disc drains: mass never grows beyond integration noise and ends
    // well below where it started.
    for pair in trajectory.disc_mass.windows(2) {
        assert!(
            pair[1] <= pair[0] * (1.0 + 1.0e-7),
            "disc mass grew: {} -> {}",
            pair[0],
            pair[1]
        );
    }
    let initial_mass = trajectory.disc_mass[0];
    let final_mass = *trajectory.disc_mass.last().unwrap();
    assert!(
        final_mass < 1.0e-2 * initial_mass,
        "disc should be mostly drained by 1e6 s: {} of {}",
        final_mass,
        initial_mass
    );

    // Early accretion spins the star up, late dipole losses spin it down:
    // the spin derivative changes sign only at regime transitions.
    assert!(
        sign_flips(&trajectory.omega) <= 3,
        "too many spin-derivative sign changes: {}",
        sign_flips(&trajectory.omega)
    );
}

#[test]
fn trajectories_are_reproducible() {
    let params = ModelParams::fiducial();
    let initial = State::from_observables(1.0, params.disc_mass);
    let grid = log_time_grid(1.0, 1.0e4, 201);

    let first = run(params, initial, &grid).unwrap();
    let second = run(params, initial, &grid).unwrap();

    // Same inputs, bitwise-same trajectory
    assert_eq!(first.disc_mass, second.disc_mass);
    assert_eq!(first.omega, second.omega);
}

#[test]
fn reference_grid_resolves_the_full_window() {
    let grid = default_time_grid();
    let params = ModelParams::fiducial();
    let initial = State::from_observables(1.0, params.disc_mass);

    let trajectory = run(params, initial, &grid).expect("reference run should integrate");

    assert_eq!(trajectory.len(), 10_001);

    // Spin periods stay in the millisecond band for this scenario
    for p in trajectory.spin_period_ms() {
        assert!(p > 0.1 && p < 100.0, "period out of band: {} ms", p);
    }
}

#[test]
fn stronger_fields_spin_down_harder() {
    let grid = log_time_grid(1.0, 1.0e6, 501);

    let weak = ModelParams::new(1.0, 1.0e-3, 100.0, 1.0, 1.0);
    let strong = ModelParams::new(10.0, 1.0e-3, 100.0, 1.0, 1.0);

    let initial = State::from_observables(5.0, 1.0e-3);

    let weak_run = run(weak, initial, &grid).unwrap();
    let strong_run = run(strong, initial, &grid).unwrap();

    // A 10x field means 100x the dipole torque; by the end of the window
    // the strong-field star must be the slower rotator.
    assert!(
        strong_run.omega.last().unwrap() < weak_run.omega.last().unwrap(),
        "strong field should end slower: {} vs {}",
        strong_run.omega.last().unwrap(),
        weak_run.omega.last().unwrap()
    );
}
