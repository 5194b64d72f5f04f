//! Fiducial magnetar spin-evolution run.
//!
//! Integrates the coupled disc-mass / spin equations for the fiducial
//! scenario (B = 10¹⁵ G, 10⁻² M☉ disc at 100 km, 1 ms birth period) over
//! the reference 1 s - 10⁶ s window and reports the regime transition.
//!
//! Run with: cargo run --package magnetar --example spindown

use magnetar::{default_time_grid, derivatives, run, ModelParams, State};

fn main() {
    println!("Magnetar-disc spin evolution: fiducial scenario\n");
    println!("{}", "=".repeat(64));

    let params = ModelParams::fiducial();
    println!(
        "B = {:.1} x 10^15 G, disc = {:.0e} M☉ at {:.0} km",
        params.b_field, params.disc_mass, params.disc_radius
    );
    println!(
        "ε = {:.1}, δ = {:.1}, n = {:.1}, α = {:.2}, cs7 = {:.1}, k = {:.1}",
        params.epsilon, params.delta, params.n, params.alpha, params.cs7, params.k
    );

    let initial = State::from_observables(1.0, params.disc_mass);
    println!("\nInitial conditions:");
    println!(
        "  Spin period: {:.3} ms  (ω = {:.1} rad/s)",
        initial.spin_period().to_milliseconds(),
        initial.omega
    );
    println!("  Disc mass: {:.4e} g", initial.disc_mass);

    let d0 = derivatives(initial, 1.0, &params);
    println!(
        "  Derivatives at t = 1 s: dM/dt = {:.3e} g/s, dω/dt = {:+.3e} rad/s²",
        d0.disc_mass, d0.omega
    );

    println!("\nIntegrating over 1 s - 1e6 s (10001 log-spaced samples)...");
    let grid = default_time_grid();
    let trajectory = run(params, initial, &grid).expect("integration failed");

    println!(
        "\n{:>12} {:>14} {:>14} {:>10}",
        "t (s)", "Mdisc (g)", "ω (rad/s)", "P (ms)"
    );
    for &i in &[0, 2_500, 5_000, 7_500, 10_000] {
        let state = trajectory.state(i);
        println!(
            "{:>12.4e} {:>14.5e} {:>14.2} {:>10.4}",
            trajectory.time[i],
            state.disc_mass,
            state.omega,
            state.spin_period().to_milliseconds()
        );
    }

    // Locate the spin-up -> spin-down transition
    let mut transition = None;
    for i in 1..trajectory.len() - 1 {
        let rising = trajectory.omega[i] > trajectory.omega[i - 1];
        let falling = trajectory.omega[i + 1] < trajectory.omega[i];
        if rising && falling {
            transition = Some(i);
            break;
        }
    }

    println!("\n{}", "=".repeat(64));
    match transition {
        Some(i) => {
            println!(
                "Regime transition (accretion spin-up -> dipole spin-down) at t ≈ {:.1} s",
                trajectory.time[i]
            );
            println!(
                "Peak ω = {:.1} rad/s (P = {:.4} ms)",
                trajectory.omega[i],
                trajectory.state(i).spin_period().to_milliseconds()
            );
        }
        None => println!("No spin-up/spin-down transition in this window"),
    }

    let last = trajectory.len() - 1;
    let final_state = trajectory.state(last);
    println!(
        "Final: P = {:.3} ms, Mdisc = {:.3e} g ({:.2e} of initial)",
        final_state.spin_period().to_milliseconds(),
        final_state.disc_mass,
        final_state.disc_mass / initial.disc_mass
    );
}
