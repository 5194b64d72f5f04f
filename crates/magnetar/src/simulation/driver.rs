//! Integration driver for full spin-evolution runs.

use odeint::{Dopri5, Error};
use units::AngularVelocity;

use crate::evolution::SpinEvolution;
use crate::params::ModelParams;
use crate::state::State;

/// Time series of the integrated quantities for one scenario.
#[derive(Debug, Clone)]
pub struct Trajectory {
    /// Sample times (s)
    pub time: Vec<f64>,
    /// Disc mass at each sample (g)
    pub disc_mass: Vec<f64>,
    /// Angular frequency at each sample (rad/s)
    pub omega: Vec<f64>,
}

impl Trajectory {
    /// Number of recorded samples.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Whether any samples were recorded.
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// State at sample `i`.
    pub fn state(&self, i: usize) -> State {
        State {
            disc_mass: self.disc_mass[i],
            omega: self.omega[i],
        }
    }

    /// Spin period at each sample (ms).
    pub fn spin_period_ms(&self) -> Vec<f64> {
        self.omega
            .iter()
            .map(|&w| {
                AngularVelocity::from_rad_per_sec(w)
                    .to_spin_period()
                    .to_milliseconds()
            })
            .collect()
    }
}

/// Integrate a scenario across the given output grid.
///
/// `t_out[0]` is the time the initial state refers to. Each call owns its
/// parameter set and shares nothing mutable, so parameter sweeps can run
/// scenarios on as many threads as they like.
///
/// # Examples
///
/// ```rust
/// use magnetar::{log_time_grid, run, ModelParams, State};
///
/// let params = ModelParams::fiducial();
/// let initial = State::from_observables(1.0, params.disc_mass);
/// let grid = log_time_grid(1.0, 1.0e4, 101);
///
/// let trajectory = run(params, initial, &grid).unwrap();
/// assert_eq!(trajectory.len(), 101);
/// ```
pub fn run(params: ModelParams, initial: State, t_out: &[f64]) -> Result<Trajectory, Error> {
    let system = SpinEvolution::new(params);
    let solver = Dopri5::default();
    let solution = solver.solve(&system, t_out, initial.to_array())?;

    Ok(Trajectory {
        disc_mass: solution.y.iter().map(|y| y[0]).collect(),
        omega: solution.y.iter().map(|y| y[1]).collect(),
        time: solution.t,
    })
}
