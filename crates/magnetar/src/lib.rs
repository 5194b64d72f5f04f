//! Spin evolution of a magnetar coupled to a supernova fallback disc.
//!
//! After a disruption event a rapidly rotating, highly magnetised neutron
//! star can be left surrounded by a debris disc. The star's magnetosphere,
//! the disc's viscous inflow and the declining fallback supply then compete
//! for the star's angular momentum: matter reaching inside the corotation
//! radius spins the star up, while propeller ejection and magnetic dipole
//! radiation spin it down. This crate evaluates the coupled disc-mass and
//! spin derivatives for that system and integrates them over the
//! seconds-to-weeks window where the competition plays out.
//!
//! The derivative evaluator is a pure function of (state, time, parameters);
//! the adaptive integrator in the `odeint` crate drives it and owns all
//! step-size and error-control policy.

pub mod constants;
pub mod evolution;
pub mod params;
pub mod radii;
pub mod simulation;
pub mod state;
pub mod torques;

#[cfg(test)]
mod params_test;
#[cfg(test)]
mod radii_test;
#[cfg(test)]
mod torques_test;

pub use evolution::{derivatives, Derivatives, SpinEvolution};
pub use params::ModelParams;
pub use simulation::{default_time_grid, log_time_grid, run, Trajectory};
pub use state::State;
