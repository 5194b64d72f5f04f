//! Full-run integration driver.
//!
//! Couples the derivative evaluator to the adaptive integrator and samples
//! the trajectory on a log-spaced output grid. The driver holds no state of
//! its own: one call is one scenario, and independent scenarios can be
//! integrated concurrently without coordination.

mod driver;
mod grid;


pub use driver::{run, Trajectory};
pub use grid::{default_time_grid, log_time_grid};
