//! Adaptive Runge-Kutta integration for small ODE systems.
//!
//! This crate supplies the time integration for the spin-evolution model:
//! the model exposes a pure right-hand side through [`OdeSystem`] and the
//! [`Dopri5`] integrator owns step-size adaptation and error control. The
//! split keeps the physics side-effect-free: the integrator is free to
//! probe trial steps and revisit time values, and the model never notices.

mod dopri5;
mod error;
mod solution;
mod system;


pub use dopri5::{Dopri5, Tolerances};
pub use error::Error;
pub use solution::Solution;
pub use system::OdeSystem;
