use thiserror::Error;

/// Integration failure modes.
///
/// The integrator does not inspect the state for physical validity; it only
/// notices that step control stopped converging. Non-finite derivatives show
/// up as endless step rejection and surface as [`Error::StepSizeUnderflow`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// The step size fell below the numerical floor before the next output
    /// time was reached.
    #[error("step size underflow at t = {t}")]
    StepSizeUnderflow {
        /// Time at which step control gave up
        t: f64,
    },

    /// The step budget was exhausted before the end of the interval.
    #[error("exceeded {max_steps} steps at t = {t}")]
    MaxStepsExceeded {
        /// Time reached when the budget ran out
        t: f64,
        /// The configured budget
        max_steps: usize,
    },
}
