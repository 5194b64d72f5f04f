//! Dormand-Prince 5(4) adaptive step integration.
//!
//! Classic embedded Runge-Kutta pair: the fifth-order solution advances the
//! state, the fourth-order companion estimates the local error, and the step
//! size is rescaled from the error norm. Output times are honored exactly by
//! clipping steps at output boundaries, so no interpolation is involved.

use crate::error::Error;
use crate::solution::Solution;
use crate::system::OdeSystem;

// Dormand-Prince coefficients (Butcher tableau).
const C: [f64; 7] = [0.0, 1.0 / 5.0, 3.0 / 10.0, 4.0 / 5.0, 8.0 / 9.0, 1.0, 1.0];
const A2: [f64; 1] = [1.0 / 5.0];
const A3: [f64; 2] = [3.0 / 40.0, 9.0 / 40.0];
const A4: [f64; 3] = [44.0 / 45.0, -56.0 / 15.0, 32.0 / 9.0];
const A5: [f64; 4] = [
    19372.0 / 6561.0,
    -25360.0 / 2187.0,
    64448.0 / 6561.0,
    -212.0 / 729.0,
];
const A6: [f64; 5] = [
    9017.0 / 3168.0,
    -355.0 / 33.0,
    46732.0 / 5247.0,
    49.0 / 176.0,
    -5103.0 / 18656.0,
];
/// Fifth-order weights (the accepted solution)
const B5: [f64; 6] = [
    35.0 / 384.0,
    0.0,
    500.0 / 1113.0,
    125.0 / 192.0,
    -2187.0 / 6784.0,
    11.0 / 84.0,
];
/// Embedded fourth-order weights (the error estimator)
const B4: [f64; 7] = [
    5179.0 / 57600.0,
    0.0,
    7571.0 / 16695.0,
    393.0 / 640.0,
    -92097.0 / 339200.0,
    187.0 / 2100.0,
    1.0 / 40.0,
];

/// Safety factor applied to the optimal step estimate
const SAFETY: f64 = 0.9;

/// Step growth/shrink limits per attempt
const MIN_SCALE: f64 = 0.2;
const MAX_SCALE: f64 = 5.0;

/// Relative and absolute error tolerances for step acceptance.
///
/// Each component of the local error is scaled by
/// `atol + rtol * |y|` before taking the RMS norm; a step is accepted when
/// the norm is at most one.
#[derive(Debug, Clone, Copy)]
pub struct Tolerances {
    /// Relative tolerance
    pub rtol: f64,
    /// Absolute tolerance
    pub atol: f64,
}

impl Tolerances {
    pub fn new(rtol: f64, atol: f64) -> Self {
        Self { rtol, atol }
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            rtol: 1.0e-8,
            atol: 1.0e-8,
        }
    }
}

/// Dormand-Prince 5(4) adaptive integrator.
///
/// The integrator is stateless between calls: each `solve` or `integrate`
/// invocation carries its own step size and budget, so one instance can be
/// shared across independent runs.
///
/// # Examples
///
/// ```
/// use odeint::{Dopri5, OdeSystem, Tolerances};
///
/// struct Decay;
///
/// impl OdeSystem<1> for Decay {
///     fn rhs(&self, _t: f64, y: &[f64; 1], dydt: &mut [f64; 1]) {
///         dydt[0] = -y[0];
///     }
/// }
///
/// let solver = Dopri5::new(Tolerances::new(1e-10, 1e-10));
/// let yf = solver.integrate(&Decay, 0.0, [1.0], 1.0).unwrap();
/// assert!((yf[0] - (-1.0f64).exp()).abs() < 1e-8);
/// ```
#[derive(Debug, Clone)]
pub struct Dopri5 {
    /// Error tolerances for step acceptance
    pub tol: Tolerances,
    /// Attempted-step budget per solve call
    pub max_steps: usize,
}

impl Dopri5 {
    /// Creates an integrator with the given tolerances and the default
    /// step budget.
    pub fn new(tol: Tolerances) -> Self {
        Self {
            tol,
            max_steps: 1_000_000,
        }
    }

    /// Integrate the system across `t_out`, returning the state at every
    /// requested time.
    ///
    /// `t_out[0]` is the initial time for `y0`; the remaining entries must
    /// be strictly increasing (documented precondition, not checked; a
    /// non-increasing entry is recorded without advancing the state).
    pub fn solve<const N: usize, S: OdeSystem<N>>(
        &self,
        system: &S,
        t_out: &[f64],
        y0: [f64; N],
    ) -> Result<Solution<N>, Error> {
        let mut solution = Solution {
            t: Vec::with_capacity(t_out.len()),
            y: Vec::with_capacity(t_out.len()),
        };
        let Some((&t0, targets)) = t_out.split_first() else {
            return Ok(solution);
        };

        let mut t = t0;
        let mut y = y0;
        solution.t.push(t);
        solution.y.push(y);

        let span = t_out.last().unwrap() - t0;
        let mut h = span * 1.0e-4;
        let mut steps = 0;

        for &t_target in targets {
            while t < t_target {
                if steps >= self.max_steps {
                    return Err(Error::MaxStepsExceeded {
                        t,
                        max_steps: self.max_steps,
                    });
                }
                steps += 1;

                let clipped = h >= t_target - t;
                let h_try = if clipped { t_target - t } else { h };

                let (y_new, err) = self.try_step(system, t, &y, h_try);
                let accepted = err <= 1.0; // NaN error rejects

                if accepted {
                    t = if clipped { t_target } else { t + h_try };
                    y = y_new;
                }

                // Rescale from the error norm. A non-finite norm means the
                // derivatives blew up inside the step; shrink hard.
                let scale = if err.is_finite() {
                    (SAFETY * err.powf(-0.2)).clamp(MIN_SCALE, MAX_SCALE)
                } else {
                    MIN_SCALE
                };

                // A step that was only shortened to land on the output time
                // keeps the stored size; anything else is rescaled.
                if !(accepted && clipped) {
                    h = h_try * scale;
                }

                let floor = 100.0 * f64::EPSILON * t.abs().max(1.0);
                if h < floor {
                    return Err(Error::StepSizeUnderflow { t });
                }
            }

            solution.t.push(t_target);
            solution.y.push(y);
        }

        Ok(solution)
    }

    /// Integrate from `t0` to `t1` and return only the final state.
    pub fn integrate<const N: usize, S: OdeSystem<N>>(
        &self,
        system: &S,
        t0: f64,
        y0: [f64; N],
        t1: f64,
    ) -> Result<[f64; N], Error> {
        let solution = self.solve(system, &[t0, t1], y0)?;
        Ok(*solution.y.last().unwrap())
    }

    /// Attempt one step of size `h` from (t, y).
    ///
    /// Returns the fifth-order solution and the scaled RMS error norm; the
    /// caller decides acceptance.
    fn try_step<const N: usize, S: OdeSystem<N>>(
        &self,
        system: &S,
        t: f64,
        y: &[f64; N],
        h: f64,
    ) -> ([f64; N], f64) {
        let mut k = [[0.0; N]; 7];
        let mut y_stage = [0.0; N];

        system.rhs(t, y, &mut k[0]);

        for i in 0..N {
            y_stage[i] = y[i] + h * A2[0] * k[0][i];
        }
        system.rhs(t + C[1] * h, &y_stage, &mut k[1]);

        for i in 0..N {
            y_stage[i] = y[i] + h * (A3[0] * k[0][i] + A3[1] * k[1][i]);
        }
        system.rhs(t + C[2] * h, &y_stage, &mut k[2]);

        for i in 0..N {
            y_stage[i] = y[i] + h * (A4[0] * k[0][i] + A4[1] * k[1][i] + A4[2] * k[2][i]);
        }
        system.rhs(t + C[3] * h, &y_stage, &mut k[3]);

        for i in 0..N {
            y_stage[i] = y[i]
                + h * (A5[0] * k[0][i] + A5[1] * k[1][i] + A5[2] * k[2][i] + A5[3] * k[3][i]);
        }
        system.rhs(t + C[4] * h, &y_stage, &mut k[4]);

        for i in 0..N {
            y_stage[i] = y[i]
                + h * (A6[0] * k[0][i]
                    + A6[1] * k[1][i]
                    + A6[2] * k[2][i]
                    + A6[3] * k[3][i]
                    + A6[4] * k[4][i]);
        }
        system.rhs(t + C[5] * h, &y_stage, &mut k[5]);

        let mut y5 = [0.0; N];
        for i in 0..N {
            y5[i] = y[i]
                + h * (B5[0] * k[0][i]
                    + B5[2] * k[2][i]
                    + B5[3] * k[3][i]
                    + B5[4] * k[4][i]
                    + B5[5] * k[5][i]);
        }
        system.rhs(t + h, &y5, &mut k[6]);

        let mut err_sq = 0.0;
        for i in 0..N {
            let y4 = y[i]
                + h * (B4[0] * k[0][i]
                    + B4[2] * k[2][i]
                    + B4[3] * k[3][i]
                    + B4[4] * k[4][i]
                    + B4[5] * k[5][i]
                    + B4[6] * k[6][i]);
            let tol = self.tol.atol + self.tol.rtol * y[i].abs().max(y5[i].abs());
            let e = (y5[i] - y4) / tol;
            err_sq += e * e;
        }

        (y5, (err_sq / N as f64).sqrt())
    }
}

impl Default for Dopri5 {
    fn default() -> Self {
        Self::new(Tolerances::default())
    }
}
