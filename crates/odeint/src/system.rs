/// Right-hand side of a first-order ODE system y' = f(t, y).
///
/// The integrator calls `rhs` at whatever (t, y) pairs its step control
/// requires, including trial evaluations that are later rejected and
/// re-probed time values, so implementations must be pure functions of
/// their arguments: no caching, no interior mutability, no I/O.
///
/// # Example
///
/// ```
/// use odeint::OdeSystem;
///
/// struct HarmonicOscillator {
///     omega: f64,
/// }
///
/// impl OdeSystem<2> for HarmonicOscillator {
///     fn rhs(&self, _t: f64, y: &[f64; 2], dydt: &mut [f64; 2]) {
///         dydt[0] = y[1];
///         dydt[1] = -self.omega * self.omega * y[0];
///     }
/// }
/// ```
pub trait OdeSystem<const N: usize> {
    /// Fill `dydt` with the derivative of the state at (t, y).
    fn rhs(&self, t: f64, y: &[f64; N], dydt: &mut [f64; N]);
}
