/// Trajectory sampled at the requested output times.
///
/// `t[i]` and `y[i]` are paired; the first entry is the initial condition
/// passed to the solver.
#[derive(Debug, Clone)]
pub struct Solution<const N: usize> {
    /// Sample times
    pub t: Vec<f64>,
    /// State at each sample time
    pub y: Vec<[f64; N]>,
}

impl<const N: usize> Solution<N> {
    /// Number of recorded samples.
    pub fn len(&self) -> usize {
        self.t.len()
    }

    /// Whether any samples were recorded.
    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// The last recorded (t, y) pair.
    pub fn last(&self) -> Option<(f64, &[f64; N])> {
        self.t.last().map(|t| (*t, self.y.last().unwrap()))
    }

    /// One state component as a time series.
    pub fn component(&self, i: usize) -> Vec<f64> {
        self.y.iter().map(|y| y[i]).collect()
    }
}
