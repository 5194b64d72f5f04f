//! Output time sampling.

/// Log-spaced time grid from `t_start` to `t_end`, inclusive.
///
/// Uniform in log10 with both endpoints present, so decades of early
/// evolution are resolved as finely as the late tail.
pub fn log_time_grid(t_start: f64, t_end: f64, n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![t_start];
    }

    let log_start = t_start.log10();
    let log_end = t_end.log10();
    let step = (log_end - log_start) / (n - 1) as f64;

    (0..n)
        .map(|i| 10.0_f64.powf(log_start + step * i as f64))
        .collect()
}

/// Reference sampling grid: 1 s to 10⁶ s over 10001 log-spaced points.
pub fn default_time_grid() -> Vec<f64> {
    log_time_grid(1.0, 1.0e6, 10_001)
}
