use units::SOLAR_MASS_G;

/// Gravitational constant (cm³/(g·s²))
pub const G: f64 = 6.674e-8;

/// Speed of light (cm/s)
pub const C: f64 = 3.0e10;

/// Magnetar radius (cm)
pub const R: f64 = 1.0e6;

/// Magnetar mass (g)
pub const M: f64 = 1.4 * SOLAR_MASS_G;

/// Moment of inertia (g·cm²)
pub const I: f64 = (4.0 / 5.0) * M * R * R;

/// Standard gravitational parameter GM (cm³/s²)
pub const GM: f64 = G * M;
