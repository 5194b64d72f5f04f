pub mod angular_velocity;
pub mod length;
pub mod mass;
pub mod mass_rate;
pub mod time;


pub use angular_velocity::AngularVelocity;
pub use length::Length;
pub use mass::{Mass, SOLAR_MASS_G};
pub use mass_rate::MassRate;
pub use time::{Time, SECONDS_PER_YEAR};
