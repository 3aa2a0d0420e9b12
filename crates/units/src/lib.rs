//! Physical quantities for binary-star initial conditions.
//!
//! Masses are carried in solar masses, separations in solar radii and times
//! in seconds, matching the units expected by binary-evolution codes.

pub mod length;
pub mod mass;
pub mod orbit;
pub mod time;

#[cfg(test)]
mod mass_test;
#[cfg(test)]
mod orbit_test;
#[cfg(test)]
mod time_test;

pub use length::{Length, SOLAR_RADIUS_M};
pub use mass::{Mass, SOLAR_MASS_KG};
pub use orbit::{G_SI, orbital_period, separation};
pub use time::{SECONDS_PER_DAY, Time};
