//! Kepler's third law in SI, bridging separations and periods.

use std::f64::consts::PI;

use crate::{Length, Mass, Time};

/// Gravitational constant in m³ kg⁻¹ s⁻²
pub const G_SI: f64 = 6.67384e-11;

/// Orbital period of a binary with the given separation and total mass.
///
/// P = 2π √(a³ / G M)
pub fn orbital_period(separation: Length, total_mass: Mass) -> Time {
    let a = separation.to_meters();
    Time::from_seconds((4.0 * PI * PI * a.powi(3) / (G_SI * total_mass.to_kg())).sqrt())
}

/// Semi-major axis of a binary with the given period and total mass.
pub fn separation(period: Time, total_mass: Mass) -> Length {
    let p = period.to_seconds();
    Length::from_meters((G_SI * total_mass.to_kg() * p * p / (4.0 * PI * PI)).cbrt())
}
