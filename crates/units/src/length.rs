use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

/// Radius of the Sun in metres (6.955 × 10⁸ m)
pub const SOLAR_RADIUS_M: f64 = 6.955e8;

/// Solar radii per astronomical unit
const SOLAR_RADII_PER_AU: f64 = 215.0954;

/// An orbital separation.
///
/// Base unit is the solar radius, the natural scale for close binaries.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: Solar Radii

impl Length {
    pub fn from_solar_radii(value: f64) -> Self {
        Self(value)
    }

    pub fn from_meters(value: f64) -> Self {
        Self(value / SOLAR_RADIUS_M)
    }

    pub fn from_au(value: f64) -> Self {
        Self(value * SOLAR_RADII_PER_AU)
    }

    pub fn to_solar_radii(&self) -> f64 {
        self.0
    }

    pub fn to_meters(&self) -> f64 {
        self.0 * SOLAR_RADIUS_M
    }

    pub fn to_au(&self) -> f64 {
        self.0 / SOLAR_RADII_PER_AU
    }
}

impl Add for Length {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Mul<f64> for Length {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self(self.0 * scalar)
    }
}
