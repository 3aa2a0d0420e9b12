use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Sub};

/// Mass of the Sun in kilograms (1.9891 × 10³⁰ kg)
pub const SOLAR_MASS_KG: f64 = 1.9891e30;

/// A stellar mass.
///
/// Solar masses are the base unit; every sampler in the workspace draws
/// masses in M☉ and only converts to SI when Kepler's law needs it.
///
/// # Examples
///
/// ```rust
/// use units::Mass;
///
/// let primary = Mass::from_solar_masses(10.0);
/// let secondary = primary * 0.4;
///
/// assert_eq!((primary + secondary).to_solar_masses(), 14.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mass(f64); // Base unit: Solar Masses

impl Mass {
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Mass` from a value in solar masses.
    pub fn from_solar_masses(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Mass` from a value in kilograms.
    pub fn from_kg(value: f64) -> Self {
        Self(value / SOLAR_MASS_KG)
    }

    pub fn to_solar_masses(&self) -> f64 {
        self.0
    }

    pub fn to_kg(&self) -> f64 {
        self.0 * SOLAR_MASS_KG
    }
}

impl Add for Mass {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Mass {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Mass {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl Mul<f64> for Mass {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self(self.0 * scalar)
    }
}

impl Mul<Mass> for f64 {
    type Output = Mass;

    fn mul(self, mass: Mass) -> Mass {
        Mass(self * mass.0)
    }
}

impl Div<f64> for Mass {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Self(self.0 / scalar)
    }
}

/// Ratio of two masses, e.g. q = M₂ / M₁.
impl Div for Mass {
    type Output = f64;

    fn div(self, other: Self) -> f64 {
        self.0 / other.0
    }
}

impl Sum for Mass {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}
