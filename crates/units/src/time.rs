use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Seconds in a Julian-ish year (365.242 days)
const SECONDS_PER_YEAR: f64 = 3.15569e7;

const SECONDS_PER_MYR: f64 = SECONDS_PER_YEAR * 1.0e6;

/// A duration: orbital periods and star-formation times.
///
/// Seconds are the base unit because orbital periods are handed to the
/// evolution code in seconds. Star-formation times are usually read back in
/// Myr.
///
/// # Examples
///
/// ```rust
/// use units::Time;
///
/// let period = Time::from_days(10.0);
/// assert_eq!(period.to_seconds(), 864_000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Time(f64); // Base unit: Seconds

impl Time {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_seconds(value: f64) -> Self {
        Self(value)
    }

    pub fn from_days(value: f64) -> Self {
        Self(value * SECONDS_PER_DAY)
    }

    /// Creates a time from log10 of a duration in days.
    pub fn from_log10_days(log_days: f64) -> Self {
        Self::from_days(10.0_f64.powf(log_days))
    }

    pub fn from_years(value: f64) -> Self {
        Self(value * SECONDS_PER_YEAR)
    }

    pub fn from_myr(value: f64) -> Self {
        Self(value * SECONDS_PER_MYR)
    }

    pub fn to_seconds(&self) -> f64 {
        self.0
    }

    pub fn to_days(&self) -> f64 {
        self.0 / SECONDS_PER_DAY
    }

    pub fn to_years(&self) -> f64 {
        self.0 / SECONDS_PER_YEAR
    }

    pub fn to_myr(&self) -> f64 {
        self.0 / SECONDS_PER_MYR
    }
}

impl Add for Time {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for Time {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}
