//! Tabulated primary-mass function across 0.08 < M1 < 150 M☉.
//!
//! This is the mass distribution of single stars and binary primaries, not
//! the IMF of all stars: secondaries are drawn separately from the
//! mass-ratio distribution.

use rand::Rng;
use rand_chacha::ChaChaRng;

use crate::error::SampleError;
use crate::interpolate::{interp, inverse_cdf, linspace};

/// Lightest primary the table covers (hydrogen-burning limit)
pub const PRIMARY_MASS_FLOOR: f64 = 0.08;

const TABLE_SPAN: f64 = 150.0;
const TABLE_POINTS: usize = 150_000;

/// Cumulative primary-mass distribution with slopes -0.8 / -1.6 / -2.3
/// below 0.5, between 0.5 and 1, and above 1 M☉.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimaryMassFunction {
    mass: Vec<f64>,
    cdf: Vec<f64>,
}

impl PrimaryMassFunction {
    pub fn new() -> Self {
        let mass: Vec<f64> = linspace(0.0, TABLE_SPAN, TABLE_POINTS)
            .into_iter()
            .map(|m| m + PRIMARY_MASS_FLOOR)
            .collect();

        let pdf: Vec<f64> = mass.iter().map(|&m| density(m)).collect();

        let mut running = 0.0;
        let mut cdf: Vec<f64> = pdf
            .iter()
            .map(|f| {
                running += f;
                running - pdf[0]
            })
            .collect();
        let total = cdf[cdf.len() - 1];
        cdf.iter_mut().for_each(|c| *c /= total);

        Self { mass, cdf }
    }

    pub fn min_mass(&self) -> f64 {
        self.mass[0]
    }

    pub fn max_mass(&self) -> f64 {
        self.mass[self.mass.len() - 1]
    }

    /// Fraction of primaries lighter than `mass`.
    pub fn cdf_at(&self, mass: f64) -> f64 {
        interp(mass, &self.mass, &self.cdf)
    }

    /// CDF value below which draws are rejected for a minimum primary mass.
    pub fn cdf_floor(&self, minimum_mass: f64) -> Result<f64, SampleError> {
        let (floor, ceiling) = (self.min_mass(), self.max_mass());
        if !(minimum_mass >= floor && minimum_mass < ceiling) {
            return Err(SampleError::MinimumMassOutOfRange {
                minimum: minimum_mass,
                floor,
                ceiling,
            });
        }

        Ok(self.cdf_at(minimum_mass))
    }

    /// Draw a primary mass above the mass whose CDF value is `cdf_floor`.
    pub fn sample_above(&self, rng: &mut ChaChaRng, cdf_floor: f64) -> f64 {
        let u = cdf_floor + (1.0 - cdf_floor) * rng.random::<f64>();
        inverse_cdf(u, &self.cdf, &self.mass)
    }
}

impl Default for PrimaryMassFunction {
    fn default() -> Self {
        Self::new()
    }
}

/// Un-normalised dN/dM, continuous at 0.5 and 1 M☉.
fn density(mass: f64) -> f64 {
    if mass <= 0.5 {
        mass.powf(-0.8) / 0.5_f64.powf(1.6 - 0.8)
    } else if mass <= 1.0 {
        mass.powf(-1.6)
    } else {
        mass.powf(-2.3)
    }
}
