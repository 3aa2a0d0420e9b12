//! Joint Monte Carlo draw of singles and binaries from the tabulated
//! Moe & Di Stefano (2017) distributions.
//!
//! Primaries outside the 0.8–40 M☉ grid adopt the statistics of the nearest
//! grid mass. Below 0.8 M☉ the companion frequency is scaled down so that the
//! binary fraction vanishes at 0.08 M☉, and the mass-ratio distribution is
//! truncated at q_min = 0.08 / M1 so that secondaries stay above the
//! hydrogen-burning limit.

use rand::Rng;
use rand_chacha::ChaChaRng;
use serde::Serialize;
use units::{Mass, Time};

use crate::error::SampleError;
use crate::grid::{DistributionGrids, MASS_RANGE};
use crate::imf::PRIMARY_MASS_FLOOR;
use crate::interpolate::{interp, inverse_cdf, truncate_cdf_below};

/// The companion drawn for a binary trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Companion {
    pub secondary_mass: Mass,
    pub porb: Time,
    pub ecc: f64,
}

/// Outcome of one Monte Carlo trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryDraw {
    pub primary_mass: Mass,
    /// `None` for a single star
    pub companion: Option<Companion>,
}

impl BinaryDraw {
    pub fn is_binary(&self) -> bool {
        self.companion.is_some()
    }

    /// Primary plus secondary, if any.
    pub fn system_mass(&self) -> Mass {
        self.primary_mass + self.companion.map_or(Mass::zero(), |c| c.secondary_mass)
    }
}

/// Accumulated trials of a sampling run.
///
/// `primary_mass` and `is_binary` have one entry per trial; the companion
/// columns hold binaries only, in trial order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulationSample {
    /// Primary masses of every trial (M☉)
    pub primary_mass: Vec<f64>,
    pub is_binary: Vec<bool>,
    /// Secondary masses of the binaries (M☉)
    pub secondary_mass: Vec<f64>,
    /// Orbital periods of the binaries (s)
    pub porb: Vec<f64>,
    pub ecc: Vec<f64>,
    /// Mass of every star drawn, singles and secondaries included (M☉)
    pub total_sampled_mass: f64,
}

impl PopulationSample {
    pub fn with_capacity(trials: usize) -> Self {
        Self {
            primary_mass: Vec::with_capacity(trials),
            is_binary: Vec::with_capacity(trials),
            ..Self::default()
        }
    }

    pub fn push(&mut self, draw: BinaryDraw) {
        self.primary_mass.push(draw.primary_mass.to_solar_masses());
        self.is_binary.push(draw.is_binary());
        if let Some(companion) = draw.companion {
            self.secondary_mass
                .push(companion.secondary_mass.to_solar_masses());
            self.porb.push(companion.porb.to_seconds());
            self.ecc.push(companion.ecc);
        }
        self.total_sampled_mass += draw.system_mass().to_solar_masses();
    }

    pub fn len(&self) -> usize {
        self.primary_mass.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primary_mass.is_empty()
    }

    pub fn binary_count(&self) -> usize {
        self.secondary_mass.len()
    }

    pub fn single_count(&self) -> usize {
        self.len() - self.binary_count()
    }

    /// Primary masses of the binaries, aligned with the companion columns.
    pub fn binary_primaries(&self) -> Vec<f64> {
        self.primary_mass
            .iter()
            .zip(&self.is_binary)
            .filter_map(|(&m, &binary)| binary.then_some(m))
            .collect()
    }

    /// Primary masses of the single stars.
    pub fn single_primaries(&self) -> Vec<f64> {
        self.primary_mass
            .iter()
            .zip(&self.is_binary)
            .filter_map(|(&m, &binary)| (!binary).then_some(m))
            .collect()
    }
}

/// Draws trials against a shared set of grids.
#[derive(Debug, Clone, Copy)]
pub struct MultiDimSampler<'g> {
    grids: &'g DistributionGrids,
    cdf_floor: f64,
}

impl<'g> MultiDimSampler<'g> {
    /// Sampler for primaries of at least `minimum_mass` M☉.
    pub fn new(grids: &'g DistributionGrids, minimum_mass: f64) -> Result<Self, SampleError> {
        let cdf_floor = grids.primary_mass_function().cdf_floor(minimum_mass)?;
        Ok(Self { grids, cdf_floor })
    }

    /// Run one trial.
    pub fn draw(&self, rng: &mut ChaChaRng) -> BinaryDraw {
        let grids = self.grids;
        let m1 = grids
            .primary_mass_function()
            .sample_above(rng, self.cdf_floor);
        let mass_index = grids.nearest_mass_index(m1);

        let period_cdf = grids.period_cdf().column(mass_index);
        let scale = low_mass_binary_scale(m1);
        let binary_fraction = grids.binary_fraction(mass_index) * scale;

        let u: f64 = rng.random();
        if u >= binary_fraction {
            return BinaryDraw {
                primary_mass: Mass::from_solar_masses(m1),
                companion: None,
            };
        }

        // u is uniform on [0, binary fraction) here, so it doubles as the
        // period draw against the rescaled period CDF.
        let log_p = inverse_cdf(u / scale, period_cdf, grids.log_period());
        let period_index = grids.nearest_period_index(log_p);

        let ecc = inverse_cdf(
            rng.random(),
            grids.eccentricity_cdf().slice(period_index, mass_index),
            grids.eccentricity(),
        );

        let q_cdf = grids.mass_ratio_cdf().slice(period_index, mass_index);
        let q = if m1 < MASS_RANGE.0 {
            let q_min = PRIMARY_MASS_FLOOR / m1;
            let (cdf, axis) = truncate_cdf_below(q_cdf, grids.mass_ratio(), q_min);
            inverse_cdf(rng.random(), &cdf, &axis)
        } else {
            inverse_cdf(rng.random(), q_cdf, grids.mass_ratio())
        };

        BinaryDraw {
            primary_mass: Mass::from_solar_masses(m1),
            companion: Some(Companion {
                secondary_mass: Mass::from_solar_masses(q * m1),
                porb: Time::from_log10_days(log_p),
                ecc,
            }),
        }
    }
}

/// Draw `size` independent trials of primaries above `minimum_mass` M☉.
///
/// # Example
/// ```no_run
/// use initial_binaries::{build_distribution_grids, sample_initial_population};
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
///
/// let grids = build_distribution_grids();
/// let mut rng = ChaChaRng::seed_from_u64(42);
/// let sample = sample_initial_population(&mut rng, &grids, 0.08, 1000).unwrap();
/// assert_eq!(sample.primary_mass.len(), 1000);
/// ```
pub fn sample_initial_population(
    rng: &mut ChaChaRng,
    grids: &DistributionGrids,
    minimum_mass: f64,
    size: usize,
) -> Result<PopulationSample, SampleError> {
    let sampler = MultiDimSampler::new(grids, minimum_mass)?;

    let mut sample = PopulationSample::with_capacity(size);
    for _ in 0..size {
        sample.push(sampler.draw(rng));
    }

    if size > 0 && sample.binary_count() == 0 {
        log::warn!(
            "no binaries among {size} trials with M1 >= {minimum_mass} Msun; \
             the binary fraction may be zero over this mass range"
        );
    }

    Ok(sample)
}

/// Scale applied to companion frequencies below the grid's lowest mass:
/// log-linear from 0 at 0.08 M☉ to 1 at 0.8 M☉.
fn low_mass_binary_scale(m1: f64) -> f64 {
    if m1 > MASS_RANGE.0 {
        return 1.0;
    }

    interp(
        m1.log10(),
        &[PRIMARY_MASS_FLOOR.log10(), MASS_RANGE.0.log10()],
        &[0.0, 1.0],
    )
}
