//! Single-axis samplers for building a population from marginal
//! distributions.
//!
//! These are independent inverse-transform draws: fast, but without the
//! period–mass-ratio–eccentricity correlations of the gridded sampler.

use rand::Rng;
use rand_chacha::ChaChaRng;
use units::{Length, Mass, Time, orbital_period};

use crate::error::SampleError;
use crate::model::{EccentricityModel, PeriodModel, PrimaryModel, StarFormationModel};
use crate::random::{sample_gaussian, sample_power_law, sample_uniform};
use crate::settings::SamplerSettings;

/// Upper end of the Kroupa (1993) uniform deviate, the CDF value at 100 M☉
const KROUPA_CDF_MAX: f64 = 0.9999797;
/// Kroupa (1993) CDF values at 0.5 and 1 M☉
const KROUPA_LOW_CUTOFF: f64 = 0.740074;
const KROUPA_HIGH_CUTOFF: f64 = 0.908422;

const SALPETER_RANGE: (f64, f64) = (0.1, 100.0);
const SALPETER_SLOPE: f64 = -2.35;

/// Han (1998): CDF value at the break a₀ = 10 R☉ in separation
const HAN_BREAK_CDF: f64 = 0.0583333;
const HAN_BREAK_SEPARATION: f64 = 10.0;
/// dN/d ln a above the break
const HAN_FLAT_DENSITY: f64 = 0.07;
/// Normalisation of the a^1.2 segment below the break
const HAN_LOW_SCALE: f64 = 0.00368058;

/// Log-normal period distribution, log10(P / day)
const LOG_PERIOD_MEAN: f64 = 5.03;
const LOG_PERIOD_SIGMA: f64 = 2.28;

/// Lower end of the uniform mass-ratio distribution
const MIN_MASS_RATIO: f64 = 0.001;

/// Age of the Galactic disk in Myr
const DISK_AGE_MYR: f64 = 10_000.0;
const BURST_DURATION_MYR: f64 = 1_000.0;

/// Primaries at or above this mass start on the main sequence (kstar 1)
const MAIN_SEQUENCE_MASS: f64 = 0.7;

/// Primary masses drawn for a population, possibly post-filtered.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimarySample {
    /// Primaries kept after the remnant mass floor (M☉)
    pub masses: Vec<f64>,
    /// Mass of every primary drawn, before filtering (M☉)
    pub total_sampled_mass: f64,
}

/// Separations, periods and eccentricities for a set of binaries.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitSample {
    /// Orbital periods (s)
    pub porb: Vec<f64>,
    pub ecc: Vec<f64>,
}

/// Draw primary masses for `size` requested systems.
///
/// When `kstar1_final` asks for a compact-object remnant the draw is
/// oversampled and then cut at an absolute mass floor, as configured in
/// `settings`.
pub fn sample_primary(
    rng: &mut ChaChaRng,
    model: PrimaryModel,
    kstar1_final: u8,
    size: usize,
    settings: &SamplerSettings,
) -> Result<PrimarySample, SampleError> {
    settings.validate()?;

    let factor = settings.oversampling_factor(kstar1_final);
    if factor > 1 {
        log::info!(
            "oversampling {model} primaries {factor}x for final kstar {kstar1_final}"
        );
    }

    let draws = size * factor;
    let mut masses: Vec<f64> = match model {
        PrimaryModel::Kroupa93 => (0..draws).map(|_| kroupa93_mass(rng)).collect(),
        PrimaryModel::Salpeter55 => (0..draws)
            .map(|_| sample_power_law(SALPETER_RANGE.0, SALPETER_RANGE.1, SALPETER_SLOPE, rng))
            .collect(),
    };

    let total_sampled_mass: f64 = masses.iter().sum();
    if let Some(floor) = settings.mass_floor(kstar1_final) {
        masses.retain(|&m| m > floor);
    }

    Ok(PrimarySample {
        masses,
        total_sampled_mass,
    })
}

/// Kroupa, Tout & Gilmore (1993) broken power law, inverted analytically.
fn kroupa93_mass(rng: &mut ChaChaRng) -> f64 {
    let u = rng.random_range(0.0..KROUPA_CDF_MAX);

    if u <= KROUPA_LOW_CUTOFF {
        (0.1_f64.powf(-3.0 / 10.0) - u / 0.968533).powf(-10.0 / 3.0)
    } else if u < KROUPA_HIGH_CUTOFF {
        (0.5_f64.powf(-6.0 / 5.0) - (u - KROUPA_LOW_CUTOFF) / 0.129758).powf(-5.0 / 6.0)
    } else {
        (1.0 - (u - KROUPA_HIGH_CUTOFF) / 0.0915941).powf(-10.0 / 17.0)
    }
}

/// Secondary masses from a uniform mass ratio on (0.001, 1)
/// (Mazeh et al. 1992; Goldberg & Mazeh 1994).
pub fn sample_secondary(rng: &mut ChaChaRng, primary_mass: &[f64]) -> Vec<f64> {
    primary_mass
        .iter()
        .map(|&m1| m1 * rng.random_range(MIN_MASS_RATIO..1.0))
        .collect()
}

/// Binary fraction of a primary, 1/2 + 1/4 log10(M1) (van Haaften et al. 2012).
pub fn binary_fraction(primary_mass: f64) -> f64 {
    0.5 + 0.25 * primary_mass.log10()
}

/// Split primaries into `(binaries, singles)`.
///
/// Every input lands in exactly one output, in input order.
pub fn select_binaries(rng: &mut ChaChaRng, primary_mass: &[f64]) -> (Vec<f64>, Vec<f64>) {
    primary_mass
        .iter()
        .copied()
        .partition(|&m1| binary_fraction(m1) > rng.random::<f64>())
}

/// Han (1998) separations in solar radii: dN/d ln a ∝ a^1.2 below 10 R☉ and
/// flat above.
pub fn sample_separation(rng: &mut ChaChaRng, size: usize) -> Vec<Length> {
    (0..size)
        .map(|_| {
            let u: f64 = rng.random();
            let a = if u <= HAN_BREAK_CDF {
                (u / HAN_LOW_SCALE).powf(5.0 / 6.0)
            } else {
                HAN_BREAK_SEPARATION * ((u - HAN_BREAK_CDF) / HAN_FLAT_DENSITY).exp()
            };
            Length::from_solar_radii(a)
        })
        .collect()
}

/// Orbital periods in seconds for binaries with the given component masses.
pub fn sample_porb(
    rng: &mut ChaChaRng,
    mass_1: &[f64],
    mass_2: &[f64],
    model: PeriodModel,
) -> Vec<f64> {
    let size = mass_1.len().min(mass_2.len());

    match model {
        PeriodModel::Han => sample_separation(rng, size)
            .into_iter()
            .zip(mass_1.iter().zip(mass_2))
            .map(|(a, (&m1, &m2))| {
                orbital_period(a, Mass::from_solar_masses(m1 + m2)).to_seconds()
            })
            .collect(),
        PeriodModel::LogNormal => (0..size)
            .map(|_| {
                let log_p = sample_gaussian(rng, LOG_PERIOD_MEAN, LOG_PERIOD_SIGMA);
                Time::from_log10_days(log_p).to_seconds()
            })
            .collect(),
    }
}

/// Orbital eccentricities.
pub fn sample_ecc(rng: &mut ChaChaRng, model: EccentricityModel, size: usize) -> Vec<f64> {
    match model {
        // f(e) = 2e inverts to e = √u
        EccentricityModel::Thermal => (0..size).map(|_| rng.random::<f64>().sqrt()).collect(),
        EccentricityModel::Uniform => (0..size).map(|_| rng.random::<f64>()).collect(),
    }
}

/// Periods and eccentricities for binaries with the given component masses.
pub fn sample_separation_eccentricity(
    rng: &mut ChaChaRng,
    mass_1: &[f64],
    mass_2: &[f64],
    porb_model: PeriodModel,
    ecc_model: EccentricityModel,
) -> OrbitSample {
    let porb = sample_porb(rng, mass_1, mass_2, porb_model);
    let ecc = sample_ecc(rng, ecc_model, porb.len());
    OrbitSample { porb, ecc }
}

/// Evolution times in Myr under the given star-formation history.
pub fn sample_star_formation_history(
    rng: &mut ChaChaRng,
    model: StarFormationModel,
    size: usize,
) -> Vec<f64> {
    match model {
        StarFormationModel::Constant => (0..size)
            .map(|_| sample_uniform(rng, 0.0, DISK_AGE_MYR))
            .collect(),
        StarFormationModel::Burst => (0..size)
            .map(|_| DISK_AGE_MYR - sample_uniform(rng, 0.0, BURST_DURATION_MYR))
            .collect(),
    }
}

/// Initial stellar type: 0 (deeply convective low-mass main sequence) below
/// 0.7 M☉, 1 (main sequence) otherwise.
pub fn initial_kstar(mass: f64) -> u8 {
    if mass < MAIN_SEQUENCE_MASS { 0 } else { 1 }
}

pub fn classify_initial_type(mass: &[f64]) -> Vec<u8> {
    mass.iter().map(|&m| initial_kstar(m)).collect()
}
