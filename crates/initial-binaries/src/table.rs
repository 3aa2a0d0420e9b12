//! Seed tables handed to a binary-evolution code.

use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};
use units::{Mass, Time};

use crate::error::SampleError;
use crate::independent::{
    initial_kstar, sample_primary, sample_secondary, sample_separation_eccentricity,
    sample_star_formation_history, select_binaries,
};
use crate::model::{EccentricityModel, PeriodModel, PrimaryModel, StarFormationModel};
use crate::multidim::PopulationSample;
use crate::settings::SamplerSettings;

/// Initial conditions of one binary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitialBinary {
    pub mass_1: Mass,
    pub mass_2: Mass,
    pub porb: Time,
    pub ecc: f64,
    /// Time the binary is evolved for
    pub tphys: Time,
    pub kstar_1: u8,
    pub kstar_2: u8,
    pub metallicity: f64,
}

/// What to draw with the independent-axis samplers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IndependentPopulationRequest {
    /// Number of primaries to draw before oversampling
    pub size: usize,
    /// Final kstar of the primary the population is aimed at
    pub kstar1_final: u8,
    pub metallicity: f64,
    pub primary_model: PrimaryModel,
    pub porb_model: PeriodModel,
    pub ecc_model: EccentricityModel,
    pub sfh_model: StarFormationModel,
}

impl Default for IndependentPopulationRequest {
    fn default() -> Self {
        Self {
            size: 1000,
            kstar1_final: 1,
            metallicity: 0.02,
            primary_model: PrimaryModel::default(),
            porb_model: PeriodModel::default(),
            ecc_model: EccentricityModel::default(),
            sfh_model: StarFormationModel::default(),
        }
    }
}

/// Binaries ready for evolution plus the bookkeeping needed to normalise
/// rates against the full stellar population drawn.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitialBinaryTable {
    pub binaries: Vec<InitialBinary>,
    pub single_count: usize,
    pub total_sampled_mass: Mass,
}

impl InitialBinaryTable {
    /// Rows for the binaries of a gridded sample, with evolution times drawn
    /// from `sfh_model`.
    pub fn from_population(
        sample: &PopulationSample,
        metallicity: f64,
        sfh_model: StarFormationModel,
        rng: &mut ChaChaRng,
    ) -> Self {
        let primaries = sample.binary_primaries();
        let tphys = sample_star_formation_history(rng, sfh_model, primaries.len());

        let binaries = primaries
            .iter()
            .zip(&sample.secondary_mass)
            .zip(sample.porb.iter().zip(&sample.ecc))
            .zip(&tphys)
            .map(|(((&m1, &m2), (&porb, &ecc)), &t)| {
                initial_binary(m1, m2, porb, ecc, t, metallicity)
            })
            .collect();

        Self {
            binaries,
            single_count: sample.single_count(),
            total_sampled_mass: Mass::from_solar_masses(sample.total_sampled_mass),
        }
    }

    pub fn len(&self) -> usize {
        self.binaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.binaries.is_empty()
    }
}

/// Assemble a population from the independent-axis samplers.
///
/// The total sampled mass counts every primary drawn, including those
/// removed by the remnant mass floor, plus the secondaries of the binaries.
pub fn build_independent_population(
    rng: &mut ChaChaRng,
    request: &IndependentPopulationRequest,
    settings: &SamplerSettings,
) -> Result<InitialBinaryTable, SampleError> {
    let primaries = sample_primary(
        rng,
        request.primary_model,
        request.kstar1_final,
        request.size,
        settings,
    )?;

    let (mass_1, singles) = select_binaries(rng, &primaries.masses);
    let mass_2 = sample_secondary(rng, &mass_1);
    let orbits =
        sample_separation_eccentricity(rng, &mass_1, &mass_2, request.porb_model, request.ecc_model);
    let tphys = sample_star_formation_history(rng, request.sfh_model, mass_1.len());

    let secondary_total: f64 = mass_2.iter().sum();
    let binaries = mass_1
        .iter()
        .zip(&mass_2)
        .zip(orbits.porb.iter().zip(&orbits.ecc))
        .zip(&tphys)
        .map(|(((&m1, &m2), (&porb, &ecc)), &t)| {
            initial_binary(m1, m2, porb, ecc, t, request.metallicity)
        })
        .collect();

    Ok(InitialBinaryTable {
        binaries,
        single_count: singles.len(),
        total_sampled_mass: Mass::from_solar_masses(primaries.total_sampled_mass + secondary_total),
    })
}

fn initial_binary(
    m1: f64,
    m2: f64,
    porb_seconds: f64,
    ecc: f64,
    tphys_myr: f64,
    metallicity: f64,
) -> InitialBinary {
    InitialBinary {
        mass_1: Mass::from_solar_masses(m1),
        mass_2: Mass::from_solar_masses(m2),
        porb: Time::from_seconds(porb_seconds),
        ecc,
        tphys: Time::from_myr(tphys_myr),
        kstar_1: initial_kstar(m1),
        kstar_2: initial_kstar(m2),
        metallicity,
    }
}
