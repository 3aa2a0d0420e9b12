//! Monte Carlo initial conditions for binary-star population synthesis.
//!
//! Two families of samplers produce the same data product (primary and
//! secondary masses, orbital periods in seconds, eccentricities, and the
//! total stellar mass drawn):
//!
//! - [`multidim`]: joint draws from gridded Moe & Di Stefano (2017)
//!   distributions, where period, mass ratio and eccentricity are correlated
//!   with each other and with the primary mass. Build the grids once with
//!   [`build_distribution_grids`] and reuse them for every draw.
//! - [`independent`]: fast single-axis draws from selectable marginal
//!   models, assembled into evolution-ready rows by
//!   [`build_independent_population`].
//!
//! All randomness comes from a caller-seeded [`rand_chacha::ChaChaRng`];
//! nothing here seeds or reseeds a generator.

pub mod error;
pub mod fits;
pub mod grid;
pub mod imf;
pub mod independent;
pub mod interpolate;
pub mod model;
pub mod multidim;
pub mod quadrature;
pub mod random;
pub mod regime;
pub mod settings;
pub mod table;

#[cfg(test)]
mod fits_test;
#[cfg(test)]
mod interpolate_test;
#[cfg(test)]
mod model_test;
#[cfg(test)]
mod test_grids;

pub use error::SampleError;
pub use grid::{CdfTensor, DistributionGrids, GridShape, PeriodCdf, build_distribution_grids};
pub use imf::PrimaryMassFunction;
pub use independent::{
    OrbitSample, PrimarySample, binary_fraction, classify_initial_type, initial_kstar,
    sample_ecc, sample_porb, sample_primary, sample_secondary, sample_separation,
    sample_separation_eccentricity, sample_star_formation_history, select_binaries,
};
pub use model::{EccentricityModel, PeriodModel, PrimaryModel, StarFormationModel};
pub use multidim::{
    BinaryDraw, Companion, MultiDimSampler, PopulationSample, sample_initial_population,
};
pub use quadrature::tabulate_integral;
pub use settings::SamplerSettings;
pub use table::{
    IndependentPopulationRequest, InitialBinary, InitialBinaryTable, build_independent_population,
};
