//! Named model selectors for the independent-axis samplers.
//!
//! Each selector parses from the exact name used by population-synthesis
//! configuration files and refuses anything else.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SampleError;

/// Primary-mass initial mass function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PrimaryModel {
    /// Kroupa, Tout & Gilmore (1993), normalised per Hurley et al. (2002)
    /// between 0.1 and 100 M☉.
    #[default]
    #[serde(rename = "kroupa93")]
    Kroupa93,
    /// Salpeter (1955), dN/dM ∝ M^-2.35 between 0.1 and 100 M☉.
    #[serde(rename = "salpeter55")]
    Salpeter55,
}

/// Orbital period (or separation) distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PeriodModel {
    /// Han (1998) broken power law in separation, converted with Kepler's law.
    #[default]
    Han,
    /// Log-normal period distribution, log10(P/day) ~ N(5.03, 2.28).
    #[serde(rename = "log_normal")]
    LogNormal,
}

/// Eccentricity distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EccentricityModel {
    /// Thermal, f(e) = 2e (Heggie 1975).
    #[default]
    #[serde(rename = "thermal")]
    Thermal,
    #[serde(rename = "uniform")]
    Uniform,
}

/// Star-formation history used to assign evolution times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StarFormationModel {
    /// Constant star formation over the 10 Gyr age of the disk.
    #[default]
    #[serde(rename = "const")]
    Constant,
    /// Constant star formation for 1 Gyr, starting 10 Gyr ago.
    #[serde(rename = "burst")]
    Burst,
}

/// Maps a selector onto its configuration name and back.
trait NamedModel: Sized + Copy + PartialEq + 'static {
    const KIND: &'static str;
    const VARIANTS: &'static [(&'static str, Self)];
    const NAMES: &'static [&'static str];

    fn name(self) -> &'static str {
        Self::VARIANTS
            .iter()
            .find(|(_, model)| *model == self)
            .map_or("", |(name, _)| name)
    }

    fn parse(s: &str) -> Result<Self, SampleError> {
        Self::VARIANTS
            .iter()
            .find(|(name, _)| *name == s)
            .map(|(_, model)| *model)
            .ok_or_else(|| SampleError::UnknownModel {
                kind: Self::KIND,
                given: s.to_owned(),
                expected: Self::NAMES,
            })
    }
}

macro_rules! named_model {
    ($ty:ty, $kind:literal, [$(($name:literal, $variant:expr)),+ $(,)?]) => {
        impl NamedModel for $ty {
            const KIND: &'static str = $kind;
            const VARIANTS: &'static [(&'static str, Self)] = &[$(($name, $variant)),+];
            const NAMES: &'static [&'static str] = &[$($name),+];
        }

        impl FromStr for $ty {
            type Err = SampleError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as NamedModel>::parse(s)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(NamedModel::name(*self))
            }
        }
    };
}

named_model!(
    PrimaryModel,
    "primary mass",
    [("kroupa93", PrimaryModel::Kroupa93), ("salpeter55", PrimaryModel::Salpeter55)]
);
named_model!(
    PeriodModel,
    "orbital period",
    [("Han", PeriodModel::Han), ("log_normal", PeriodModel::LogNormal)]
);
named_model!(
    EccentricityModel,
    "eccentricity",
    [("thermal", EccentricityModel::Thermal), ("uniform", EccentricityModel::Uniform)]
);
named_model!(
    StarFormationModel,
    "star formation history",
    [("const", StarFormationModel::Constant), ("burst", StarFormationModel::Burst)]
);
