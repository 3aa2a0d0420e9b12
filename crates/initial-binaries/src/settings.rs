//! Tunables for the independent primary-mass sampler.
//!
//! Populations destined to end as compact objects are oversampled and then
//! cut at an absolute primary-mass floor, because only a small fraction of an
//! IMF draw is massive enough to leave a neutron star or black hole.

use serde::{Deserialize, Serialize};

use crate::error::SampleError;

/// Oversampling and post-filter policy keyed on the requested final kstar.
///
/// kstar follows the Hurley et al. (2000) stellar-type codes: 13 is a
/// neutron star, 14 a black hole, 15 a massless remnant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SamplerSettings {
    /// Draw multiplier when the final kstar exceeds `compact_kstar`
    pub compact_oversampling: usize,
    /// Draw multiplier when the final kstar exceeds `heavy_kstar`
    pub heavy_oversampling: usize,
    /// Primary-mass floor (M☉) when the final kstar exceeds `compact_kstar`
    pub neutron_star_mass_floor: f64,
    /// Primary-mass floor (M☉) when the final kstar exceeds `black_hole_kstar`
    pub black_hole_mass_floor: f64,
    pub compact_kstar: u8,
    pub black_hole_kstar: u8,
    pub heavy_kstar: u8,
}

impl Default for SamplerSettings {
    fn default() -> Self {
        Self {
            compact_oversampling: 50,
            heavy_oversampling: 500,
            neutron_star_mass_floor: 8.0,
            black_hole_mass_floor: 15.0,
            compact_kstar: 12,
            black_hole_kstar: 13,
            heavy_kstar: 14,
        }
    }
}

impl SamplerSettings {
    /// Number of primaries to draw per requested system.
    pub fn oversampling_factor(&self, kstar1_final: u8) -> usize {
        if kstar1_final > self.heavy_kstar {
            self.heavy_oversampling
        } else if kstar1_final > self.compact_kstar {
            self.compact_oversampling
        } else {
            1
        }
    }

    /// Primaries at or below this mass are discarded after sampling.
    pub fn mass_floor(&self, kstar1_final: u8) -> Option<f64> {
        if kstar1_final > self.black_hole_kstar {
            Some(self.black_hole_mass_floor)
        } else if kstar1_final > self.compact_kstar {
            Some(self.neutron_star_mass_floor)
        } else {
            None
        }
    }

    pub fn validate(&self) -> Result<(), SampleError> {
        for (name, factor) in [
            ("compact_oversampling", self.compact_oversampling),
            ("heavy_oversampling", self.heavy_oversampling),
        ] {
            if factor == 0 {
                return Err(SampleError::InvalidSetting { name, value: 0.0 });
            }
        }

        for (name, floor) in [
            ("neutron_star_mass_floor", self.neutron_star_mass_floor),
            ("black_hole_mass_floor", self.black_hole_mass_floor),
        ] {
            if !floor.is_finite() || floor < 0.0 {
                return Err(SampleError::InvalidSetting { name, value: floor });
            }
        }

        Ok(())
    }
}
