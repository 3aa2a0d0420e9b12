use std::f64::consts::PI;

use rand::Rng;
use rand_chacha::ChaChaRng;

/// Sample from a Gaussian (normal) distribution using the Box-Muller transform
///
/// # Arguments
/// * `rng` - Random number generator
/// * `mean` - Mean of the distribution
/// * `std_dev` - Standard deviation
pub fn sample_gaussian(rng: &mut ChaChaRng, mean: f64, std_dev: f64) -> f64 {
    // 1 - u keeps the logarithm finite
    let u1: f64 = 1.0 - rng.random::<f64>();
    let u2: f64 = rng.random();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
    mean + std_dev * z
}

/// Sample from a power-law distribution
///
/// Samples from p(x) ∝ x^α between x_min and x_max using inverse transform sampling.
///
/// # Arguments
/// * `x_min` - Minimum value
/// * `x_max` - Maximum value
/// * `alpha` - Power-law exponent (e.g., -2.35 for the Salpeter IMF), not -1
/// * `rng` - Random number generator
pub fn sample_power_law(x_min: f64, x_max: f64, alpha: f64, rng: &mut ChaChaRng) -> f64 {
    let u: f64 = rng.random();
    let alpha1 = alpha + 1.0;
    (u * (x_max.powf(alpha1) - x_min.powf(alpha1)) + x_min.powf(alpha1)).powf(1.0 / alpha1)
}

/// Uniform draw on `[low, high)`.
pub fn sample_uniform(rng: &mut ChaChaRng, low: f64, high: f64) -> f64 {
    low + (high - low) * rng.random::<f64>()
}
