//! Analytic fits to the corrected binary statistics of Moe & Di Stefano (2017).
//!
//! Every function takes log10 of the orbital period in days and the primary
//! mass in solar masses. Equation numbers refer to M+D17, ApJS 230, 15.

use crate::regime::{Regime, log_interp, piecewise};

const INF: f64 = f64::INFINITY;
const NEG_INF: f64 = f64::NEG_INFINITY;

/// Slope of the companion frequency across intermediate periods (Eqn. 23)
const FREQUENCY_SLOPE: f64 = 0.018;
/// Half-width in log P of the intermediate-period band centred on 2.7
const FREQUENCY_HALF_WIDTH: f64 = 0.7;

/// Quantities that depend on the primary mass only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassCoefficients {
    pub mass: f64,
    /// Excess twin fraction for log P ≤ 1 (Eqn. 6)
    pub twin_fraction_short: f64,
    /// log P beyond which there is no twin excess (Eqn. 7)
    pub log_period_twin: f64,
    /// Companion frequency per decade of P with q > 0.3 at log P ≤ 1 (Eqn. 20)
    pub frequency_short: f64,
    /// ... at log P = 2.7 (Eqn. 21)
    pub frequency_mid: f64,
    /// ... at log P = 5.5 (Eqn. 22)
    pub frequency_long: f64,
}

impl MassCoefficients {
    pub fn new(mass: f64) -> Self {
        let log_m = mass.log10();

        Self {
            mass,
            twin_fraction_short: 0.3 - 0.15 * log_m,
            log_period_twin: if mass >= 6.5 { 1.5 } else { 8.0 - mass },
            frequency_short: 0.020 + 0.04 * log_m + 0.07 * log_m * log_m,
            frequency_mid: 0.039 + 0.07 * log_m + 0.01 * log_m * log_m,
            frequency_long: 0.078 - 0.05 * log_m + 0.04 * log_m * log_m,
        }
    }
}

/// Excess fraction of twins (q > 0.95) at the given period (Eqn. 5).
pub fn twin_fraction(log_p: f64, coefficients: &MassCoefficients) -> f64 {
    let MassCoefficients {
        twin_fraction_short,
        log_period_twin,
        ..
    } = *coefficients;

    if log_p >= log_period_twin {
        0.0
    } else if log_p <= 1.0 {
        twin_fraction_short
    } else {
        twin_fraction_short * (1.0 - (log_p - 1.0) / (log_period_twin - 1.0))
    }
}

/// Power-law slope of the mass-ratio distribution across 0.3 < q < 1.
pub fn gamma_large_q(log_p: f64, mass: f64) -> f64 {
    // Eqn. 9, M1 < 1.2
    let solar: [Regime<()>; 2] = [
        (NEG_INF, 5.0, |_, _| -0.5),
        (5.0, INF, |p, _| -0.5 - 0.3 * (p - 5.0)),
    ];
    // Eqn. 10, M1 = 3.5
    let intermediate: [Regime<()>; 4] = [
        (NEG_INF, 1.0, |_, _| -0.5),
        (1.0, 4.5, |p, _| -0.5 - 0.2 * (p - 1.0)),
        (4.5, 6.5, |p, _| -1.2 - 0.4 * (p - 4.5)),
        (6.5, INF, |_, _| -2.0),
    ];
    // Eqn. 11, M1 > 6
    let massive: [Regime<()>; 4] = [
        (NEG_INF, 1.0, |_, _| -0.5),
        (1.0, 2.0, |p, _| -0.5 - 0.9 * (p - 1.0)),
        (2.0, 4.0, |p, _| -1.4 - 0.3 * (p - 2.0)),
        (4.0, INF, |_, _| -2.0),
    ];

    log_interp(
        mass,
        &[
            (1.2, piecewise(log_p, &(), &solar)),
            (3.5, piecewise(log_p, &(), &intermediate)),
            (6.0, piecewise(log_p, &(), &massive)),
        ],
    )
}

/// Power-law slope of the mass-ratio distribution across 0.1 < q < 0.3.
pub fn gamma_small_q(log_p: f64, mass: f64) -> f64 {
    // Eqn. 13, M1 < 1.2, all periods
    let solar: [Regime<()>; 1] = [(NEG_INF, INF, |_, _| 0.3)];
    // Eqn. 14, M1 = 3.5
    let intermediate: [Regime<()>; 3] = [
        (NEG_INF, 2.5, |_, _| 0.2),
        (2.5, 5.5, |p, _| 0.2 - 0.3 * (p - 2.5)),
        (5.5, INF, |p, _| -0.7 - 0.2 * (p - 5.5)),
    ];
    // Eqn. 15, M1 > 6
    let massive: [Regime<()>; 4] = [
        (NEG_INF, 1.0, |_, _| 0.1),
        (1.0, 3.0, |p, _| 0.1 - 0.15 * (p - 1.0)),
        (3.0, 5.6, |p, _| -0.2 - 0.5 * (p - 3.0)),
        (5.6, INF, |_, _| -1.5),
    ];

    log_interp(
        mass,
        &[
            (1.2, piecewise(log_p, &(), &solar)),
            (3.5, piecewise(log_p, &(), &intermediate)),
            (6.0, piecewise(log_p, &(), &massive)),
        ],
    )
}

/// Power-law exponent η of the eccentricity distribution, f(e) ∝ e^η.
///
/// Below log P = 0.7 the exponents are held at their log P = 0.7 values.
pub fn eccentricity_eta(log_p: f64, mass: f64) -> f64 {
    // Eqn. 17, M1 < 3
    let low: [Regime<()>; 2] = [
        (NEG_INF, 0.7, |_, _| -2.9),
        (0.7, INF, |p, _| 0.6 - 0.7 / (p - 0.5)),
    ];
    // Eqn. 18, M1 > 7
    let high: [Regime<()>; 2] = [
        (NEG_INF, 0.7, |_, _| -0.1),
        (0.7, INF, |p, _| 0.9 - 0.2 / (p - 0.5)),
    ];

    log_interp(
        mass,
        &[
            (3.0, piecewise(log_p, &(), &low)),
            (7.0, piecewise(log_p, &(), &high)),
        ],
    )
}

/// Frequency of companions with q > 0.3 per decade of orbital period (Eqn. 23).
pub fn companion_frequency(log_p: f64, coefficients: &MassCoefficients) -> f64 {
    const A: f64 = FREQUENCY_SLOPE;
    const D: f64 = FREQUENCY_HALF_WIDTH;

    let bands: [Regime<MassCoefficients>; 5] = [
        (NEG_INF, 1.0, |_, c| c.frequency_short),
        (1.0, 2.7 - D, |p, c| {
            c.frequency_short
                + (p - 1.0) / (1.7 - D) * (c.frequency_mid - c.frequency_short - A * D)
        }),
        (2.7 - D, 2.7 + D, |p, c| c.frequency_mid + A * (p - 2.7)),
        (2.7 + D, 5.5, |p, c| {
            c.frequency_mid
                + A * D
                + (p - 2.7 - D) / (2.8 - D) * (c.frequency_long - c.frequency_mid - A * D)
        }),
        (5.5, INF, |p, c| c.frequency_long * (-0.3 * (p - 5.5)).exp()),
    ];

    piecewise(log_p, coefficients, &bands)
}

/// Probability that a companion at this period belongs to the inner binary
/// rather than an outer tertiary.
///
/// Unity below log P = 1.5; the decline reproduces a 41% binary fraction at
/// 1 M☉ and 96% at 28 M☉.
pub fn inner_binary_probability(log_p: f64, mass: f64) -> f64 {
    if log_p <= 1.5 {
        1.0
    } else {
        (1.0 - 0.11 * (log_p - 1.5).powf(1.43) * (mass / 10.0).powf(0.56)).max(0.0)
    }
}

/// Largest eccentricity allowed at period `p_days` before Roche-lobe contact.
pub fn maximum_eccentricity(p_days: f64) -> f64 {
    1.0 - (p_days / 2.0).powf(-2.0 / 3.0)
}
