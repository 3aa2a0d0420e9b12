use approx::{assert_abs_diff_eq, assert_relative_eq};

use crate::fits::{
    MassCoefficients, companion_frequency, eccentricity_eta, gamma_large_q, gamma_small_q,
    inner_binary_probability, maximum_eccentricity, twin_fraction,
};

#[test]
fn solar_type_large_q_slope_steepens_beyond_log_p_5() {
    assert_relative_eq!(gamma_large_q(3.0, 1.0), -0.5);
    assert_relative_eq!(gamma_large_q(6.0, 1.0), -0.8);
}

#[test]
fn massive_large_q_slope_uses_m1_above_6_fit() {
    assert_relative_eq!(gamma_large_q(3.0, 10.0), -1.7);
    assert_relative_eq!(gamma_large_q(7.0, 25.0), -2.0);
}

#[test]
fn large_q_slope_interpolates_in_log_mass() {
    // Geometric mean of the 1.2 and 3.5 anchors sits halfway in log M1
    let mass = (1.2_f64 * 3.5).sqrt();
    let halfway = 0.5 * (-0.5 + -1.4);

    assert_relative_eq!(gamma_large_q(5.0, mass), halfway, max_relative = 1e-12);
}

#[test]
fn small_q_slope_is_flat_for_solar_type() {
    for log_p in [0.2, 2.0, 5.0, 7.9] {
        assert_relative_eq!(gamma_small_q(log_p, 1.0), 0.3);
    }
    assert_relative_eq!(gamma_small_q(6.0, 10.0), -1.5);
    assert_relative_eq!(gamma_small_q(4.0, 3.5), -0.25, max_relative = 1e-12);
}

#[test]
fn eccentricity_exponent_is_frozen_below_log_p_0_7() {
    assert_relative_eq!(eccentricity_eta(0.5, 1.0), -2.9);
    assert_relative_eq!(eccentricity_eta(0.5, 10.0), -0.1);
    assert_relative_eq!(eccentricity_eta(2.5, 2.0), 0.25, max_relative = 1e-12);
    assert_relative_eq!(eccentricity_eta(2.5, 8.0), 0.8, max_relative = 1e-12);
}

#[test]
fn slopes_are_continuous_across_period_breaks() {
    for log_p in [1.0, 2.0, 2.5, 3.0, 4.0, 4.5, 5.0, 5.5, 5.6, 6.5] {
        for mass in [1.0, 2.0, 3.5, 5.0, 12.0] {
            assert_abs_diff_eq!(
                gamma_large_q(log_p - 1e-9, mass),
                gamma_large_q(log_p + 1e-9, mass),
                epsilon = 1e-6
            );
            assert_abs_diff_eq!(
                gamma_small_q(log_p - 1e-9, mass),
                gamma_small_q(log_p + 1e-9, mass),
                epsilon = 1e-6
            );
        }
    }
}

#[test]
fn companion_frequency_is_continuous() {
    let coefficients = MassCoefficients::new(4.0);

    for edge in [1.0, 2.0, 3.4, 5.5] {
        assert_abs_diff_eq!(
            companion_frequency(edge - 1e-9, &coefficients),
            companion_frequency(edge + 1e-9, &coefficients),
            epsilon = 1e-6
        );
    }
}

#[test]
fn companion_frequency_anchors() {
    let coefficients = MassCoefficients::new(1.0);

    assert_relative_eq!(companion_frequency(0.5, &coefficients), 0.020);
    assert_relative_eq!(companion_frequency(2.7, &coefficients), 0.039);
    assert_relative_eq!(companion_frequency(5.5, &coefficients), 0.078, max_relative = 1e-12);
    assert!(companion_frequency(8.0, &coefficients) < 0.078);
}

#[test]
fn twin_excess_declines_to_zero() {
    let solar = MassCoefficients::new(1.0);
    assert_relative_eq!(solar.log_period_twin, 7.0);
    assert_relative_eq!(twin_fraction(0.5, &solar), 0.3);
    assert_relative_eq!(twin_fraction(4.0, &solar), 0.15, max_relative = 1e-12);
    assert_eq!(twin_fraction(7.0, &solar), 0.0);

    let massive = MassCoefficients::new(10.0);
    assert_relative_eq!(massive.log_period_twin, 1.5);
    assert_eq!(twin_fraction(2.0, &massive), 0.0);
}

#[test]
fn inner_binary_probability_is_clipped() {
    assert_eq!(inner_binary_probability(1.0, 30.0), 1.0);
    assert_eq!(inner_binary_probability(8.0, 40.0), 0.0);

    let p = inner_binary_probability(4.0, 1.0);
    assert!(p > 0.0 && p < 1.0);
}

#[test]
fn maximum_eccentricity_vanishes_at_two_days() {
    assert_abs_diff_eq!(maximum_eccentricity(2.0), 0.0, epsilon = 1e-15);
    assert_relative_eq!(maximum_eccentricity(16.0), 0.75, max_relative = 1e-12);
}
