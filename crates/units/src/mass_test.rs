use approx::assert_relative_eq;

use crate::mass::{Mass, SOLAR_MASS_KG};

#[test]
fn solar_mass_converts_to_kg() {
    let sun = Mass::from_solar_masses(1.0);
    assert_relative_eq!(sun.to_kg(), SOLAR_MASS_KG);
    assert_relative_eq!(Mass::from_kg(2.0 * SOLAR_MASS_KG).to_solar_masses(), 2.0);
}

#[test]
fn mass_ratio_is_dimensionless() {
    let primary = Mass::from_solar_masses(8.0);
    let secondary = Mass::from_solar_masses(2.0);
    assert_relative_eq!(secondary / primary, 0.25);
}

#[test]
fn masses_sum_and_scale() {
    let masses = [1.0, 2.5, 0.5].map(Mass::from_solar_masses);
    let total: Mass = masses.iter().copied().sum();
    assert_relative_eq!(total.to_solar_masses(), 4.0);

    let mut running = Mass::zero();
    running += 0.5 * total;
    assert_relative_eq!((running - Mass::from_solar_masses(1.0)).to_solar_masses(), 1.0);
}

#[test]
fn mass_serializes_as_plain_number() {
    let json = serde_json::to_string(&Mass::from_solar_masses(1.5)).unwrap();
    assert_eq!(json, "1.5");
}
