use approx::assert_relative_eq;

use crate::{Length, Mass, Time, orbital_period, separation};

#[test]
fn earth_orbit_is_about_one_year() {
    let period = orbital_period(Length::from_au(1.0), Mass::from_solar_masses(1.0));
    assert_relative_eq!(period.to_years(), 1.0, max_relative = 5e-3);
}

#[test]
fn separation_inverts_period() {
    let total = Mass::from_solar_masses(12.0);
    let period = Time::from_days(37.0);
    let a = separation(period, total);
    assert_relative_eq!(orbital_period(a, total).to_days(), 37.0, max_relative = 1e-10);
}
