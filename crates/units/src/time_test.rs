use approx::assert_relative_eq;

use crate::time::{SECONDS_PER_DAY, Time};

#[test]
fn days_convert_to_seconds() {
    assert_relative_eq!(Time::from_days(1.0).to_seconds(), SECONDS_PER_DAY);
    assert_relative_eq!(Time::from_seconds(SECONDS_PER_DAY * 7.0).to_days(), 7.0);
}

#[test]
fn log_days_round_trip() {
    let period = Time::from_log10_days(2.0);
    assert_relative_eq!(period.to_days(), 100.0, max_relative = 1e-12);
}

#[test]
fn myr_and_years_agree() {
    let t = Time::from_myr(1.0);
    assert_relative_eq!(t.to_years(), 1.0e6, max_relative = 1e-12);
    assert_relative_eq!((t - Time::from_myr(0.25)).to_myr(), 0.75, max_relative = 1e-12);
}
