use thiserror::Error;

#[allow(clippy::module_name_repetitions)]
#[derive(Error, displaydoc::Display, Debug, Clone, PartialEq)]
pub enum SampleError {
    /// unknown {kind} model {given:?}, expected one of {expected:?}
    UnknownModel {
        kind: &'static str,
        given: String,
        expected: &'static [&'static str],
    },
    /// minimum primary mass {minimum} Msun is outside [{floor}, {ceiling}] Msun
    MinimumMassOutOfRange {
        minimum: f64,
        floor: f64,
        ceiling: f64,
    },
    /// invalid sampler setting {name}: {value}
    InvalidSetting { name: &'static str, value: f64 },
}
