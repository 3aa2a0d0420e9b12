//! Piecewise fits keyed on a scalar such as log-period.
//!
//! A fit is an ordered table of bands. Each band covers `lower < x <= upper`
//! and evaluates its own coefficient function, which may read a context
//! (for example mass-dependent anchor values).

/// `(lower, upper, eval)`: `eval` applies for `lower < x <= upper`.
pub type Regime<C> = (f64, f64, fn(f64, &C) -> f64);

/// Evaluate the band of `regimes` containing `x`.
///
/// Returns NaN when no band matches, which only happens for NaN input if
/// the table spans the real line.
pub fn piecewise<C>(x: f64, context: &C, regimes: &[Regime<C>]) -> f64 {
    regimes
        .iter()
        .find(|(lower, upper, _)| x > *lower && x <= *upper)
        .map_or(f64::NAN, |(_, _, eval)| eval(x, context))
}

/// Interpolate anchor values linearly in log10 of the abscissa.
///
/// `anchors` are `(x, value)` pairs sorted by `x`; outside the anchored
/// range the nearest end value is used.
pub fn log_interp(x: f64, anchors: &[(f64, f64)]) -> f64 {
    let Some(&(first_x, first_value)) = anchors.first() else {
        return f64::NAN;
    };
    if x <= first_x {
        return first_value;
    }

    for pair in anchors.windows(2) {
        let (x0, v0) = pair[0];
        let (x1, v1) = pair[1];
        if x <= x1 {
            let t = (x.log10() - x0.log10()) / (x1.log10() - x0.log10());
            return v0 + t * (v1 - v0);
        }
    }

    anchors[anchors.len() - 1].1
}
