//! Composite Newton–Cotes integration over tabulated samples.
//!
//! The domain is cut into windows of `p` points that share their end
//! points, and each window is integrated with the closed Newton–Cotes rule
//! fitted to its own abscissas. Windows on a uniform grid use the classical
//! tabulated weights; anything else solves the moment equations.

use nalgebra::{DMatrix, DVector};

/// Points per window (Boole's rule on uniform grids)
pub const DEFAULT_WINDOW: usize = 5;

/// Closed Newton–Cotes weights for 2 to 5 equally spaced points, in units of
/// the spacing.
const UNIFORM_WEIGHTS: [&[f64]; 4] = [
    &[1.0 / 2.0, 1.0 / 2.0],
    &[1.0 / 3.0, 4.0 / 3.0, 1.0 / 3.0],
    &[3.0 / 8.0, 9.0 / 8.0, 9.0 / 8.0, 3.0 / 8.0],
    &[14.0 / 45.0, 64.0 / 45.0, 24.0 / 45.0, 64.0 / 45.0, 14.0 / 45.0],
];

/// Relative tolerance for treating a window as uniformly spaced
const UNIFORM_TOLERANCE: f64 = 1e-9;

/// Integrate tabulated `f(x)` over `[x[0], x[n-1]]` with five-point windows.
///
/// Returns 0 for fewer than two samples. `x` must be strictly increasing.
///
/// # Example
/// ```
/// use initial_binaries::quadrature::tabulate_integral;
///
/// let x = [0.0, 0.5, 1.0, 1.5, 2.0];
/// let f = x.map(|x| x * x);
/// assert!((tabulate_integral(&x, &f) - 8.0 / 3.0).abs() < 1e-12);
/// ```
pub fn tabulate_integral(x: &[f64], f: &[f64]) -> f64 {
    tabulate_integral_with_window(x, f, DEFAULT_WINDOW)
}

/// Integrate tabulated `f(x)` using windows of `points` samples.
pub fn tabulate_integral_with_window(x: &[f64], f: &[f64], points: usize) -> f64 {
    debug_assert_eq!(x.len(), f.len(), "abscissas and values differ in length");

    let n = x.len().min(f.len());
    if n < 2 {
        return 0.0;
    }

    let points = points.max(2);
    (0..n)
        .step_by(points - 1)
        .map(|start| {
            let end = (start + points).min(n);
            newton_cotes(&x[start..end], &f[start..end])
        })
        .sum()
}

fn newton_cotes(x: &[f64], f: &[f64]) -> f64 {
    let n = x.len();
    if n < 2 {
        return 0.0;
    }

    let span = x[n - 1] - x[0];
    if span <= 0.0 {
        return 0.0;
    }

    let intervals = (n - 1) as f64;
    let nodes: Vec<f64> = x.iter().map(|xi| intervals * (xi - x[0]) / span).collect();

    let weighted: f64 = match uniform_weights(&nodes) {
        Some(weights) => weights.iter().zip(f).map(|(w, fi)| w * fi).sum(),
        None => match fitted_weights(&nodes) {
            Some(weights) => weights.iter().zip(f).map(|(w, fi)| w * fi).sum(),
            None => trapezoid(&nodes, f),
        },
    };

    span / intervals * weighted
}

fn uniform_weights(nodes: &[f64]) -> Option<&'static [f64]> {
    let weights = UNIFORM_WEIGHTS.get(nodes.len().checked_sub(2)?)?;
    let uniform = nodes
        .iter()
        .enumerate()
        .all(|(k, t)| (t - k as f64).abs() <= UNIFORM_TOLERANCE * nodes.len() as f64);
    uniform.then_some(*weights)
}

/// Weights reproducing ∫₀ᴺ tᵐ dt exactly for m = 0..N on arbitrary nodes.
fn fitted_weights(nodes: &[f64]) -> Option<DVector<f64>> {
    let n = nodes.len();
    let intervals = (n - 1) as f64;

    let vandermonde = DMatrix::from_fn(n, n, |m, k| nodes[k].powi(m as i32));
    let moments = DVector::from_fn(n, |m, _| intervals.powi(m as i32 + 1) / (m as f64 + 1.0));

    vandermonde.lu().solve(&moments)
}

fn trapezoid(nodes: &[f64], f: &[f64]) -> f64 {
    nodes
        .windows(2)
        .zip(f.windows(2))
        .map(|(t, v)| 0.5 * (t[1] - t[0]) * (v[0] + v[1]))
        .sum()
}
