//! Grid construction and table lookups shared by the samplers.

/// `n` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// `n` values evenly spaced in log10 between `start` and `end`.
pub fn logspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    linspace(start.log10(), end.log10(), n)
        .into_iter()
        .map(|exponent| 10.0_f64.powf(exponent))
        .collect()
}

/// Piecewise-linear interpolation of `(xp, fp)` at `x`, clamped to the end
/// values outside the table. `xp` must be non-decreasing.
pub fn interp(x: f64, xp: &[f64], fp: &[f64]) -> f64 {
    let n = xp.len().min(fp.len());
    if n == 0 {
        return f64::NAN;
    }
    if x <= xp[0] {
        return fp[0];
    }
    if x >= xp[n - 1] {
        return fp[n - 1];
    }

    // xp[k - 1] <= x < xp[k]
    let k = xp[..n].partition_point(|&v| v <= x);
    let (x0, x1) = (xp[k - 1], xp[k]);
    fp[k - 1] + (x - x0) / (x1 - x0) * (fp[k] - fp[k - 1])
}

/// Invert a tabulated cumulative distribution at probability `u`.
///
/// Finds the first entry at or above `u` by binary search and interpolates
/// linearly towards its predecessor. A CDF with no support (all zero) maps
/// every `u` to the lowest axis value; `u` above the table maximum maps to
/// the highest.
pub fn inverse_cdf(u: f64, cdf: &[f64], axis: &[f64]) -> f64 {
    let n = cdf.len().min(axis.len());
    if n == 0 {
        return f64::NAN;
    }
    if cdf[n - 1] <= 0.0 {
        return axis[0];
    }

    let k = cdf[..n].partition_point(|&c| c < u);
    if k == 0 {
        return axis[0];
    }
    if k == n {
        return axis[n - 1];
    }

    // cdf[k - 1] < u <= cdf[k]
    let (c0, c1) = (cdf[k - 1], cdf[k]);
    axis[k - 1] + (u - c0) / (c1 - c0) * (axis[k] - axis[k - 1])
}

/// Index of the grid value closest to `value`; ties go to the lower index.
///
/// `grid` must be sorted ascending.
pub fn nearest_index(value: f64, grid: &[f64]) -> usize {
    if grid.is_empty() {
        return 0;
    }

    let k = grid.partition_point(|&g| g < value);
    if k == 0 {
        return 0;
    }
    if k == grid.len() {
        return grid.len() - 1;
    }

    if (value - grid[k - 1]).abs() <= (grid[k] - value).abs() {
        k - 1
    } else {
        k
    }
}

/// Restrict a cumulative distribution to `axis >= floor` and renormalise.
///
/// The returned table starts exactly at `floor` with probability zero, so
/// inverting it never yields a value below the floor. Returns the inputs
/// unchanged when `floor` is at or below the first axis value.
pub fn truncate_cdf_below(cdf: &[f64], axis: &[f64], floor: f64) -> (Vec<f64>, Vec<f64>) {
    let n = cdf.len().min(axis.len());
    if n == 0 || floor <= axis[0] {
        return (cdf[..n].to_vec(), axis[..n].to_vec());
    }

    let at_floor = interp(floor, &axis[..n], &cdf[..n]);
    let first_above = axis[..n].partition_point(|&a| a <= floor);

    let mut truncated_axis = Vec::with_capacity(n - first_above + 1);
    let mut truncated_cdf = Vec::with_capacity(n - first_above + 1);
    truncated_axis.push(floor.min(axis[n - 1]));
    truncated_cdf.push(0.0);
    for k in first_above..n {
        truncated_axis.push(axis[k]);
        truncated_cdf.push((cdf[k] - at_floor).max(0.0));
    }

    let remaining = truncated_cdf.iter().copied().fold(0.0, f64::max);
    if remaining > 0.0 {
        truncated_cdf.iter_mut().for_each(|c| *c /= remaining);
    } else {
        truncated_cdf.iter_mut().for_each(|c| *c = 0.0);
    }

    (truncated_cdf, truncated_axis)
}
