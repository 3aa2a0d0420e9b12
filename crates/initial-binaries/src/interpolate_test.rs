use approx::assert_relative_eq;

use crate::interpolate::{
    interp, inverse_cdf, linspace, logspace, nearest_index, truncate_cdf_below,
};

#[test]
fn linspace_hits_both_ends() {
    let grid = linspace(0.15, 8.0, 158);

    assert_eq!(grid.len(), 158);
    assert_eq!(grid[0], 0.15);
    assert_eq!(grid[157], 8.0);
    assert_relative_eq!(grid[1] - grid[0], 7.85 / 157.0, max_relative = 1e-12);
}

#[test]
fn logspace_is_geometric() {
    let grid = logspace(0.8, 40.0, 101);

    assert_relative_eq!(grid[0], 0.8, max_relative = 1e-12);
    assert_relative_eq!(grid[100], 40.0, max_relative = 1e-12);
    assert_relative_eq!(grid[2] / grid[1], grid[1] / grid[0], max_relative = 1e-10);
}

#[test]
fn interp_is_linear_and_clamped() {
    let xp = [0.0, 1.0, 3.0];
    let fp = [0.0, 10.0, 30.0];

    assert_relative_eq!(interp(0.5, &xp, &fp), 5.0);
    assert_relative_eq!(interp(2.0, &xp, &fp), 20.0);
    assert_eq!(interp(-1.0, &xp, &fp), 0.0);
    assert_eq!(interp(9.0, &xp, &fp), 30.0);
}

#[test]
fn inverse_cdf_of_uniform_distribution() {
    let axis = [0.0, 1.0, 2.0];
    let cdf = [0.0, 0.5, 1.0];

    assert_relative_eq!(inverse_cdf(0.25, &cdf, &axis), 0.5);
    assert_relative_eq!(inverse_cdf(0.75, &cdf, &axis), 1.5);
    assert_eq!(inverse_cdf(0.0, &cdf, &axis), 0.0);
}

#[test]
fn inverse_cdf_skips_flat_regions() {
    let axis = [0.0, 1.0, 2.0, 3.0];
    let cdf = [0.0, 0.0, 0.0, 1.0];

    let x = inverse_cdf(0.5, &cdf, &axis);
    assert_relative_eq!(x, 2.5);
}

#[test]
fn inverse_cdf_without_support_returns_lowest_value() {
    let axis = [0.1, 0.2, 0.3];
    let cdf = [0.0, 0.0, 0.0];

    assert_eq!(inverse_cdf(0.7, &cdf, &axis), 0.1);
}

#[test]
fn inverse_cdf_above_maximum_returns_highest_value() {
    let axis = [1.0, 2.0, 3.0];
    let cdf = [0.0, 0.2, 0.4];

    assert_eq!(inverse_cdf(0.9, &cdf, &axis), 3.0);
}

#[test]
fn nearest_index_breaks_ties_low() {
    let grid = [0.0, 1.0, 2.0, 3.0];

    assert_eq!(nearest_index(0.5, &grid), 0);
    assert_eq!(nearest_index(1.6, &grid), 2);
    assert_eq!(nearest_index(2.0, &grid), 2);
    assert_eq!(nearest_index(-4.0, &grid), 0);
    assert_eq!(nearest_index(40.0, &grid), 3);
}

#[test]
fn truncated_cdf_starts_at_floor_and_renormalises() {
    let axis = linspace(0.1, 1.0, 10);
    let cdf = linspace(0.0, 1.0, 10);

    let (truncated, truncated_axis) = truncate_cdf_below(&cdf, &axis, 0.45);

    assert_relative_eq!(truncated_axis[0], 0.45);
    assert_eq!(truncated[0], 0.0);
    assert_relative_eq!(*truncated.last().unwrap(), 1.0);
    assert!(truncated.windows(2).all(|w| w[1] >= w[0]));
    assert!(truncated_axis.windows(2).all(|w| w[1] > w[0]));

    for k in 0..=100 {
        let q = inverse_cdf(k as f64 / 100.0, &truncated, &truncated_axis);
        assert!(q >= 0.45, "draw {q} fell below the floor");
    }
}

#[test]
fn truncation_below_first_value_is_identity() {
    let axis = [0.1, 0.5, 1.0];
    let cdf = [0.0, 0.4, 1.0];

    let (truncated, truncated_axis) = truncate_cdf_below(&cdf, &axis, 0.05);
    assert_eq!(truncated, cdf.to_vec());
    assert_eq!(truncated_axis, axis.to_vec());
}
