//! Tabulated joint distribution of period, mass ratio and eccentricity.
//!
//! For every (primary mass, period) cell the builder evaluates the analytic
//! fits, turns the mass-ratio and eccentricity densities into normalised
//! cumulative distributions, and accumulates the inner-binary period
//! distribution of each mass column. Building is the expensive step; the
//! resulting [`DistributionGrids`] is immutable and meant to be shared by
//! reference across every draw of a sampling session.

use serde::{Deserialize, Serialize};

use crate::fits::{
    MassCoefficients, companion_frequency, eccentricity_eta, gamma_large_q, gamma_small_q,
    inner_binary_probability, maximum_eccentricity, twin_fraction,
};
use crate::imf::PrimaryMassFunction;
use crate::interpolate::{linspace, logspace, nearest_index};
use crate::quadrature::tabulate_integral;

/// Range of primary masses with selection-corrected statistics (M☉)
pub const MASS_RANGE: (f64, f64) = (0.8, 40.0);
/// Range of log10(P / day)
pub const LOG_PERIOD_RANGE: (f64, f64) = (0.15, 8.0);
pub const MASS_RATIO_RANGE: (f64, f64) = (0.1, 1.0);
pub const ECCENTRICITY_RANGE: (f64, f64) = (0.0, 0.99);
/// Offset keeping the eccentricity grid off zero, where e^η diverges
pub const ECCENTRICITY_OFFSET: f64 = 1e-4;

/// Mass ratio separating the small-q and large-q power laws
const SMALL_Q_BOUNDARY: f64 = 0.3;
/// Mass ratios above this count as twins
const TWIN_Q: f64 = 0.95;
/// Periods at or below this (days) are treated as circularised
const CIRCULAR_PERIOD_DAYS: f64 = 2.0;
const CIRCULAR_ETA: f64 = -3.2;
/// Fraction of e_max where the eccentricity density starts its linear taper
const TAPER_START: f64 = 0.8;
const GRID_TOLERANCE: f64 = 1e-9;

/// Number of points along each axis of the grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridShape {
    pub mass: usize,
    pub log_period: usize,
    pub mass_ratio: usize,
    pub eccentricity: usize,
}

impl Default for GridShape {
    fn default() -> Self {
        Self {
            mass: 101,
            log_period: 158,
            mass_ratio: 91,
            eccentricity: 100,
        }
    }
}

/// Conditional CDF indexed by (axis, period, mass).
///
/// Stored with the sampled axis contiguous so each (period, mass) slice is a
/// plain slice.
#[derive(Debug, Clone, PartialEq)]
pub struct CdfTensor {
    axis_len: usize,
    num_period: usize,
    num_mass: usize,
    values: Vec<f64>,
}

impl CdfTensor {
    fn zeros(axis_len: usize, num_period: usize, num_mass: usize) -> Self {
        Self {
            axis_len,
            num_period,
            num_mass,
            values: vec![0.0; axis_len * num_period * num_mass],
        }
    }

    /// `(axis, period, mass)` lengths
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.axis_len, self.num_period, self.num_mass)
    }

    pub fn get(&self, axis_index: usize, period_index: usize, mass_index: usize) -> f64 {
        self.slice(period_index, mass_index)[axis_index]
    }

    /// The CDF along the sampled axis for one (period, mass) cell.
    pub fn slice(&self, period_index: usize, mass_index: usize) -> &[f64] {
        let start = self.offset(period_index, mass_index);
        &self.values[start..start + self.axis_len]
    }

    fn slice_mut(&mut self, period_index: usize, mass_index: usize) -> &mut [f64] {
        let start = self.offset(period_index, mass_index);
        &mut self.values[start..start + self.axis_len]
    }

    fn offset(&self, period_index: usize, mass_index: usize) -> usize {
        assert!(period_index < self.num_period && mass_index < self.num_mass);
        (mass_index * self.num_period + period_index) * self.axis_len
    }
}

/// Cumulative inner-binary period distribution per primary mass.
///
/// Unlike [`CdfTensor`] slices, each column tops out at the binary fraction
/// of its primary mass rather than at one.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodCdf {
    num_period: usize,
    num_mass: usize,
    values: Vec<f64>,
}

impl PeriodCdf {
    fn zeros(num_period: usize, num_mass: usize) -> Self {
        Self {
            num_period,
            num_mass,
            values: vec![0.0; num_period * num_mass],
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.num_period, self.num_mass)
    }

    pub fn get(&self, period_index: usize, mass_index: usize) -> f64 {
        self.column(mass_index)[period_index]
    }

    pub fn column(&self, mass_index: usize) -> &[f64] {
        assert!(mass_index < self.num_mass);
        let start = mass_index * self.num_period;
        &self.values[start..start + self.num_period]
    }

    fn column_mut(&mut self, mass_index: usize) -> &mut [f64] {
        let start = mass_index * self.num_period;
        &mut self.values[start..start + self.num_period]
    }

    /// Total binary fraction of the given mass column.
    pub fn binary_fraction(&self, mass_index: usize) -> f64 {
        self.column(mass_index).iter().copied().fold(0.0, f64::max)
    }
}

/// Frozen distribution tables for the multi-dimensional sampler.
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionGrids {
    mass: Vec<f64>,
    log_period: Vec<f64>,
    mass_ratio: Vec<f64>,
    eccentricity: Vec<f64>,
    mass_ratio_cdf: CdfTensor,
    eccentricity_cdf: CdfTensor,
    period_cdf: PeriodCdf,
    primary_mass_function: PrimaryMassFunction,
}

/// Build the grids at their standard resolution.
pub fn build_distribution_grids() -> DistributionGrids {
    DistributionGrids::build(GridShape::default())
}

impl DistributionGrids {
    pub fn build(shape: GridShape) -> Self {
        let mass = logspace(MASS_RANGE.0, MASS_RANGE.1, shape.mass);
        let log_period = linspace(LOG_PERIOD_RANGE.0, LOG_PERIOD_RANGE.1, shape.log_period);
        let mass_ratio = linspace(MASS_RATIO_RANGE.0, MASS_RATIO_RANGE.1, shape.mass_ratio);
        let eccentricity: Vec<f64> =
            linspace(ECCENTRICITY_RANGE.0, ECCENTRICITY_RANGE.1, shape.eccentricity)
                .into_iter()
                .map(|e| e + ECCENTRICITY_OFFSET)
                .collect();

        let mut builder = CellBuilder::new(&mass_ratio, &eccentricity);
        let mut mass_ratio_cdf = CdfTensor::zeros(shape.mass_ratio, shape.log_period, shape.mass);
        let mut eccentricity_cdf =
            CdfTensor::zeros(shape.eccentricity, shape.log_period, shape.mass);
        let mut period_cdf = PeriodCdf::zeros(shape.log_period, shape.mass);

        let mut period_weight = vec![0.0; shape.log_period];
        let mut degenerate_slices = 0usize;

        for (i, &m1) in mass.iter().enumerate() {
            let coefficients = MassCoefficients::new(m1);

            for (j, &log_p) in log_period.iter().enumerate() {
                let q_factor = builder.mass_ratio(log_p, &coefficients);
                if !normalized_cumulative(&builder.pdf_q, mass_ratio_cdf.slice_mut(j, i)) {
                    degenerate_slices += 1;
                }

                builder.eccentricity(log_p, m1);
                if !normalized_cumulative(&builder.pdf_e, eccentricity_cdf.slice_mut(j, i)) {
                    degenerate_slices += 1;
                }

                // Companion frequency converted from q > 0.3 to q > 0.1
                let frequency = companion_frequency(log_p, &coefficients) * q_factor;
                period_weight[j] = frequency * inner_binary_probability(log_p, m1);
            }

            let binary_fraction = tabulate_integral(&log_period, &period_weight);
            let column = period_cdf.column_mut(i);
            if normalized_cumulative(&period_weight, column) {
                column.iter_mut().for_each(|c| *c *= binary_fraction);
            } else {
                degenerate_slices += 1;
            }
        }

        log::debug!(
            "built distribution grids: {} masses x {} periods, {} q, {} e ({} degenerate slices)",
            shape.mass,
            shape.log_period,
            shape.mass_ratio,
            shape.eccentricity,
            degenerate_slices,
        );

        Self {
            mass,
            log_period,
            mass_ratio,
            eccentricity,
            mass_ratio_cdf,
            eccentricity_cdf,
            period_cdf,
            primary_mass_function: PrimaryMassFunction::new(),
        }
    }

    pub fn mass(&self) -> &[f64] {
        &self.mass
    }

    pub fn log_period(&self) -> &[f64] {
        &self.log_period
    }

    pub fn mass_ratio(&self) -> &[f64] {
        &self.mass_ratio
    }

    pub fn eccentricity(&self) -> &[f64] {
        &self.eccentricity
    }

    pub fn mass_ratio_cdf(&self) -> &CdfTensor {
        &self.mass_ratio_cdf
    }

    pub fn eccentricity_cdf(&self) -> &CdfTensor {
        &self.eccentricity_cdf
    }

    pub fn period_cdf(&self) -> &PeriodCdf {
        &self.period_cdf
    }

    pub fn primary_mass_function(&self) -> &PrimaryMassFunction {
        &self.primary_mass_function
    }

    pub fn binary_fraction(&self, mass_index: usize) -> f64 {
        self.period_cdf.binary_fraction(mass_index)
    }

    /// Grid column whose mass is closest to `m1`. Primaries outside
    /// 0.8–40 M☉ adopt the statistics of the nearest edge.
    pub fn nearest_mass_index(&self, m1: f64) -> usize {
        nearest_index(m1, &self.mass)
    }

    pub fn nearest_period_index(&self, log_p: f64) -> usize {
        nearest_index(log_p, &self.log_period)
    }
}

/// Scratch buffers and period-independent pieces for one grid cell.
struct CellBuilder<'a> {
    q: &'a [f64],
    e: &'a [f64],
    /// First index with q ≥ 0.3
    large_q_start: usize,
    /// Twin step with unit integral over the q grid
    twin_step: Vec<f64>,
    pdf_q: Vec<f64>,
    pdf_e: Vec<f64>,
}

impl<'a> CellBuilder<'a> {
    fn new(q: &'a [f64], e: &'a [f64]) -> Self {
        let large_q_start = q.partition_point(|&v| v < SMALL_Q_BOUNDARY - GRID_TOLERANCE);

        let mut twin_step: Vec<f64> = q
            .iter()
            .map(|&v| if v >= TWIN_Q - GRID_TOLERANCE { 1.0 } else { 0.0 })
            .collect();
        let twin_area = tabulate_integral(q, &twin_step);
        if twin_area > 0.0 {
            twin_step.iter_mut().for_each(|h| *h /= twin_area);
        }

        Self {
            q,
            e,
            large_q_start,
            twin_step,
            pdf_q: vec![0.0; q.len()],
            pdf_e: vec![0.0; e.len()],
        }
    }

    /// Fill `pdf_q` for this cell and return the ratio of companions with
    /// 0.1 < q < 1 to those with 0.3 < q < 1.
    fn mass_ratio(&mut self, log_p: f64, coefficients: &MassCoefficients) -> f64 {
        let m1 = coefficients.mass;
        let twin = twin_fraction(log_p, coefficients);
        let gamma_large = gamma_large_q(log_p, m1);
        let gamma_small = gamma_small_q(log_p, m1);

        for (f, &q) in self.pdf_q.iter_mut().zip(self.q) {
            *f = q.powf(gamma_large);
        }

        let start = self.large_q_start;
        if start < self.q.len() {
            let large_area = tabulate_integral(&self.q[start..], &self.pdf_q[start..]);
            if large_area > 0.0 {
                self.pdf_q.iter_mut().for_each(|f| *f /= large_area);
            }

            for (f, h) in self.pdf_q.iter_mut().zip(&self.twin_step) {
                *f = *f * (1.0 - twin) + h * twin;
            }

            let at_boundary = self.pdf_q[start];
            for (f, &q) in self.pdf_q[..start].iter_mut().zip(self.q) {
                *f = at_boundary * (q / SMALL_Q_BOUNDARY).powf(gamma_small);
            }
        }

        tabulate_integral(self.q, &self.pdf_q)
    }

    /// Fill `pdf_e` for this cell.
    fn eccentricity(&mut self, log_p: f64, m1: f64) {
        let p_days = 10.0_f64.powf(log_p);

        if p_days <= CIRCULAR_PERIOD_DAYS {
            for (f, &e) in self.pdf_e.iter_mut().zip(self.e) {
                *f = e.powf(CIRCULAR_ETA);
            }
            return;
        }

        let eta = eccentricity_eta(log_p, m1);
        let e_max = maximum_eccentricity(p_days);

        for (f, &e) in self.pdf_e.iter_mut().zip(self.e) {
            *f = if e >= e_max { 0.0 } else { e.powf(eta) };
        }

        // Linear turnover over 0.8 e_max ≤ e ≤ e_max, continuous with the
        // power law below it and zero at e_max.
        let taper_start = TAPER_START * e_max;
        let first = self.e.partition_point(|&e| e < taper_start);
        if first < self.e.len() && self.e[first] <= e_max {
            let anchor = if first > 0 { self.pdf_e[first - 1] } else { 0.0 };
            let width = e_max - taper_start;
            for (f, &e) in self.pdf_e[first..].iter_mut().zip(&self.e[first..]) {
                if e > e_max {
                    break;
                }
                *f = anchor * (e_max - e) / width;
            }
        }
    }
}

/// Write the cumulative sum of `pdf` into `cdf`, shifted to start at zero and
/// scaled to end at one.
///
/// Returns `false` and leaves `cdf` all zero when the slice has no support.
pub(crate) fn normalized_cumulative(pdf: &[f64], cdf: &mut [f64]) -> bool {
    let first = pdf.first().copied().unwrap_or(0.0);

    let mut running = 0.0;
    for (c, f) in cdf.iter_mut().zip(pdf) {
        running += f;
        *c = running - first;
    }

    let max = cdf.iter().copied().fold(0.0, f64::max);
    if !(max > 0.0 && max.is_finite()) {
        cdf.iter_mut().for_each(|c| *c = 0.0);
        return false;
    }

    cdf.iter_mut().for_each(|c| *c = (*c / max).clamp(0.0, 1.0));
    true
}
