// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Smoothing-free interpolating B-splines of low degree.
//!
//! Mode amplitudes and phases are stored as sample tables with a per-group
//! polynomial degree; reconstruction evaluates the interpolating spline of
//! that degree on the common time grid. Knots are placed the standard way
//! for interpolation (boundary knots repeated degree + 1 times, interior
//! knots at the data sites for odd degrees, at midpoints between data sites
//! for even degrees), which keeps the collocation system banded.

use ndarray::Array2;
use thiserror::Error;

use crate::constants::MAX_SPLINE_DEGREE;

#[derive(Error, Debug)]
pub enum SplineError {
    #[error("X has {x_len} samples but Y has {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },

    #[error("Spline degree {0} is not in 1..=5")]
    BadDegree(usize),

    #[error("{got} samples are too few for a degree-{degree} spline")]
    InsufficientData { got: usize, degree: usize },

    #[error("X is not strictly increasing at index {0}")]
    NotStrictlyIncreasing(usize),
}

/// An interpolating polynomial spline over strictly increasing sample
/// abscissas.
#[derive(Debug, Clone)]
pub struct Spline {
    degree: usize,
    /// Knot vector; `coeffs.len() + degree + 1` long.
    knots: Vec<f64>,
    /// B-spline coefficients, one per data point.
    coeffs: Vec<f64>,
}

impl Spline {
    /// Build the degree-`degree` spline through every `(x, y)` sample. No
    /// smoothing is applied, so `evaluate` reproduces `y` at each `x`.
    pub fn interpolating(x: &[f64], y: &[f64], degree: usize) -> Result<Self, SplineError> {
        if x.len() != y.len() {
            return Err(SplineError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        if !(1..=MAX_SPLINE_DEGREE).contains(&degree) {
            return Err(SplineError::BadDegree(degree));
        }
        let n = x.len();
        if n <= degree {
            return Err(SplineError::InsufficientData { got: n, degree });
        }
        for i in 1..n {
            if x[i] <= x[i - 1] {
                return Err(SplineError::NotStrictlyIncreasing(i));
            }
        }

        let knots = interpolation_knots(x, degree);
        let coeffs = solve_collocation(x, y, &knots, degree);
        Ok(Self {
            degree,
            knots,
            coeffs,
        })
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Evaluate the spline at a single point with de Boor's algorithm.
    /// Points outside the sample range use the boundary polynomial.
    pub fn evaluate(&self, x: f64) -> f64 {
        let k = self.degree;
        let span = find_span(&self.knots, self.coeffs.len(), k, x);
        let mut d = self.coeffs[span - k..=span].to_vec();
        for r in 1..=k {
            for j in (r..=k).rev() {
                let i = span - k + j;
                let alpha = (x - self.knots[i]) / (self.knots[i + k + 1 - r] - self.knots[i]);
                d[j] = (1.0 - alpha) * d[j - 1] + alpha * d[j];
            }
        }
        d[k]
    }

    /// Evaluate the spline at every point of `xs`.
    pub fn evaluate_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }
}

/// The knot vector for interpolation at the sites `x`: each boundary site
/// repeated `degree + 1` times, interior knots at sites (odd degrees) or
/// site midpoints (even degrees).
fn interpolation_knots(x: &[f64], degree: usize) -> Vec<f64> {
    let n = x.len();
    let mut knots = Vec::with_capacity(n + degree + 1);
    knots.extend(std::iter::repeat(x[0]).take(degree + 1));
    for j in 0..n - degree - 1 {
        knots.push(if degree % 2 == 1 {
            x[j + (degree + 1) / 2]
        } else {
            0.5 * (x[j + degree / 2] + x[j + degree / 2 + 1])
        });
    }
    knots.extend(std::iter::repeat(x[n - 1]).take(degree + 1));
    knots
}

/// Index of the knot span containing `x`, clamped to the data range so that
/// out-of-range points fall in a boundary span.
fn find_span(knots: &[f64], n: usize, degree: usize, x: f64) -> usize {
    if x >= knots[n] {
        return n - 1;
    }
    if x <= knots[degree] {
        return degree;
    }
    let mut lo = degree;
    let mut hi = n;
    while hi - lo > 1 {
        let mid = (lo + hi) / 2;
        if knots[mid] <= x {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    lo
}

/// The `degree + 1` non-zero basis functions at `x` for the given span
/// (Cox-de Boor recurrence).
fn basis_functions(knots: &[f64], span: usize, degree: usize, x: f64) -> Vec<f64> {
    let mut values = vec![0.0; degree + 1];
    values[0] = 1.0;
    let mut left = vec![0.0; degree + 1];
    let mut right = vec![0.0; degree + 1];
    for j in 1..=degree {
        left[j] = x - knots[span + 1 - j];
        right[j] = knots[span + j] - x;
        let mut saved = 0.0;
        for r in 0..j {
            let tmp = values[r] / (right[r + 1] + left[j - r]);
            values[r] = saved + right[r + 1] * tmp;
            saved = left[j - r] * tmp;
        }
        values[j] = saved;
    }
    values
}

/// Solve the collocation system `A c = y`, where `A[(i, j)]` is basis
/// function j evaluated at `x[i]`. With interpolation knots the matrix has
/// at most `degree` sub- and super-diagonals and is totally positive, so
/// Gaussian elimination needs no pivoting.
fn solve_collocation(x: &[f64], y: &[f64], knots: &[f64], degree: usize) -> Vec<f64> {
    let n = x.len();
    // Band storage: entry (row, col) lives at [(row, col - row + degree)].
    let mut band = Array2::<f64>::zeros((n, 2 * degree + 1));
    let mut rhs = y.to_vec();

    for (i, &xi) in x.iter().enumerate() {
        let span = find_span(knots, n, degree, xi);
        for (offset, &value) in basis_functions(knots, span, degree, xi).iter().enumerate() {
            let j = span - degree + offset;
            band[(i, j + degree - i)] = value;
        }
    }

    // Forward elimination.
    for col in 0..n {
        let pivot = band[(col, degree)];
        for row in col + 1..(col + degree + 1).min(n) {
            let factor = band[(row, col + degree - row)] / pivot;
            if factor == 0.0 {
                continue;
            }
            for j in col..(col + degree + 1).min(n) {
                band[(row, j + degree - row)] -= factor * band[(col, j + degree - col)];
            }
            rhs[row] -= factor * rhs[col];
        }
    }

    // Back substitution.
    let mut coeffs = vec![0.0; n];
    for row in (0..n).rev() {
        let mut sum = rhs[row];
        for j in row + 1..(row + degree + 1).min(n) {
            sum -= band[(row, j + degree - row)] * coeffs[j];
        }
        coeffs[row] = sum / band[(row, degree)];
    }
    coeffs
}
