//! Comparing a computed matrix against a reference.

use crate::error::{Result, ValidationError};
use crate::matrix::Matrix;

/// Closeness bound: `|actual - expected| <= atol + rtol * |expected|`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    pub rtol: f64,
    pub atol: f64,
}

impl Tolerance {
    pub const DEFAULT_RTOL: f64 = 1e-5;
    pub const DEFAULT_ATOL: f64 = 1e-8;

    pub fn new(rtol: f64, atol: f64) -> Self {
        Self { rtol, atol }
    }

    /// Tolerance that only accepts equal values.
    pub fn exact() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Asymmetric in its arguments: the bound scales with `expected`.
    /// NaN is never close to anything; equal infinities are.
    pub fn is_close(&self, actual: f64, expected: f64) -> bool {
        if actual == expected {
            return true;
        }
        (actual - expected).abs() <= self.atol + self.rtol * expected.abs()
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RTOL, Self::DEFAULT_ATOL)
    }
}

/// Check `actual` against `expected` element by element.
pub fn verify(actual: &Matrix, expected: &Matrix, tolerance: Tolerance) -> Result<()> {
    if actual.shape() != expected.shape() {
        return Err(ValidationError::ShapeMismatch {
            actual: actual.shape(),
            expected: expected.shape(),
        }
        .into());
    }

    let cols = actual.cols().max(1);
    let mut first = None;
    let mut mismatches = 0;

    for (index, (&a, &e)) in actual
        .as_slice()
        .iter()
        .zip(expected.as_slice())
        .enumerate()
    {
        if !tolerance.is_close(a, e) {
            mismatches += 1;
            first.get_or_insert((index, a, e));
        }
    }

    match first {
        None => Ok(()),
        Some((index, actual, expected)) => Err(ValidationError::ValueMismatch {
            row: index / cols,
            col: index % cols,
            actual,
            expected,
            mismatches,
        }
        .into()),
    }
}
