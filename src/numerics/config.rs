// src/numerics/config.rs

use super::types::traits::Vector3d;

/// Configuration for approximate floating-point comparison of vectors.
///
/// Comparisons are absolute: two scalars are equal when their difference
/// does not exceed `epsilon`. NaN never compares equal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Largest absolute difference still treated as equal.
    pub epsilon: f64,
}

impl Default for Tolerance {
    /// Creates a tolerance of `1e-9`, tight enough for degree-valued angles
    /// and unit-scale geometry.
    fn default() -> Self {
        Self { epsilon: 1e-9 }
    }
}

impl Tolerance {
    /// Creates a tolerance with the given absolute epsilon.
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }

    /// Machine-epsilon tolerance for results that should be exact up to one rounding step.
    pub fn strict() -> Self {
        Self {
            epsilon: f64::EPSILON,
        }
    }

    /// Tolerance suited to results accumulated over several operations.
    pub fn loose() -> Self {
        Self { epsilon: 1e-6 }
    }

    /// Compares two scalars.
    pub fn scalars_eq(&self, a: f64, b: f64) -> bool {
        if a == b {
            // covers matching infinities
            return true;
        }
        (a - b).abs() <= self.epsilon
    }

    /// Compares two vectors component-wise.
    pub fn vectors_eq<A, B>(&self, a: &A, b: &B) -> bool
    where
        A: Vector3d + ?Sized,
        B: Vector3d + ?Sized,
    {
        self.scalars_eq(a.x(), b.x()) && self.scalars_eq(a.y(), b.y()) && self.scalars_eq(a.z(), b.z())
    }
}
