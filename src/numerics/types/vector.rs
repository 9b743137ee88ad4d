// src/numerics/types/vector.rs
// Immutable Vector3 value type. Derived operations come from the Vector3d trait.

use core::fmt;
use core::ops::{Add, Div, Index, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::super::error::VectorError;
use super::traits::Vector3d;

/// Vector3 is an immutable 3D vector of `f64` components.
///
/// The fields are private: once constructed a `Vector3` never changes, so
/// values (including the associated constants) can be shared freely between
/// threads. Equality is component-wise.
///
/// Most operations live on [`Vector3d`]; bring it into scope to use them.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Vector3 {
    x: f64,
    y: f64,
    z: f64,
}

impl Vector3 {
    /// `(1, 1, 1)`
    pub const UNITY: Vector3 = Vector3::new(1.0, 1.0, 1.0);
    /// `(1, 0, 0)`
    pub const X_ONE: Vector3 = Vector3::new(1.0, 0.0, 0.0);
    /// `(0, 1, 0)`
    pub const Y_ONE: Vector3 = Vector3::new(0.0, 1.0, 0.0);
    /// `(0, 0, 1)`
    pub const Z_ONE: Vector3 = Vector3::new(0.0, 0.0, 1.0);
    /// `(0, 0, 0)`
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);

    /// Construct a new Vector3
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl Vector3d for Vector3 {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn z(&self) -> f64 {
        self.z
    }
}

// Serialized as a plain (x, y, z) tuple.
#[cfg(feature = "serde")]
impl Serialize for Vector3 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.x, &self.y, &self.z).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Vector3 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (x, y, z) = <(f64, f64, f64)>::deserialize(deserializer)?;
        Ok(Vector3 { x, y, z })
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?}, {:?})", self.x, self.y, self.z)
    }
}

/// Panics on an index outside `0..=2`; use [`Vector3d::get`] for a checked lookup.
impl Index<usize> for Vector3 {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!(
                "{}",
                VectorError::InvalidIndex {
                    index: isize::try_from(i).unwrap_or(isize::MAX)
                }
            ),
        }
    }
}

// Operators mirror plus/minus/times/divided/negated

impl Add for Vector3 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.plus(&other)
    }
}

impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.minus(&other)
    }
}

impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        self.negated()
    }
}

impl Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, a: f64) -> Self {
        self.times(a)
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        v.times(self)
    }
}

/// Component-wise product.
impl Mul for Vector3 {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        self.times_vector(&other)
    }
}

impl Div<f64> for Vector3 {
    type Output = Self;

    fn div(self, a: f64) -> Self {
        self.divided(a)
    }
}

// Conversions between Vector3 and tuples

impl From<(f64, f64, f64)> for Vector3 {
    fn from(tuple: (f64, f64, f64)) -> Self {
        Self::new(tuple.0, tuple.1, tuple.2)
    }
}

impl From<&(f64, f64, f64)> for Vector3 {
    fn from(tuple: &(f64, f64, f64)) -> Self {
        Self::new(tuple.0, tuple.1, tuple.2)
    }
}

impl From<Vector3> for (f64, f64, f64) {
    fn from(v: Vector3) -> Self {
        (v.x, v.y, v.z)
    }
}

impl From<&Vector3> for (f64, f64, f64) {
    fn from(v: &Vector3) -> Self {
        (v.x, v.y, v.z)
    }
}

// Conversions between Vector3 and arrays [f64; 3]

impl From<[f64; 3]> for Vector3 {
    fn from(array: [f64; 3]) -> Self {
        Self::new(array[0], array[1], array[2])
    }
}

impl From<&[f64; 3]> for Vector3 {
    fn from(array: &[f64; 3]) -> Self {
        Self::new(array[0], array[1], array[2])
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        v.components()
    }
}

impl From<&Vector3> for [f64; 3] {
    fn from(v: &Vector3) -> Self {
        v.components()
    }
}
