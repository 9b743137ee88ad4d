// src/numerics/types/mutable.rs
// Mutable counterpart of Vector3, used as the working receiver of transforms.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::super::error::VectorError;
use super::traits::Vector3d;

/// A 3D vector whose components can be reassigned in place.
///
/// Obtained from [`Vector3d::to_mutable`] and turned back into an immutable
/// value with [`Vector3d::to_vector`]. The two types are unrelated apart from
/// these conversions.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MutableVector3 {
    x: f64,
    y: f64,
    z: f64,
}

impl MutableVector3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn set_x(&mut self, x: f64) -> &mut Self {
        self.x = x;
        self
    }

    pub fn set_y(&mut self, y: f64) -> &mut Self {
        self.y = y;
        self
    }

    pub fn set_z(&mut self, z: f64) -> &mut Self {
        self.z = z;
        self
    }

    /// Assigns all three components.
    pub fn set_xyz(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }

    /// Assigns the i-th component.
    ///
    /// # Errors
    /// Returns [`VectorError::InvalidIndex`] unless `i` is 0, 1 or 2.
    pub fn set(&mut self, i: isize, value: f64) -> Result<&mut Self, VectorError> {
        match i {
            0 => self.x = value,
            1 => self.y = value,
            2 => self.z = value,
            _ => return Err(VectorError::InvalidIndex { index: i }),
        }
        Ok(self)
    }
}

impl Vector3d for MutableVector3 {
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
