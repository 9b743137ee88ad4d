// src/numerics/types/factory.rs
// Named constructors for Vector3, as free functions.
//
// Intended to be used through the module path, e.g. `factory::xy(1.0, 2.0)`.

use super::traits::Vector3d;
use super::vector::Vector3;

/// Creates `(x, y, z)`.
pub fn xyz(x: f64, y: f64, z: f64) -> Vector3 {
    Vector3::new(x, y, z)
}

/// Creates `(x, 0, 0)`.
pub fn x(x: f64) -> Vector3 {
    Vector3::new(x, 0.0, 0.0)
}

/// Creates `(0, y, 0)`.
pub fn y(y: f64) -> Vector3 {
    Vector3::new(0.0, y, 0.0)
}

/// Creates `(0, 0, z)`.
pub fn z(z: f64) -> Vector3 {
    Vector3::new(0.0, 0.0, z)
}

/// Creates `(x, y, 0)`.
pub fn xy(x: f64, y: f64) -> Vector3 {
    Vector3::new(x, y, 0.0)
}

/// Creates `(x, 0, z)`.
pub fn xz(x: f64, z: f64) -> Vector3 {
    Vector3::new(x, 0.0, z)
}

/// Creates `(0, y, z)`.
pub fn yz(y: f64, z: f64) -> Vector3 {
    Vector3::new(0.0, y, z)
}

/// Creates `(0, 0, 0)`.
pub fn zero() -> Vector3 {
    Vector3::ZERO
}

/// Creates `(1, 1, 1)`, equal to [`Vector3::UNITY`].
///
/// Older releases of this API documented `(1, 1, 1)` but built the zero
/// vector. This function follows the documented value; callers that relied
/// on the zero result must switch to [`zero`].
pub fn unity() -> Vector3 {
    Vector3::UNITY
}

/// Component-wise copy of `source`, which may be any [`Vector3d`].
pub fn clone<V: Vector3d + ?Sized>(source: &V) -> Vector3 {
    Vector3::new(source.x(), source.y(), source.z())
}
