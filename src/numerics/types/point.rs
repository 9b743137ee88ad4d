// src/numerics/types/point.rs
// Point3 is an alias for Vector3.

use super::vector::Vector3;

/// Point3 is an alias to Vector3 to represent points in space.
///
/// Points and directions share one representation; `distance`, `lerp` and
/// the arithmetic operations apply to both.
pub type Point3 = Vector3;
