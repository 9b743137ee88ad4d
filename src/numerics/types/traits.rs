// src/numerics/types/traits.rs
// Vector3d capability trait: three accessors, everything else derived.

use std::f64::consts::PI;
use std::fmt::Write;

use tracing::{debug, trace};

use super::super::config::Tolerance;
use super::super::error::VectorError;
use super::mutable::MutableVector3;
use super::transform::Transform;
use super::vector::Vector3;

/// Read access to a 3D vector plus the full set of derived operations.
///
/// Implementors only provide `x()`, `y()` and `z()`. Every other method is
/// written once here and returns a freshly constructed [`Vector3`]; the
/// receiver is never modified.
///
/// Degenerate inputs are not guarded. Dividing by zero, normalizing the zero
/// vector or projecting onto it yields Infinity/NaN components, exactly as
/// plain `f64` arithmetic would. The single exception is [`angle`], which
/// clamps the cosine into `[-1, 1]` before `acos`.
///
/// [`angle`]: Vector3d::angle
pub trait Vector3d {
    /// The `x` component.
    fn x(&self) -> f64;

    /// The `y` component.
    fn y(&self) -> f64;

    /// The `z` component.
    fn z(&self) -> f64;

    /// Returns the components as `[x, y, z]`.
    fn components(&self) -> [f64; 3] {
        [self.x(), self.y(), self.z()]
    }

    /// Returns the i-th component.
    ///
    /// # Errors
    /// Returns [`VectorError::InvalidIndex`] unless `i` is 0, 1 or 2.
    fn get(&self, i: isize) -> Result<f64, VectorError> {
        match i {
            0 => Ok(self.x()),
            1 => Ok(self.y()),
            2 => Ok(self.z()),
            _ => {
                debug!(index = i as i64, "vector component index out of range");
                Err(VectorError::InvalidIndex { index: i })
            }
        }
    }

    /// Immutable copy of this vector.
    fn to_vector(&self) -> Vector3 {
        Vector3::new(self.x(), self.y(), self.z())
    }

    /// Mutable copy of this vector. The copy shares nothing with `self`.
    fn to_mutable(&self) -> MutableVector3 {
        MutableVector3::new(self.x(), self.y(), self.z())
    }

    fn negated(&self) -> Vector3 {
        Vector3::new(-self.x(), -self.y(), -self.z())
    }

    fn plus<V: Vector3d + ?Sized>(&self, v: &V) -> Vector3 {
        Vector3::new(self.x() + v.x(), self.y() + v.y(), self.z() + v.z())
    }

    fn plus_xyz(&self, x: f64, y: f64, z: f64) -> Vector3 {
        Vector3::new(self.x() + x, self.y() + y, self.z() + z)
    }

    fn minus<V: Vector3d + ?Sized>(&self, v: &V) -> Vector3 {
        Vector3::new(self.x() - v.x(), self.y() - v.y(), self.z() - v.z())
    }

    fn minus_xyz(&self, x: f64, y: f64, z: f64) -> Vector3 {
        Vector3::new(self.x() - x, self.y() - y, self.z() - z)
    }

    /// Scalar product.
    fn times(&self, a: f64) -> Vector3 {
        Vector3::new(self.x() * a, self.y() * a, self.z() * a)
    }

    /// Component-wise (Hadamard) product.
    fn times_vector<V: Vector3d + ?Sized>(&self, a: &V) -> Vector3 {
        Vector3::new(self.x() * a.x(), self.y() * a.y(), self.z() * a.z())
    }

    /// Component-wise product with three explicit factors.
    fn times_xyz(&self, x: f64, y: f64, z: f64) -> Vector3 {
        Vector3::new(self.x() * x, self.y() * y, self.z() * z)
    }

    /// Same as [`plus`](Vector3d::plus).
    fn added<V: Vector3d + ?Sized>(&self, v: &V) -> Vector3 {
        self.plus(v)
    }

    /// Same as [`minus`](Vector3d::minus).
    fn subtracted<V: Vector3d + ?Sized>(&self, v: &V) -> Vector3 {
        self.minus(v)
    }

    /// Same as [`times`](Vector3d::times).
    fn multiplied(&self, a: f64) -> Vector3 {
        self.times(a)
    }

    /// Same as [`times_vector`](Vector3d::times_vector).
    fn multiplied_vector<V: Vector3d + ?Sized>(&self, a: &V) -> Vector3 {
        self.times_vector(a)
    }

    /// Divides every component by `a`. Division by zero is not special-cased.
    fn divided(&self, a: f64) -> Vector3 {
        Vector3::new(self.x() / a, self.y() / a, self.z() / a)
    }

    fn dot<V: Vector3d + ?Sized>(&self, a: &V) -> f64 {
        self.x() * a.x() + self.y() * a.y() + self.z() * a.z()
    }

    /// Euclidean length.
    fn magnitude(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Squared length, `self.dot(self)`. Avoids the square root.
    fn magnitude_sq(&self) -> f64 {
        self.dot(self)
    }

    /// Copy of this vector scaled to length 1.
    ///
    /// The zero vector produces NaN components; callers guard if needed.
    fn normalized(&self) -> Vector3 {
        self.divided(self.magnitude())
    }

    fn crossed<V: Vector3d + ?Sized>(&self, a: &V) -> Vector3 {
        Vector3::new(
            self.y() * a.z() - self.z() * a.y(),
            self.z() * a.x() - self.x() * a.z(),
            self.x() * a.y() - self.y() * a.x(),
        )
    }

    /// Angle between this and `v`, in degrees.
    fn angle<V: Vector3d + ?Sized>(&self, v: &V) -> f64 {
        let cos = self.dot(v) / (self.magnitude() * v.magnitude());
        // rounding can push |cos| slightly past 1
        cos.clamp(-1.0, 1.0).acos() * 180.0 / PI
    }

    /// Distance between this point and `p`.
    fn distance<V: Vector3d + ?Sized>(&self, p: &V) -> f64 {
        self.minus(p).magnitude()
    }

    /// Linear interpolation: `self` at `t = 0`, `a` at `t = 1`.
    ///
    /// `t` is not clamped, values outside `[0, 1]` extrapolate along the line.
    fn lerp<V: Vector3d + ?Sized>(&self, a: &V, t: f64) -> Vector3 {
        self.plus(&a.minus(self).times(t))
    }

    /// Projects `v` onto this vector.
    fn project<V: Vector3d + ?Sized>(&self, v: &V) -> Vector3 {
        let scale = v.dot(self) / self.magnitude_sq();
        self.times(scale)
    }

    /// Some vector perpendicular to this one. Not normalized.
    ///
    /// Built from the xy plane when `|z| < |x|`, otherwise from the yz plane,
    /// which keeps the result away from zero length for axis-aligned input.
    fn orthogonal(&self) -> Vector3 {
        if self.z().abs() < self.x().abs() {
            Vector3::new(self.y(), -self.x(), 0.0)
        } else {
            Vector3::new(0.0, -self.z(), self.y())
        }
    }

    /// Applies `transform` to a mutable copy of this vector and returns its result.
    fn transformed<T: Transform + ?Sized>(&self, transform: &T) -> Vector3 {
        trace!(x = self.x(), y = self.y(), z = self.z(), "bridging vector to transform");
        transform.apply(&mut self.to_mutable())
    }

    /// Like [`transformed`](Vector3d::transformed) with a blend amount.
    fn transformed_blended<T: Transform + ?Sized>(&self, transform: &T, amount: f64) -> Vector3 {
        trace!(
            x = self.x(),
            y = self.y(),
            z = self.z(),
            amount,
            "bridging vector to blended transform"
        );
        transform.apply_blended(&mut self.to_mutable(), amount)
    }

    /// Returns `"x y z"` as used by STL vertex and normal lines.
    fn to_stl_string(&self) -> String {
        let mut buf = String::new();
        self.append_stl_string(&mut buf);
        buf
    }

    /// Appends `"x y z"` to `buf` and returns it.
    fn append_stl_string<'a>(&self, buf: &'a mut String) -> &'a mut String {
        append_coordinates(buf, self.x(), self.y(), self.z())
    }

    /// Returns `"x y z"` as used by OBJ `v` lines.
    fn to_obj_string(&self) -> String {
        let mut buf = String::new();
        self.append_obj_string(&mut buf);
        buf
    }

    /// Appends `"x y z"` to `buf` and returns it.
    fn append_obj_string<'a>(&self, buf: &'a mut String) -> &'a mut String {
        append_coordinates(buf, self.x(), self.y(), self.z())
    }

    /// Component-wise comparison within `tolerance`.
    fn approx_eq<V: Vector3d + ?Sized>(&self, other: &V, tolerance: &Tolerance) -> bool {
        tolerance.vectors_eq(self, other)
    }
}

// `{:?}` keeps the shortest round-trippable text and always shows a decimal
// point for integral values (`1.0`, not `1`).
fn append_coordinates(buf: &mut String, x: f64, y: f64, z: f64) -> &mut String {
    // writing into a String cannot fail
    let _ = write!(buf, "{:?} {:?} {:?}", x, y, z);
    buf
}
