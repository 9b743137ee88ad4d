// src/numerics/types/transform.rs

use super::mutable::MutableVector3;
use super::traits::Vector3d;
use super::vector::Vector3;

/// A geometric transform (rotation, scaling, ...) defined outside this crate.
///
/// The receiver is a scratch [`MutableVector3`] that the transform may
/// overwrite; callers such as [`Vector3d::transformed`] always hand in a
/// fresh copy and return the result unchanged.
///
/// Any `Fn(&mut MutableVector3) -> Vector3` closure is a `Transform`.
pub trait Transform {
    /// Applies the transform to `v`.
    fn apply(&self, v: &mut MutableVector3) -> Vector3;

    /// Applies the transform partially.
    ///
    /// The default blends linearly from the untransformed vector (`amount = 0`)
    /// to the full result of [`apply`](Transform::apply) (`amount = 1`).
    /// `amount` is not clamped.
    fn apply_blended(&self, v: &mut MutableVector3, amount: f64) -> Vector3 {
        let start = v.to_vector();
        let end = self.apply(v);
        start.lerp(&end, amount)
    }
}

impl<F> Transform for F
where
    F: Fn(&mut MutableVector3) -> Vector3,
{
    fn apply(&self, v: &mut MutableVector3) -> Vector3 {
        self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scales in place, then freezes the receiver.
    struct Scale(f64);

    impl Transform for Scale {
        fn apply(&self, v: &mut MutableVector3) -> Vector3 {
            let (x, y, z) = (v.x() * self.0, v.y() * self.0, v.z() * self.0);
            v.set_xyz(x, y, z);
            v.to_vector()
        }
    }

    /// Overrides the blended shape to record what it was given.
    struct Echo;

    impl Transform for Echo {
        fn apply(&self, v: &mut MutableVector3) -> Vector3 {
            v.to_vector()
        }

        fn apply_blended(&self, _v: &mut MutableVector3, amount: f64) -> Vector3 {
            Vector3::new(amount, amount, amount)
        }
    }

    #[test]
    fn test_transformed_leaves_receiver_untouched() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let scaled = v.transformed(&Scale(2.0));
        assert_eq!(scaled, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_default_blend() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.transformed_blended(&Scale(3.0), 0.0), v);
        assert_eq!(v.transformed_blended(&Scale(3.0), 1.0), Vector3::new(3.0, 6.0, 9.0));
        assert_eq!(v.transformed_blended(&Scale(3.0), 0.5), Vector3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn test_result_returned_verbatim() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.transformed_blended(&Echo, 0.25), Vector3::new(0.25, 0.25, 0.25));
    }

    #[test]
    fn test_closure_transform() {
        let translate = |m: &mut MutableVector3| m.plus_xyz(10.0, 0.0, 0.0);
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.transformed(&translate), Vector3::new(11.0, 2.0, 3.0));
    }

    #[test]
    fn test_dyn_transform() {
        let transforms: Vec<Box<dyn Transform>> = vec![Box::new(Scale(2.0)), Box::new(Echo)];
        let v = Vector3::UNITY;
        let results: Vec<Vector3> = transforms.iter().map(|t| v.transformed(t.as_ref())).collect();
        assert_eq!(results, vec![Vector3::new(2.0, 2.0, 2.0), Vector3::UNITY]);
    }
}
