//! The small set of vector operations the transforms lean on that `nalgebra`
//! does not name directly.

use crate::float_types::Real;
use nalgebra::{Vector2, Vector3};

/// In-place unitization and related helpers for `nalgebra` vectors.
pub trait VectorExt: Sized {
    /// Scales the vector to unit length in place.
    ///
    /// Returns `false` and leaves the vector untouched if its length is zero
    /// or not finite.
    fn unitize(&mut self) -> bool;

    /// Returns `true` if the length of the vector is within `tol` of one.
    fn is_unit(&self, tol: Real) -> bool;

    /// Returns a unit copy of the vector, or `None` if it cannot be unitized.
    fn try_unitized(&self) -> Option<Self>;
}

macro_rules! impl_vector_ext {
    ($vector:ty) => {
        impl VectorExt for $vector {
            #[inline]
            fn unitize(&mut self) -> bool {
                let norm_sq = self.norm_squared();
                if norm_sq > 0.0 && norm_sq.is_finite() {
                    *self /= norm_sq.sqrt();
                    true
                } else {
                    false
                }
            }

            #[inline]
            fn is_unit(&self, tol: Real) -> bool {
                (self.norm_squared() - 1.0).abs() <= tol
            }

            #[inline]
            fn try_unitized(&self) -> Option<Self> {
                let mut v = *self;
                v.unitize().then_some(v)
            }
        }
    };
}

impl_vector_ext!(Vector2<Real>);
impl_vector_ext!(Vector3<Real>);

/// Returns `v` rotated a quarter turn counter-clockwise, `(-y, x)`.
#[inline]
pub fn perp_ccw(v: &Vector2<Real>) -> Vector2<Real> {
    Vector2::new(-v.y, v.x)
}
