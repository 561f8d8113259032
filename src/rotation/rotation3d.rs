use crate::errors::TransformError;
use crate::float_types::{Real, tolerance};
use crate::rotation::AxisAngle3d;
use crate::traits::PointTransform;
use crate::vector::VectorExt;
use core::ops::Mul;
use nalgebra::{Matrix3, Rotation3, Vector3};

/// A rotation in space, stored as the images of the X and Y axes.
///
/// Z is derived as `x × y`. As with [`Rotation2d`](super::Rotation2d), zero
/// axes mark an undefined rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rotation3d {
    x: Vector3<Real>,
    y: Vector3<Real>,
}

impl Default for Rotation3d {
    fn default() -> Self {
        Self::identity()
    }
}

impl_approx_eq!(Rotation3d { x, y });

impl Rotation3d {
    #[inline]
    pub fn identity() -> Self {
        Self {
            x: Vector3::x(),
            y: Vector3::y(),
        }
    }

    /// Builds the frame whose X axis is parallel to `x` and whose XY-plane
    /// contains `xy`.
    ///
    /// Degenerate input (a zero `x`, or `xy` parallel to `x`) yields an
    /// invalid rotation; [`try_from_vectors`](Self::try_from_vectors) reports
    /// it instead.
    pub fn from_vectors(x: Vector3<Real>, xy: Vector3<Real>) -> Self {
        Self::try_from_vectors(x, xy).unwrap_or_else(|err| {
            log::debug!("Rotation3d::from_vectors: {err}");
            Self {
                x: Vector3::zeros(),
                y: Vector3::zeros(),
            }
        })
    }

    pub fn try_from_vectors(
        x: Vector3<Real>,
        xy: Vector3<Real>,
    ) -> Result<Self, TransformError> {
        let x = x
            .try_unitized()
            .ok_or(TransformError::ZeroLength { what: "x axis" })?;
        // Gram-Schmidt
        let y = (xy - x * x.dot(&xy))
            .try_unitized()
            .ok_or(TransformError::Collinear)?;
        Ok(Self { x, y })
    }

    #[inline]
    pub const fn x(&self) -> Vector3<Real> {
        self.x
    }

    #[inline]
    pub const fn y(&self) -> Vector3<Real> {
        self.y
    }

    #[inline]
    pub fn z(&self) -> Vector3<Real> {
        self.x.cross(&self.y)
    }

    pub fn is_valid(&self) -> bool {
        let tol = tolerance();
        self.x.is_unit(tol) && self.y.is_unit(tol) && self.x.dot(&self.y).abs() <= tol
    }

    /// Swaps the X and Z axes in place, flipping Y to stay right-handed.
    pub fn swap_zx(&mut self) {
        let z = self.z();
        self.x = z;
        self.y = -self.y;
    }

    /// Transposes the basis in place.
    pub fn invert(&mut self) {
        let z = self.z();
        let (x, y) = (self.x, self.y);
        self.x = Vector3::new(x.x, y.x, z.x);
        self.y = Vector3::new(x.y, y.y, z.y);
    }

    #[inline]
    #[must_use]
    pub fn inverse(&self) -> Self {
        let mut r = *self;
        r.invert();
        r
    }

    #[inline]
    pub fn apply(&self, v: Vector3<Real>) -> Vector3<Real> {
        self.x * v.x + self.y * v.y + self.z() * v.z
    }

    #[inline]
    pub fn apply_inverse(&self, v: Vector3<Real>) -> Vector3<Real> {
        Vector3::new(v.dot(&self.x), v.dot(&self.y), v.dot(&self.z()))
    }

    /// Applies this rotation to `other`; the result rotates by `other` first.
    #[inline]
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            x: self.apply(other.x),
            y: self.apply(other.y),
        }
    }

    #[inline]
    pub fn compose_inverse(&self, other: &Self) -> Self {
        Self {
            x: self.apply_inverse(other.x),
            y: self.apply_inverse(other.y),
        }
    }

    /// The rotation that carries `from`'s frame onto `to`'s frame.
    pub fn from_to(from: &Self, to: &Self) -> Self {
        to.compose(&from.inverse())
    }

    /// Columns are the X, Y and Z axes.
    pub fn to_matrix(&self) -> Matrix3<Real> {
        Matrix3::from_columns(&[self.x, self.y, self.z()])
    }
}

impl From<AxisAngle3d> for Rotation3d {
    fn from(rotation: AxisAngle3d) -> Self {
        Self {
            x: rotation.rotate(Vector3::x()),
            y: rotation.rotate(Vector3::y()),
        }
    }
}

impl From<Rotation3<Real>> for Rotation3d {
    fn from(rotation: Rotation3<Real>) -> Self {
        Self {
            x: rotation * Vector3::x(),
            y: rotation * Vector3::y(),
        }
    }
}

impl Mul for Rotation3d {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.compose(&rhs)
    }
}

impl Mul<Vector3<Real>> for Rotation3d {
    type Output = Vector3<Real>;

    fn mul(self, rhs: Vector3<Real>) -> Vector3<Real> {
        self.apply(rhs)
    }
}

impl PointTransform<Vector3<Real>> for Rotation3d {
    fn transform_point(&self, point: Vector3<Real>) -> Vector3<Real> {
        self.apply(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float_types::FRAC_PI_2;
    use approx::assert_relative_eq;

    #[test]
    fn from_vectors_is_orthonormal() {
        let r = Rotation3d::from_vectors(Vector3::new(2.0, 0.0, 0.0), Vector3::new(1.0, 5.0, 0.0));
        assert!(r.is_valid());
        assert_relative_eq!(r.x(), Vector3::x(), epsilon = 1e-12);
        assert_relative_eq!(r.y(), Vector3::y(), epsilon = 1e-12);
        assert_relative_eq!(r.z(), Vector3::z(), epsilon = 1e-12);
    }

    #[test]
    fn collinear_vectors_are_invalid() {
        let r = Rotation3d::from_vectors(Vector3::x(), Vector3::new(3.0, 0.0, 0.0));
        assert!(!r.is_valid());
        assert_eq!(
            Rotation3d::try_from_vectors(Vector3::x(), Vector3::x()),
            Err(TransformError::Collinear)
        );
    }

    #[test]
    fn swap_zx_stays_right_handed() {
        let mut r = Rotation3d::identity();
        r.swap_zx();
        assert_relative_eq!(r.x(), Vector3::z(), epsilon = 1e-12);
        assert_relative_eq!(r.z(), Vector3::x(), epsilon = 1e-12);
        assert_relative_eq!(r.to_matrix().determinant(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn matches_nalgebra() {
        let axis = Vector3::new(1.0, -2.0, 0.5).normalize();
        let reference = Rotation3::from_axis_angle(&nalgebra::Unit::new_normalize(axis), 0.9);
        let r = Rotation3d::from(AxisAngle3d::new(axis, 0.9));
        assert_relative_eq!(r, Rotation3d::from(reference), epsilon = 1e-12);
        assert_relative_eq!(r.to_matrix(), *reference.matrix(), epsilon = 1e-12);
    }

    #[test]
    fn inverse_undoes_apply() {
        let r = Rotation3d::from(AxisAngle3d::new(Vector3::z(), FRAC_PI_2));
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_relative_eq!(r.inverse().apply(r.apply(v)), v, epsilon = 1e-12);
        assert_relative_eq!(r.apply_inverse(r.apply(v)), v, epsilon = 1e-12);
    }
}
