use crate::errors::TransformError;
use crate::float_types::{Real, tolerance};
use crate::matrix2d::Matrix2d;
use crate::traits::PointTransform;
use crate::vector::{VectorExt, perp_ccw};
use core::ops::Mul;
use nalgebra::Vector2;

/// A rotation in the plane, stored as the image of the X axis.
///
/// The Y axis is never stored; it is always the counter-clockwise
/// perpendicular of `x`, so the basis is orthonormal by construction.
/// A zero `x` marks an undefined rotation (see [`is_valid`](Self::is_valid)):
/// every operation still runs on it but yields zero-influenced results.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rotation2d {
    x: Vector2<Real>,
}

impl Default for Rotation2d {
    fn default() -> Self {
        Self::identity()
    }
}

impl_approx_eq!(Rotation2d { x });

impl Rotation2d {
    #[inline]
    pub fn identity() -> Self {
        Self { x: Vector2::x() }
    }

    /// Rotation by `angle` radians, counter-clockwise.
    #[inline]
    pub fn from_angle(angle: Real) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: Vector2::new(cos, sin),
        }
    }

    /// Rotation taking the X axis onto `direction`.
    ///
    /// A zero-length `direction` yields an invalid rotation; use
    /// [`try_from_direction`](Self::try_from_direction) to get an error instead.
    pub fn from_direction(direction: Vector2<Real>) -> Self {
        Self::try_from_direction(direction).unwrap_or_else(|_| {
            log::debug!("Rotation2d::from_direction: zero-length direction");
            Self { x: Vector2::zeros() }
        })
    }

    pub fn try_from_direction(direction: Vector2<Real>) -> Result<Self, TransformError> {
        direction
            .try_unitized()
            .map(|x| Self { x })
            .ok_or(TransformError::ZeroLength { what: "direction" })
    }

    /// The rotation that carries `from`'s frame onto `to`'s frame.
    ///
    /// ```
    /// # use csgrs_transform::rotation::Rotation2d;
    /// # use nalgebra::Vector2;
    /// let a = Rotation2d::from_angle(0.3);
    /// let b = Rotation2d::from_angle(1.1);
    /// let v = Vector2::new(2.0, -1.0);
    /// let r = Rotation2d::from_to(&a, &b);
    /// approx::assert_relative_eq!(r.apply(a.apply(v)), b.apply(v), epsilon = 1e-12);
    /// ```
    pub fn from_to(from: &Self, to: &Self) -> Self {
        to.compose(&from.inverse())
    }

    /// The rotated X axis.
    #[inline]
    pub const fn x(&self) -> Vector2<Real> {
        self.x
    }

    /// The rotated Y axis.
    #[inline]
    pub fn y(&self) -> Vector2<Real> {
        perp_ccw(&self.x)
    }

    /// Angle in radians within `(-π, π]`.
    #[inline]
    pub fn angle(&self) -> Real {
        self.x.y.atan2(self.x.x)
    }

    pub fn set_angle(&mut self, angle: Real) {
        *self = Self::from_angle(angle);
    }

    /// Points the X axis along `direction`. Leaves the rotation unchanged
    /// and returns an error if `direction` has zero length.
    pub fn set_direction(&mut self, direction: Vector2<Real>) -> Result<(), TransformError> {
        *self = Self::try_from_direction(direction).inspect_err(|_| {
            log::debug!("Rotation2d::set_direction: rejected zero-length direction");
        })?;
        Ok(())
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.x.is_unit(tolerance())
    }

    /// Negates the angle in place.
    #[inline]
    pub fn invert(&mut self) {
        self.x.y = -self.x.y;
    }

    #[inline]
    #[must_use]
    pub fn inverse(&self) -> Self {
        let mut r = *self;
        r.invert();
        r
    }

    /// Rotates `v`.
    #[inline]
    pub fn apply(&self, v: Vector2<Real>) -> Vector2<Real> {
        self.x * v.x + self.y() * v.y
    }

    /// Rotates `v` by the inverse rotation (projection onto the basis).
    #[inline]
    pub fn apply_inverse(&self, v: Vector2<Real>) -> Vector2<Real> {
        Vector2::new(v.dot(&self.x), v.dot(&self.y()))
    }

    /// Applies this rotation to `other`, so the result rotates by `other`
    /// first and by `self` second.
    #[inline]
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            x: self.apply(other.x),
        }
    }

    /// Applies the inverse of this rotation to `other`.
    #[inline]
    pub fn compose_inverse(&self, other: &Self) -> Self {
        Self {
            x: self.apply_inverse(other.x),
        }
    }

    #[inline]
    pub fn to_matrix(&self) -> Matrix2d {
        Matrix2d::from_rotation(self)
    }
}

impl Mul for Rotation2d {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.compose(&rhs)
    }
}

impl Mul<Vector2<Real>> for Rotation2d {
    type Output = Vector2<Real>;

    fn mul(self, rhs: Vector2<Real>) -> Vector2<Real> {
        self.apply(rhs)
    }
}

impl PointTransform<Vector2<Real>> for Rotation2d {
    fn transform_point(&self, point: Vector2<Real>) -> Vector2<Real> {
        self.apply(point)
    }
}
