use crate::errors::TransformError;
use crate::float_types::{Real, tolerance};
use crate::orient::Orient2d;
use crate::rotation::Rotation2d;
use crate::traits::PointTransform;
use approx::AbsDiffEq;
use nalgebra::{Matrix3, Point2, Vector2};

/// Per-axis scale, then rotation, then translation, in the plane.
///
/// With non-uniform scale, [`compose`](Self::compose) and
/// [`inverse`](Self::inverse) are only approximations: scaling along the
/// local axes does not commute with rotation, so the exact result is not in
/// general representable as scale → rotate → translate. The approximation is
/// exact when the scale is uniform. [`apply_inverse`](Self::apply_inverse) is
/// always exact.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform2d {
    pub scale: Vector2<Real>,
    pub rotation: Rotation2d,
    pub translation: Vector2<Real>,
}

impl Default for Transform2d {
    fn default() -> Self {
        Self::identity()
    }
}

impl_approx_eq!(Transform2d {
    scale,
    rotation,
    translation
});

impl Transform2d {
    #[inline]
    pub const fn new(scale: Vector2<Real>, rotation: Rotation2d, translation: Vector2<Real>) -> Self {
        Self {
            scale,
            rotation,
            translation,
        }
    }

    #[inline]
    pub fn identity() -> Self {
        Self::from_orient(Orient2d::identity())
    }

    #[inline]
    pub fn from_orient(orient: Orient2d) -> Self {
        Self::new(Vector2::repeat(1.0), orient.rotation, orient.translation)
    }

    #[inline]
    pub fn from_scale(scale: Vector2<Real>) -> Self {
        Self::new(scale, Rotation2d::identity(), Vector2::zeros())
    }

    /// The rotation and translation parts, dropping the scale.
    #[inline]
    pub fn orient(&self) -> Orient2d {
        Orient2d::new(self.rotation, self.translation)
    }

    pub fn is_valid(&self) -> bool {
        self.rotation.is_valid() && self.scale.iter().all(|s| s.is_finite())
    }

    pub fn is_uniform_scale(&self) -> bool {
        self.scale.x.abs_diff_eq(&self.scale.y, tolerance())
    }

    /// Returns an error naming the first zero scale component, if any.
    fn check_scale(&self) -> Result<(), TransformError> {
        match self.scale.iter().position(|&s| s == 0.0) {
            Some(axis) => Err(TransformError::ZeroScale { axis }),
            None => Ok(()),
        }
    }

    #[inline]
    pub fn apply(&self, point: Point2<Real>) -> Point2<Real> {
        Point2::from(self.apply_vector(point.coords) + self.translation)
    }

    /// Scales and rotates `v` without translating it.
    #[inline]
    pub fn apply_vector(&self, v: Vector2<Real>) -> Vector2<Real> {
        self.rotation.apply(v.component_mul(&self.scale))
    }

    pub fn apply_inverse(&self, point: Point2<Real>) -> Result<Point2<Real>, TransformError> {
        self.apply_inverse_vector(point.coords - self.translation)
            .map(Point2::from)
    }

    pub fn apply_inverse_vector(&self, v: Vector2<Real>) -> Result<Vector2<Real>, TransformError> {
        self.check_scale()?;
        Ok(self.rotation.apply_inverse(v).component_div(&self.scale))
    }

    /// Inverts in place; on a zero scale component nothing is changed.
    pub fn invert(&mut self) -> Result<(), TransformError> {
        self.check_scale()?;
        self.scale = self.scale.map(|s| 1.0 / s);
        self.rotation.invert();
        // uses the reciprocal scale
        self.translation = self.rotation.apply(-self.translation).component_mul(&self.scale);
        Ok(())
    }

    pub fn inverse(&self) -> Result<Self, TransformError> {
        let mut t = *self;
        t.invert()?;
        Ok(t)
    }

    /// `self` applied after `other`, with scales multiplied together.
    ///
    /// Exact only if `self` has uniform scale or `other` has no rotation;
    /// see [`try_compose`](Self::try_compose).
    pub fn compose(&self, other: &Self) -> Self {
        Self::new(
            self.scale.component_mul(&other.scale),
            self.rotation.compose(&other.rotation),
            self.apply(Point2::from(other.translation)).coords,
        )
    }

    /// Like [`compose`](Self::compose), but refuses with
    /// [`TransformError::NonUniformScale`] when the result would be inexact.
    pub fn try_compose(&self, other: &Self) -> Result<Self, TransformError> {
        let tol = tolerance();
        if !self.is_uniform_scale() && !other.rotation.abs_diff_eq(&Rotation2d::identity(), tol) {
            log::debug!("Transform2d::try_compose: non-uniform scale {:?} under rotation", self.scale);
            return Err(TransformError::NonUniformScale);
        }
        Ok(self.compose(other))
    }

    /// The inverse of `self` applied after `other`, with scales divided.
    pub fn compose_inverse(&self, other: &Self) -> Result<Self, TransformError> {
        Ok(Self::new(
            other.scale.component_div(&self.scale),
            self.rotation.compose_inverse(&other.rotation),
            self.apply_inverse(Point2::from(other.translation))?.coords,
        ))
    }

    pub fn to_homogeneous(&self) -> Matrix3<Real> {
        let x = self.rotation.x() * self.scale.x;
        let y = self.rotation.y() * self.scale.y;
        let t = self.translation;
        Matrix3::new(x.x, y.x, t.x, x.y, y.y, t.y, 0.0, 0.0, 1.0)
    }
}

impl From<Orient2d> for Transform2d {
    fn from(orient: Orient2d) -> Self {
        Self::from_orient(orient)
    }
}

impl PointTransform<Point2<Real>> for Transform2d {
    fn transform_point(&self, point: Point2<Real>) -> Point2<Real> {
        self.apply(point)
    }
}
