use crate::errors::TransformError;
use crate::float_types::Real;
use crate::rotation::Rotation2d;
use crate::traits::PointTransform;
use core::ops::Mul;
use nalgebra::{Matrix3, Point2, Vector2};

/// A rigid transform in the plane: rotate, then translate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Orient2d {
    pub rotation: Rotation2d,
    pub translation: Vector2<Real>,
}

impl_approx_eq!(Orient2d {
    rotation,
    translation
});

impl Orient2d {
    #[inline]
    pub const fn new(rotation: Rotation2d, translation: Vector2<Real>) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    #[inline]
    pub fn identity() -> Self {
        Self::new(Rotation2d::identity(), Vector2::zeros())
    }

    #[inline]
    pub fn from_translation(translation: Vector2<Real>) -> Self {
        Self::new(Rotation2d::identity(), translation)
    }

    #[inline]
    pub fn from_rotation(rotation: Rotation2d) -> Self {
        Self::new(rotation, Vector2::zeros())
    }

    /// Frame with its origin at `origin` and its X axis pointing at `x_point`.
    pub fn from_points(origin: Point2<Real>, x_point: Point2<Real>) -> Result<Self, TransformError> {
        let rotation =
            Rotation2d::try_from_direction(x_point - origin).map_err(|_| TransformError::Collinear)?;
        Ok(Self::new(rotation, origin.coords))
    }

    /// Rotation by `rotation` that keeps `point` fixed.
    pub fn rotation_about_point(rotation: Rotation2d, point: Point2<Real>) -> Self {
        Self::new(rotation, point.coords - rotation.apply(point.coords))
    }

    /// A rigid orientation cannot represent a mirror image.
    pub fn reflection(_origin: Point2<Real>, _direction: Vector2<Real>) -> Result<Self, TransformError> {
        log::warn!("Orient2d::reflection called");
        Err(TransformError::Unsupported("Orient2d::reflection"))
    }

    /// The orientation that carries geometry in `from`'s frame onto `to`'s frame.
    pub fn from_to(from: &Self, to: &Self) -> Self {
        to.compose(&from.inverse())
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.rotation.is_valid()
    }

    #[inline]
    pub fn apply(&self, point: Point2<Real>) -> Point2<Real> {
        Point2::from(self.rotation.apply(point.coords) + self.translation)
    }

    /// Rotates `v` without translating it.
    #[inline]
    pub fn apply_vector(&self, v: Vector2<Real>) -> Vector2<Real> {
        self.rotation.apply(v)
    }

    #[inline]
    pub fn apply_inverse(&self, point: Point2<Real>) -> Point2<Real> {
        Point2::from(self.rotation.apply_inverse(point.coords - self.translation))
    }

    #[inline]
    pub fn apply_inverse_vector(&self, v: Vector2<Real>) -> Vector2<Real> {
        self.rotation.apply_inverse(v)
    }

    pub fn invert(&mut self) {
        self.rotation.invert();
        self.translation = self.rotation.apply(-self.translation);
    }

    #[must_use]
    pub fn inverse(&self) -> Self {
        let mut o = *self;
        o.invert();
        o
    }

    /// `self` applied after `other`.
    pub fn compose(&self, other: &Self) -> Self {
        Self::new(
            self.rotation.compose(&other.rotation),
            self.apply(Point2::from(other.translation)).coords,
        )
    }

    /// The inverse of `self` applied after `other`.
    pub fn compose_inverse(&self, other: &Self) -> Self {
        Self::new(
            self.rotation.compose_inverse(&other.rotation),
            self.apply_inverse(Point2::from(other.translation)).coords,
        )
    }

    /// 3×3 homogeneous matrix acting on column vectors.
    pub fn to_homogeneous(&self) -> Matrix3<Real> {
        let x = self.rotation.x();
        let y = self.rotation.y();
        let t = self.translation;
        Matrix3::new(x.x, y.x, t.x, x.y, y.y, t.y, 0.0, 0.0, 1.0)
    }
}

impl Mul for Orient2d {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.compose(&rhs)
    }
}

impl Mul<Point2<Real>> for Orient2d {
    type Output = Point2<Real>;

    fn mul(self, rhs: Point2<Real>) -> Point2<Real> {
        self.apply(rhs)
    }
}

impl PointTransform<Point2<Real>> for Orient2d {
    fn transform_point(&self, point: Point2<Real>) -> Point2<Real> {
        self.apply(point)
    }
}
