use crate::errors::TransformError;
use crate::float_types::{Real, tolerance};
use crate::orient::Orient3d;
use crate::rotation::Rotation3d;
use crate::traits::PointTransform;
use approx::AbsDiffEq;
use nalgebra::{Matrix3, Matrix4, Point3, Vector3};

/// Per-axis scale, then rotation, then translation, in space.
///
/// Carries the same non-uniform scale caveat as
/// [`Transform2d`](super::Transform2d): `compose` and `inverse` are exact
/// only for uniform scale.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform3d {
    pub scale: Vector3<Real>,
    pub rotation: Rotation3d,
    pub translation: Vector3<Real>,
}

impl Default for Transform3d {
    fn default() -> Self {
        Self::identity()
    }
}

impl_approx_eq!(Transform3d {
    scale,
    rotation,
    translation
});

impl Transform3d {
    #[inline]
    pub const fn new(scale: Vector3<Real>, rotation: Rotation3d, translation: Vector3<Real>) -> Self {
        Self {
            scale,
            rotation,
            translation,
        }
    }

    #[inline]
    pub fn identity() -> Self {
        Self::from_orient(Orient3d::identity())
    }

    #[inline]
    pub fn from_orient(orient: Orient3d) -> Self {
        Self::new(Vector3::repeat(1.0), orient.rotation, orient.translation)
    }

    #[inline]
    pub fn from_scale(scale: Vector3<Real>) -> Self {
        Self::new(scale, Rotation3d::identity(), Vector3::zeros())
    }

    pub fn rotation_about_point(rotation: Rotation3d, point: Point3<Real>) -> Self {
        Self::from_orient(Orient3d::rotation_about_point(rotation, point))
    }

    /// Mirroring about an arbitrary plane needs the scale applied in the
    /// plane's frame, which this representation cannot hold.
    pub fn reflection(_origin: Point3<Real>, _normal: Vector3<Real>) -> Result<Self, TransformError> {
        log::warn!("Transform3d::reflection called");
        Err(TransformError::Unsupported("Transform3d::reflection"))
    }

    #[inline]
    pub fn orient(&self) -> Orient3d {
        Orient3d::new(self.rotation, self.translation)
    }

    pub fn is_valid(&self) -> bool {
        self.rotation.is_valid() && self.scale.iter().all(|s| s.is_finite())
    }

    pub fn is_uniform_scale(&self) -> bool {
        let tol = tolerance();
        self.scale.x.abs_diff_eq(&self.scale.y, tol) && self.scale.x.abs_diff_eq(&self.scale.z, tol)
    }

    fn check_scale(&self) -> Result<(), TransformError> {
        match self.scale.iter().position(|&s| s == 0.0) {
            Some(axis) => Err(TransformError::ZeroScale { axis }),
            None => Ok(()),
        }
    }

    #[inline]
    pub fn apply(&self, point: Point3<Real>) -> Point3<Real> {
        Point3::from(self.apply_vector(point.coords) + self.translation)
    }

    #[inline]
    pub fn apply_vector(&self, v: Vector3<Real>) -> Vector3<Real> {
        self.rotation.apply(v.component_mul(&self.scale))
    }

    pub fn apply_inverse(&self, point: Point3<Real>) -> Result<Point3<Real>, TransformError> {
        self.apply_inverse_vector(point.coords - self.translation)
            .map(Point3::from)
    }

    pub fn apply_inverse_vector(&self, v: Vector3<Real>) -> Result<Vector3<Real>, TransformError> {
        self.check_scale()?;
        Ok(self.rotation.apply_inverse(v).component_div(&self.scale))
    }

    pub fn invert(&mut self) -> Result<(), TransformError> {
        self.check_scale()?;
        self.scale = self.scale.map(|s| 1.0 / s);
        self.rotation.invert();
        self.translation = self.rotation.apply(-self.translation).component_mul(&self.scale);
        Ok(())
    }

    pub fn inverse(&self) -> Result<Self, TransformError> {
        let mut t = *self;
        t.invert()?;
        Ok(t)
    }

    /// `self` applied after `other`. Approximate for non-uniform scale.
    pub fn compose(&self, other: &Self) -> Self {
        Self::new(
            self.scale.component_mul(&other.scale),
            self.rotation.compose(&other.rotation),
            self.apply(Point3::from(other.translation)).coords,
        )
    }

    pub fn try_compose(&self, other: &Self) -> Result<Self, TransformError> {
        let tol = tolerance();
        if !self.is_uniform_scale() && !other.rotation.abs_diff_eq(&Rotation3d::identity(), tol) {
            log::debug!("Transform3d::try_compose: non-uniform scale {:?} under rotation", self.scale);
            return Err(TransformError::NonUniformScale);
        }
        Ok(self.compose(other))
    }

    pub fn compose_inverse(&self, other: &Self) -> Result<Self, TransformError> {
        Ok(Self::new(
            other.scale.component_div(&self.scale),
            self.rotation.compose_inverse(&other.rotation),
            self.apply_inverse(Point3::from(other.translation))?.coords,
        ))
    }

    pub fn to_homogeneous(&self) -> Matrix4<Real> {
        let linear = self.rotation.to_matrix() * Matrix3::from_diagonal(&self.scale);
        let mut m = linear.to_homogeneous();
        m.fixed_view_mut::<3, 1>(0, 3).copy_from(&self.translation);
        m
    }
}

impl From<Orient3d> for Transform3d {
    fn from(orient: Orient3d) -> Self {
        Self::from_orient(orient)
    }
}

impl PointTransform<Point3<Real>> for Transform3d {
    fn transform_point(&self, point: Point3<Real>) -> Point3<Real> {
        self.apply(point)
    }
}
