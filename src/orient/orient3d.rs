use crate::errors::TransformError;
use crate::float_types::Real;
use crate::rotation::Rotation3d;
use crate::traits::PointTransform;
use core::ops::Mul;
use nalgebra::{Matrix4, Point3, Vector3};

/// A rigid transform in space: rotate, then translate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Orient3d {
    pub rotation: Rotation3d,
    pub translation: Vector3<Real>,
}

impl_approx_eq!(Orient3d {
    rotation,
    translation
});

impl Orient3d {
    #[inline]
    pub const fn new(rotation: Rotation3d, translation: Vector3<Real>) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    #[inline]
    pub fn identity() -> Self {
        Self::new(Rotation3d::identity(), Vector3::zeros())
    }

    #[inline]
    pub fn from_translation(translation: Vector3<Real>) -> Self {
        Self::new(Rotation3d::identity(), translation)
    }

    #[inline]
    pub fn from_rotation(rotation: Rotation3d) -> Self {
        Self::new(rotation, Vector3::zeros())
    }

    /// Frame at `origin` with its X axis toward `x_point` and its XY-plane
    /// through `xy_point`.
    pub fn from_3_points(
        origin: Point3<Real>,
        x_point: Point3<Real>,
        xy_point: Point3<Real>,
    ) -> Result<Self, TransformError> {
        let rotation = Rotation3d::try_from_vectors(x_point - origin, xy_point - origin)
            .map_err(|_| TransformError::Collinear)?;
        Ok(Self::new(rotation, origin.coords))
    }

    /// World-to-camera transform for a camera at `eye` looking at `target`.
    ///
    /// In camera space the view direction is +Z and `up` lies in the YZ-plane.
    /// Fails if `eye == target` or `up` is parallel to the view direction.
    ///
    /// ```
    /// # use csgrs_transform::orient::Orient3d;
    /// # use nalgebra::{Point3, Vector3};
    /// let view = Orient3d::look_at(Point3::new(0.0, 0.0, 5.0), Point3::origin(), Vector3::y()).unwrap();
    /// approx::assert_relative_eq!(view.apply(Point3::origin()), Point3::new(0.0, 0.0, 5.0), epsilon = 1e-12);
    /// ```
    pub fn look_at(
        eye: Point3<Real>,
        target: Point3<Real>,
        up: Vector3<Real>,
    ) -> Result<Self, TransformError> {
        let mut basis = Rotation3d::try_from_vectors(target - eye, up)?;
        basis.swap_zx();
        Ok(Self::new(basis, eye.coords).inverse())
    }

    /// Rotation by `rotation` that keeps `point` fixed.
    pub fn rotation_about_point(rotation: Rotation3d, point: Point3<Real>) -> Self {
        Self::new(rotation, point.coords - rotation.apply(point.coords))
    }

    /// A rigid orientation cannot represent a mirror image.
    pub fn reflection(_origin: Point3<Real>, _normal: Vector3<Real>) -> Result<Self, TransformError> {
        log::warn!("Orient3d::reflection called");
        Err(TransformError::Unsupported("Orient3d::reflection"))
    }

    pub fn from_to(from: &Self, to: &Self) -> Self {
        to.compose(&from.inverse())
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.rotation.is_valid()
    }

    #[inline]
    pub fn apply(&self, point: Point3<Real>) -> Point3<Real> {
        Point3::from(self.rotation.apply(point.coords) + self.translation)
    }

    #[inline]
    pub fn apply_vector(&self, v: Vector3<Real>) -> Vector3<Real> {
        self.rotation.apply(v)
    }

    #[inline]
    pub fn apply_inverse(&self, point: Point3<Real>) -> Point3<Real> {
        Point3::from(self.rotation.apply_inverse(point.coords - self.translation))
    }

    #[inline]
    pub fn apply_inverse_vector(&self, v: Vector3<Real>) -> Vector3<Real> {
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
            self.apply(Point3::from(other.translation)).coords,
        )
    }

    pub fn compose_inverse(&self, other: &Self) -> Self {
        Self::new(
            self.rotation.compose_inverse(&other.rotation),
            self.apply_inverse(Point3::from(other.translation)).coords,
        )
    }

    pub fn to_homogeneous(&self) -> Matrix4<Real> {
        let mut m = self.rotation.to_matrix().to_homogeneous();
        m.fixed_view_mut::<3, 1>(0, 3).copy_from(&self.translation);
        m
    }
}

impl Mul for Orient3d {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.compose(&rhs)
    }
}

impl Mul<Point3<Real>> for Orient3d {
    type Output = Point3<Real>;

    fn mul(self, rhs: Point3<Real>) -> Point3<Real> {
        self.apply(rhs)
    }
}

impl PointTransform<Point3<Real>> for Orient3d {
    fn transform_point(&self, point: Point3<Real>) -> Point3<Real> {
        self.apply(point)
    }
}
