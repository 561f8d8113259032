use crate::errors::TransformError;
use crate::float_types::{Real, tolerance};
use crate::traits::PointTransform;
use crate::vector::VectorExt;
use nalgebra::Vector3;

/// A rotation about a unit axis, with the cosine and sine of the angle cached.
///
/// Points are rotated with Rodrigues' formula. There is no composition in
/// this form; convert to [`Rotation3d`](super::Rotation3d) for that.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisAngle3d {
    axis: Vector3<Real>,
    angle: Real,
    cos_angle: Real,
    sin_angle: Real,
}

impl Default for AxisAngle3d {
    fn default() -> Self {
        Self::identity()
    }
}

// `angle` is left out so that angles a full turn apart compare equal
impl_approx_eq!(AxisAngle3d {
    axis,
    cos_angle,
    sin_angle
});

impl AxisAngle3d {
    /// Zero rotation about Z.
    pub fn identity() -> Self {
        Self {
            axis: Vector3::z(),
            angle: 0.0,
            cos_angle: 1.0,
            sin_angle: 0.0,
        }
    }

    /// Rotation by `angle` radians about `axis`, which need not be unit.
    ///
    /// A zero `axis` is stored as-is and the result is invalid.
    pub fn new(axis: Vector3<Real>, angle: Real) -> Self {
        let mut rotation = Self {
            axis: Vector3::zeros(),
            ..Self::identity()
        };
        if rotation.set_axis(axis).is_err() {
            log::debug!("AxisAngle3d::new: zero-length axis");
        }
        rotation.set_angle(angle);
        rotation
    }

    pub fn try_new(axis: Vector3<Real>, angle: Real) -> Result<Self, TransformError> {
        let axis = axis
            .try_unitized()
            .ok_or(TransformError::ZeroLength { what: "axis" })?;
        Ok(Self::new(axis, angle))
    }

    /// Exponential map: the direction of `v` is the axis, its length the
    /// angle in radians. A zero `v` gives the identity with a zero axis.
    pub fn from_vector(v: Vector3<Real>) -> Self {
        let angle = v.norm();
        if angle > 0.0 {
            Self::new(v / angle, angle)
        } else {
            Self {
                axis: Vector3::zeros(),
                ..Self::identity()
            }
        }
    }

    /// Logarithmic map, the inverse of [`from_vector`](Self::from_vector).
    pub fn to_vector(&self) -> Vector3<Real> {
        self.axis * self.angle
    }

    #[inline]
    pub const fn axis(&self) -> Vector3<Real> {
        self.axis
    }

    /// Sets the axis, unitizing it. A zero-length `axis` is rejected and the
    /// previous axis is kept.
    pub fn set_axis(&mut self, axis: Vector3<Real>) -> Result<(), TransformError> {
        self.axis = axis
            .try_unitized()
            .ok_or(TransformError::ZeroLength { what: "axis" })?;
        Ok(())
    }

    #[inline]
    pub const fn angle(&self) -> Real {
        self.angle
    }

    pub fn set_angle(&mut self, angle: Real) {
        self.angle = angle;
        (self.sin_angle, self.cos_angle) = angle.sin_cos();
    }

    #[inline]
    pub const fn cos_angle(&self) -> Real {
        self.cos_angle
    }

    #[inline]
    pub const fn sin_angle(&self) -> Real {
        self.sin_angle
    }

    pub fn is_valid(&self) -> bool {
        self.axis.is_unit(tolerance())
    }

    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            angle: -self.angle,
            sin_angle: -self.sin_angle,
            ..*self
        }
    }

    /// Rotates `v` about the axis (Rodrigues).
    pub fn rotate(&self, v: Vector3<Real>) -> Vector3<Real> {
        v * self.cos_angle
            + self.axis.cross(&v) * self.sin_angle
            + self.axis * (self.axis.dot(&v) * (1.0 - self.cos_angle))
    }

    /// Rotates `v` by the negated angle.
    pub fn rotate_inverse(&self, v: Vector3<Real>) -> Vector3<Real> {
        v * self.cos_angle - self.axis.cross(&v) * self.sin_angle
            + self.axis * (self.axis.dot(&v) * (1.0 - self.cos_angle))
    }
}

impl PointTransform<Vector3<Real>> for AxisAngle3d {
    fn transform_point(&self, point: Vector3<Real>) -> Vector3<Real> {
        self.rotate(point)
    }
}
