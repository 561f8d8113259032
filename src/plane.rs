//! Oriented planes in 3D and the projections onto them.

use crate::errors::TransformError;
use crate::float_types::{Real, tolerance};
use crate::orient::Orient3d;
use crate::rotation::Rotation3d;
use crate::vector::VectorExt;
use nalgebra::{Point3, Vector3};

/// Which side of a plane a point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaneSide {
    /// Strictly on the side the normal points to.
    Front,
    /// Strictly behind the plane.
    Back,
    /// Within tolerance of the plane.
    On,
}

/// An oriented plane: `dot(p, normal) == distance` for every point `p` on it.
///
/// The default plane has a zero normal and is not [valid](Plane3d::is_valid).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane3d {
    normal: Vector3<Real>,
    distance: Real,
}

impl_approx_eq!(Plane3d { normal, distance });

impl Plane3d {
    /// Plane through `origin` with the given normal, which need not be unit.
    ///
    /// ```
    /// # use csgrs_transform::plane::Plane3d;
    /// # use nalgebra::{Point3, Vector3};
    /// let plane = Plane3d::new(Point3::origin(), Vector3::z()).unwrap();
    /// assert_eq!(plane.distance_to(Point3::new(0.0, 0.0, 5.0)), 5.0);
    /// assert_eq!(plane.closest_point(Point3::new(0.0, 0.0, 5.0)), Point3::origin());
    /// ```
    pub fn new(origin: Point3<Real>, normal: Vector3<Real>) -> Result<Self, TransformError> {
        let normal = normal
            .try_unitized()
            .ok_or(TransformError::ZeroLength { what: "normal" })?;
        Ok(Self {
            normal,
            distance: origin.coords.dot(&normal),
        })
    }

    /// Plane through three points, with the normal following the winding
    /// `p0 → p1 → p2` (right-hand rule).
    pub fn from_points(
        p0: Point3<Real>,
        p1: Point3<Real>,
        p2: Point3<Real>,
    ) -> Result<Self, TransformError> {
        let normal = (p1 - p0)
            .cross(&(p2 - p1))
            .try_unitized()
            .ok_or(TransformError::Collinear)?;
        Ok(Self {
            normal,
            distance: p0.coords.dot(&normal),
        })
    }

    /// Re-fits the plane through three points. Collinear or repeated points
    /// leave the plane as it was.
    pub fn set_points(
        &mut self,
        p0: Point3<Real>,
        p1: Point3<Real>,
        p2: Point3<Real>,
    ) -> Result<(), TransformError> {
        *self = Self::from_points(p0, p1, p2).inspect_err(|_| {
            log::debug!("Plane3d::set_points: degenerate points {p0}, {p1}, {p2}");
        })?;
        Ok(())
    }

    #[inline]
    pub const fn normal(&self) -> Vector3<Real> {
        self.normal
    }

    /// Sets the normal, unitizing it. The distance is kept. A zero-length
    /// `normal` is rejected and the previous normal stays.
    pub fn set_normal(&mut self, normal: Vector3<Real>) -> Result<(), TransformError> {
        self.normal = normal.try_unitized().ok_or_else(|| {
            log::debug!("Plane3d::set_normal: rejected zero-length normal");
            TransformError::ZeroLength { what: "normal" }
        })?;
        Ok(())
    }

    /// Signed distance of the origin's projection along the normal.
    #[inline]
    pub const fn distance(&self) -> Real {
        self.distance
    }

    /// The point on the plane closest to the world origin.
    #[inline]
    pub fn origin(&self) -> Point3<Real> {
        Point3::from(self.normal * self.distance)
    }

    /// Moves the plane along its normal so it passes through `origin`.
    #[inline]
    pub fn set_origin(&mut self, origin: Point3<Real>) {
        self.distance = origin.coords.dot(&self.normal);
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.normal.is_unit(tolerance())
    }

    /// Reverses the orientation in place, keeping the same point set.
    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.distance = -self.distance;
    }

    #[must_use]
    pub fn flipped(&self) -> Self {
        let mut plane = *self;
        plane.flip();
        plane
    }

    /// Signed distance from the plane, positive on the normal side.
    #[inline]
    pub fn distance_to(&self, point: Point3<Real>) -> Real {
        point.coords.dot(&self.normal) - self.distance
    }

    pub fn side_of(&self, point: Point3<Real>) -> PlaneSide {
        let d = self.distance_to(point);
        let tol = tolerance();
        if d > tol {
            PlaneSide::Front
        } else if d < -tol {
            PlaneSide::Back
        } else {
            PlaneSide::On
        }
    }

    #[inline]
    pub fn closest_point(&self, point: Point3<Real>) -> Point3<Real> {
        point - self.normal * self.distance_to(point)
    }

    /// Slides `point` along `direction` until it meets the plane.
    ///
    /// Fails with [`TransformError::ParallelDirection`] when `direction` is
    /// parallel to the plane (including a zero `direction`).
    pub fn project_to(
        &self,
        point: Point3<Real>,
        direction: Vector3<Real>,
    ) -> Result<Point3<Real>, TransformError> {
        let denom = direction.dot(&self.normal);
        if denom.abs() <= Real::EPSILON * direction.norm() || !denom.is_finite() {
            return Err(TransformError::ParallelDirection);
        }
        let t = -self.distance_to(point) / denom;
        Ok(point + direction * t)
    }

    /// A frame on the plane: origin at [`origin`](Self::origin), local Z
    /// along the normal.
    pub fn to_orient(&self) -> Result<Orient3d, TransformError> {
        if !self.is_valid() {
            return Err(TransformError::ZeroLength { what: "normal" });
        }
        let n = self.normal;
        // any axis not too close to the normal
        let seed = if n.x.abs() < 0.9 { Vector3::x() } else { Vector3::y() };
        let x = seed - n * n.dot(&seed);
        let rotation = Rotation3d::try_from_vectors(x, n.cross(&x))?;
        Ok(Orient3d::new(rotation, self.origin().coords))
    }
}
