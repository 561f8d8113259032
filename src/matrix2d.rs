//! Dense 2×2 matrix, used as the explicit form of a 2D rotation.

use crate::errors::TransformError;
use crate::float_types::Real;
use crate::rotation::Rotation2d;
use crate::traits::PointTransform;
use crate::vector::VectorExt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use nalgebra::{Matrix2, Vector2};

/// A 2×2 matrix stored row by row.
///
/// Always fully defined; only [`inverse`](Matrix2d::inverse) can fail.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix2d {
    pub m00: Real,
    pub m01: Real,
    pub m10: Real,
    pub m11: Real,
}

impl Default for Matrix2d {
    fn default() -> Self {
        Self::identity()
    }
}

impl_approx_eq!(Matrix2d { m00, m01, m10, m11 });

impl Matrix2d {
    #[inline]
    pub const fn new(m00: Real, m01: Real, m10: Real, m11: Real) -> Self {
        Self { m00, m01, m10, m11 }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0)
    }

    /// Diagonal matrix, i.e. a non-uniform scale.
    #[inline]
    pub const fn from_diagonal(d0: Real, d1: Real) -> Self {
        Self::new(d0, 0.0, 0.0, d1)
    }

    #[inline]
    pub fn from_rows(row0: Vector2<Real>, row1: Vector2<Real>) -> Self {
        Self::new(row0.x, row0.y, row1.x, row1.y)
    }

    #[inline]
    pub fn from_cols(col0: Vector2<Real>, col1: Vector2<Real>) -> Self {
        Self::new(col0.x, col1.x, col0.y, col1.y)
    }

    /// Dense form of a rotation: the columns are its X and Y axes.
    #[inline]
    pub fn from_rotation(rotation: &Rotation2d) -> Self {
        Self::from_cols(rotation.x(), rotation.y())
    }

    #[inline]
    pub fn row(&self, index: usize) -> Vector2<Real> {
        match index {
            0 => Vector2::new(self.m00, self.m01),
            1 => Vector2::new(self.m10, self.m11),
            _ => panic!("Row {index} out of range [0,1]"),
        }
    }

    #[inline]
    pub fn col(&self, index: usize) -> Vector2<Real> {
        match index {
            0 => Vector2::new(self.m00, self.m10),
            1 => Vector2::new(self.m01, self.m11),
            _ => panic!("Column {index} out of range [0,1]"),
        }
    }

    #[inline]
    pub fn determinant(&self) -> Real {
        self.m00 * self.m11 - self.m01 * self.m10
    }

    #[inline]
    pub fn trace(&self) -> Real {
        self.m00 + self.m11
    }

    #[inline]
    pub const fn transpose(&self) -> Self {
        Self::new(self.m00, self.m10, self.m01, self.m11)
    }

    /// Returns the inverse, or [`TransformError::SingularMatrix`] if the
    /// determinant is zero (or not finite).
    pub fn inverse(&self) -> Result<Self, TransformError> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return Err(TransformError::SingularMatrix { determinant: det });
        }
        let inv_det = 1.0 / det;
        Ok(Self::new(
            self.m11 * inv_det,
            -self.m01 * inv_det,
            -self.m10 * inv_det,
            self.m00 * inv_det,
        ))
    }

    /// Inverts in place. On failure the matrix is left untouched.
    pub fn invert(&mut self) -> Result<(), TransformError> {
        *self = self.inverse()?;
        Ok(())
    }

    #[inline]
    pub fn apply(&self, v: Vector2<Real>) -> Vector2<Real> {
        Vector2::new(
            self.m00 * v.x + self.m01 * v.y,
            self.m10 * v.x + self.m11 * v.y,
        )
    }

    /// Extracts the rotation encoded in the matrix.
    ///
    /// The first column is unitized and taken as the X axis. Fails with
    /// [`TransformError::NotOrthonormal`] unless the matrix is a proper
    /// rotation within tolerance.
    pub fn to_rotation(&self) -> Result<Rotation2d, TransformError> {
        let tol = crate::float_types::tolerance();
        let x = self.col(0);
        let y = self.col(1);
        if !x.is_unit(tol) || !y.is_unit(tol) || x.dot(&y).abs() > tol {
            return Err(TransformError::NotOrthonormal);
        }
        if (self.determinant() - 1.0).abs() > tol {
            return Err(TransformError::NotOrthonormal);
        }
        Rotation2d::try_from_direction(x)
    }
}

impl From<Matrix2<Real>> for Matrix2d {
    fn from(m: Matrix2<Real>) -> Self {
        Self::new(m[(0, 0)], m[(0, 1)], m[(1, 0)], m[(1, 1)])
    }
}

impl From<Matrix2d> for Matrix2<Real> {
    fn from(m: Matrix2d) -> Self {
        Matrix2::new(m.m00, m.m01, m.m10, m.m11)
    }
}

impl From<Rotation2d> for Matrix2d {
    fn from(rotation: Rotation2d) -> Self {
        Self::from_rotation(&rotation)
    }
}

impl PointTransform<Vector2<Real>> for Matrix2d {
    fn transform_point(&self, point: Vector2<Real>) -> Vector2<Real> {
        self.apply(point)
    }
}

impl Add for Matrix2d {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.m00 + rhs.m00,
            self.m01 + rhs.m01,
            self.m10 + rhs.m10,
            self.m11 + rhs.m11,
        )
    }
}

impl AddAssign for Matrix2d {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Matrix2d {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.m00 - rhs.m00,
            self.m01 - rhs.m01,
            self.m10 - rhs.m10,
            self.m11 - rhs.m11,
        )
    }
}

impl SubAssign for Matrix2d {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Matrix2d {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.m00, -self.m01, -self.m10, -self.m11)
    }
}

impl Mul for Matrix2d {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.m00 * rhs.m00 + self.m01 * rhs.m10,
            self.m00 * rhs.m01 + self.m01 * rhs.m11,
            self.m10 * rhs.m00 + self.m11 * rhs.m10,
            self.m10 * rhs.m01 + self.m11 * rhs.m11,
        )
    }
}

impl MulAssign for Matrix2d {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<Real> for Matrix2d {
    type Output = Self;

    fn mul(self, rhs: Real) -> Self {
        Self::new(self.m00 * rhs, self.m01 * rhs, self.m10 * rhs, self.m11 * rhs)
    }
}

impl MulAssign<Real> for Matrix2d {
    fn mul_assign(&mut self, rhs: Real) {
        *self = *self * rhs;
    }
}

impl Mul<Vector2<Real>> for Matrix2d {
    type Output = Vector2<Real>;

    fn mul(self, rhs: Vector2<Real>) -> Vector2<Real> {
        self.apply(rhs)
    }
}
