//! Errors raised by degenerate geometric input

use crate::float_types::Real;

/// All the ways a transform operation can refuse its input.
///
/// Operations that would otherwise divide by a degenerate quantity (a zero
/// determinant, a zero scale component, a direction parallel to a plane)
/// report it here instead of handing back `NaN`/`inf` values.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum TransformError {
    /// (ZeroLength) A direction, axis or normal has zero length
    #[error("(ZeroLength) The {what} has zero length")]
    ZeroLength { what: &'static str },
    /// (Collinear) The points do not span a line, plane or frame
    #[error("(Collinear) The points are collinear or coincident")]
    Collinear,
    /// (SingularMatrix) The matrix cannot be inverted
    #[error("(SingularMatrix) The matrix is singular (determinant {determinant})")]
    SingularMatrix { determinant: Real },
    /// (ZeroScale) A scale component is zero, so the transform cannot be undone
    #[error("(ZeroScale) Scale component {axis} is zero")]
    ZeroScale { axis: usize },
    /// (ParallelDirection) A projection direction runs parallel to the target plane
    #[error("(ParallelDirection) The projection direction is parallel to the plane")]
    ParallelDirection,
    /// (NonUniformScale) Composition with non-uniform scale cannot be represented exactly
    #[error("(NonUniformScale) Composition with non-uniform scale under rotation is not exact")]
    NonUniformScale,
    /// (NotOrthonormal) The matrix is not a proper rotation
    #[error("(NotOrthonormal) The matrix is not a proper rotation")]
    NotOrthonormal,
    /// (Unsupported) The operation is declared but not yet supported
    #[error("(Unsupported) {0} is not supported")]
    Unsupported(&'static str),
}

// Rotation2d::try_from_direction "direction has zero length"
// Plane3d::from_points "points are collinear"
// Orient3d::reflection "a rigid orientation cannot mirror"
