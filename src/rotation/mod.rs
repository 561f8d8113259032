//! Rotation representations.
//!
//! - [`Rotation2d`]: planar rotation stored as a single unit basis vector
//! - [`Rotation3d`]: spatial rotation stored as two orthonormal basis vectors
//! - [`AxisAngle3d`]: spatial rotation as a unit axis and an angle

mod axis_angle;
mod rotation2d;
mod rotation3d;

pub use axis_angle::AxisAngle3d;
pub use rotation2d::Rotation2d;
pub use rotation3d::Rotation3d;
