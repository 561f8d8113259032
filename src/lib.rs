//! Rotations, rigid orientations and similarity transforms in 2D and 3D,
//! plus the planes and domains they are used with.
//!
//! Everything here is a small `Copy` value: build one, then apply it to
//! points, invert it, or compose it with another. Vectors and points are
//! `nalgebra` types.
//!
//! - [`rotation`]: [`Rotation2d`], [`Rotation3d`], [`AxisAngle3d`]
//! - [`orient`]: rigid transforms [`Orient2d`], [`Orient3d`]
//! - [`transform`]: scale + rotate + translate, [`Transform2d`], [`Transform3d`]
//! - [`plane`]: [`Plane3d`] and projection onto it
//! - [`matrix2d`]: dense [`Matrix2d`]
//! - [`domain`]: [`Interval`] and [`Domain2d`] for remapping
//!
//! Degenerate input (zero-length axes, singular matrices, zero scale,
//! projection parallel to a plane) is reported as a
//! [`TransformError`](errors::TransformError) rather than producing `NaN`.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **serde**: `Serialize`/`Deserialize` for every value type

#![forbid(unsafe_code)]
#![warn(unused, clippy::missing_const_for_fn, clippy::all)]

#[macro_use]
mod macros;

pub mod domain;
pub mod errors;
pub mod float_types;
pub mod matrix2d;
pub mod orient;
pub mod plane;
pub mod rotation;
pub mod traits;
pub mod transform;
pub mod vector;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use domain::{Domain2d, Interval};
pub use errors::TransformError;
pub use matrix2d::Matrix2d;
pub use orient::{Orient2d, Orient3d};
pub use plane::{Plane3d, PlaneSide};
pub use rotation::{AxisAngle3d, Rotation2d, Rotation3d};
pub use traits::PointTransform;
pub use transform::{Transform2d, Transform3d};
