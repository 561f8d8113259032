//! Test support library
//! Provides various helper functions & strategies for tests.

use csgrs_transform::{
    float_types::{PI, Real},
    orient::{Orient2d, Orient3d},
    rotation::{AxisAngle3d, Rotation2d, Rotation3d},
};
use nalgebra::{Point2, Point3, Vector2, Vector3};
use proptest::prelude::*;

/// Installs a logger once so `RUST_LOG=debug cargo test` shows rejected inputs.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

pub fn coord() -> impl Strategy<Value = Real> {
    -100.0 as Real..100.0 as Real
}

pub fn angle() -> impl Strategy<Value = Real> {
    -PI..PI
}

pub fn vector2() -> impl Strategy<Value = Vector2<Real>> {
    (coord(), coord()).prop_map(|(x, y)| Vector2::new(x, y))
}

pub fn vector3() -> impl Strategy<Value = Vector3<Real>> {
    (coord(), coord(), coord()).prop_map(|(x, y, z)| Vector3::new(x, y, z))
}

pub fn point2() -> impl Strategy<Value = Point2<Real>> {
    vector2().prop_map(Point2::from)
}

pub fn point3() -> impl Strategy<Value = Point3<Real>> {
    vector3().prop_map(Point3::from)
}

pub fn rotation2d() -> impl Strategy<Value = Rotation2d> {
    angle().prop_map(Rotation2d::from_angle)
}

/// Random spatial rotation; axes too short to unitize reliably are skipped.
pub fn rotation3d() -> impl Strategy<Value = Rotation3d> {
    (vector3(), angle())
        .prop_filter("axis too short", |(axis, _)| axis.norm() > 1e-3)
        .prop_map(|(axis, angle)| AxisAngle3d::new(axis, angle).into())
}

pub fn orient2d() -> impl Strategy<Value = Orient2d> {
    (rotation2d(), vector2()).prop_map(|(r, t)| Orient2d::new(r, t))
}

pub fn orient3d() -> impl Strategy<Value = Orient3d> {
    (rotation3d(), vector3()).prop_map(|(r, t)| Orient3d::new(r, t))
}

/// Scale factors bounded away from zero, either sign.
pub fn scale_factor() -> impl Strategy<Value = Real> {
    prop_oneof![0.1 as Real..10.0 as Real, -10.0 as Real..-0.1 as Real]
}
