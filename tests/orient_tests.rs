mod support;

use approx::assert_relative_eq;
use csgrs_transform::{
    errors::TransformError,
    float_types::FRAC_PI_2,
    orient::{Orient2d, Orient3d},
    rotation::{AxisAngle3d, Rotation2d, Rotation3d},
    traits::PointTransform,
};
use nalgebra::{Point2, Point3, Vector2, Vector3};

#[test]
fn orient2d_apply_rotates_then_translates() {
    let o = Orient2d::new(Rotation2d::from_angle(FRAC_PI_2), Vector2::new(1.0, 0.0));
    assert_relative_eq!(o.apply(Point2::new(1.0, 0.0)), Point2::new(1.0, 1.0), epsilon = 1e-12);
    // vectors ignore the translation
    assert_relative_eq!(o.apply_vector(Vector2::x()), Vector2::y(), epsilon = 1e-12);
    assert_relative_eq!(o.apply_inverse_vector(Vector2::y()), Vector2::x(), epsilon = 1e-12);
}

#[test]
fn orient2d_from_points() {
    let o = Orient2d::from_points(Point2::new(2.0, 2.0), Point2::new(2.0, 5.0)).unwrap();
    assert_relative_eq!(o.rotation.x(), Vector2::y(), epsilon = 1e-12);
    assert_relative_eq!(o.apply(Point2::new(1.0, 0.0)), Point2::new(2.0, 3.0), epsilon = 1e-12);
}

#[test]
fn orient2d_invalid_rotation_is_invalid() {
    let o = Orient2d::from_rotation(Rotation2d::from_direction(Vector2::zeros()));
    assert!(!o.is_valid());
    assert!(Orient2d::identity().is_valid());
}

#[test]
fn orient2d_compose_is_outer_first() {
    let a = Orient2d::from_translation(Vector2::new(5.0, 0.0));
    let b = Orient2d::from_rotation(Rotation2d::from_angle(FRAC_PI_2));
    let p = Point2::new(1.0, 0.0);
    // b rotates, then a translates
    assert_relative_eq!((a * b).apply(p), Point2::new(5.0, 1.0), epsilon = 1e-12);
    // a translates, then b rotates
    assert_relative_eq!((b * a).apply(p), Point2::new(0.0, 6.0), epsilon = 1e-12);
}

#[test]
fn orient2d_reflection_unsupported() {
    assert_eq!(
        Orient2d::reflection(Point2::origin(), Vector2::x()),
        Err(TransformError::Unsupported("Orient2d::reflection"))
    );
}

#[test]
fn orient3d_invert_in_place() {
    let mut o = Orient3d::new(
        AxisAngle3d::new(Vector3::new(0.0, 1.0, 1.0), 1.3).into(),
        Vector3::new(4.0, -2.0, 1.0),
    );
    let original = o;
    let p = Point3::new(1.0, 2.0, 3.0);
    let q = o.apply(p);
    o.invert();
    assert_relative_eq!(o.apply(q), p, epsilon = 1e-12);
    o.invert();
    assert_relative_eq!(o, original, epsilon = 1e-12);
}

#[test]
fn orient3d_rotation_about_point() {
    let pivot = Point3::new(1.0, 1.0, 5.0);
    let rotation: Rotation3d = AxisAngle3d::new(Vector3::z(), FRAC_PI_2).into();
    let o = Orient3d::rotation_about_point(rotation, pivot);
    assert_relative_eq!(o.apply(pivot), pivot, epsilon = 1e-12);
    assert_relative_eq!(o.apply(Point3::new(2.0, 1.0, 5.0)), Point3::new(1.0, 2.0, 5.0), epsilon = 1e-12);
}

#[test]
fn orient3d_look_at_camera_space() {
    support::init_logger();
    let view = Orient3d::look_at(Point3::new(0.0, 0.0, 5.0), Point3::origin(), Vector3::y()).unwrap();
    assert!(view.is_valid());
    assert_relative_eq!(view.apply(Point3::new(0.0, 0.0, 5.0)), Point3::origin(), epsilon = 1e-12);
    assert_relative_eq!(view.apply(Point3::origin()), Point3::new(0.0, 0.0, 5.0), epsilon = 1e-12);
    // world up stays in the camera's YZ-plane
    let up = view.apply_vector(Vector3::y());
    assert!(support::approx_eq(up.x, 0.0, 1e-12));
}

#[test]
fn orient3d_from_3_points_collinear() {
    let result = Orient3d::from_3_points(
        Point3::origin(),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(2.0, 0.0, 0.0),
    );
    assert_eq!(result, Err(TransformError::Collinear));
}

#[test]
fn orient3d_batch_matches_single() {
    let o = Orient3d::new(
        AxisAngle3d::new(Vector3::new(1.0, 0.0, 1.0), -0.7).into(),
        Vector3::new(0.0, 3.0, 0.0),
    );
    let pts = [Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, -1.0, 2.0)];
    let out = o.transform_points(&pts);
    assert_eq!(out, vec![o * pts[0], o * pts[1]]);
}
