mod support;

use approx::assert_relative_eq;
use csgrs_transform::{
    errors::TransformError,
    float_types::FRAC_PI_2,
    orient::{Orient2d, Orient3d},
    rotation::{AxisAngle3d, Rotation2d, Rotation3d},
    transform::{Transform2d, Transform3d},
};
use nalgebra::{Point2, Point3, Vector2, Vector3};

#[test]
fn transform2d_from_orient_matches_orient() {
    let o = Orient2d::new(Rotation2d::from_angle(1.0), Vector2::new(3.0, 4.0));
    let t = Transform2d::from(o);
    let p = Point2::new(-1.0, 0.5);
    assert_relative_eq!(t.apply(p), o.apply(p), epsilon = 1e-12);
    assert_relative_eq!(t.inverse().unwrap().apply(p), o.inverse().apply(p), epsilon = 1e-12);
    assert!(t.is_uniform_scale());
}

#[test]
fn transform2d_invert_uses_reciprocal_scale() {
    let mut t = Transform2d::new(
        Vector2::repeat(2.0),
        Rotation2d::from_angle(FRAC_PI_2),
        Vector2::new(2.0, 0.0),
    );
    t.invert().unwrap();
    assert_relative_eq!(t.scale, Vector2::repeat(0.5), epsilon = 1e-12);
    // R⁻¹(-t) * ½ = (0, 2) * ½
    assert_relative_eq!(t.translation, Vector2::new(0.0, 1.0), epsilon = 1e-12);
}

#[test]
fn transform2d_non_uniform_compose_is_approximate() {
    let a = Transform2d::from_scale(Vector2::new(2.0, 1.0));
    let b = Transform2d::from_orient(Orient2d::from_rotation(Rotation2d::from_angle(FRAC_PI_2)));
    let p = Point2::new(1.0, 0.0);
    // exact: rotate to (0,1), then scale x by 2 -> (0,1)
    assert_relative_eq!(a.apply(b.apply(p)), Point2::new(0.0, 1.0), epsilon = 1e-12);
    // the composed form scales first -> (2,0) rotated -> (0,2)
    assert_relative_eq!(a.compose(&b).apply(p), Point2::new(0.0, 2.0), epsilon = 1e-12);
    assert_eq!(a.try_compose(&b), Err(TransformError::NonUniformScale));
}

#[test]
fn transform2d_compose_inverse() {
    let a = Transform2d::new(Vector2::repeat(3.0), Rotation2d::from_angle(0.2), Vector2::new(1.0, 1.0));
    let b = Transform2d::new(Vector2::repeat(0.5), Rotation2d::from_angle(-1.0), Vector2::new(0.0, 2.0));
    let p = Point2::new(4.0, -3.0);
    let c = a.compose_inverse(&b).unwrap();
    assert_relative_eq!(c.apply(p), a.apply_inverse(b.apply(p)).unwrap(), epsilon = 1e-12);
}

#[test]
fn transform3d_scale_then_rotate_then_translate() {
    let rotation: Rotation3d = AxisAngle3d::new(Vector3::z(), FRAC_PI_2).into();
    let t = Transform3d::new(Vector3::new(2.0, 3.0, 4.0), rotation, Vector3::new(0.0, 0.0, 1.0));
    // (1,1,1) -> (2,3,4) -> (-3,2,4) -> (-3,2,5)
    assert_relative_eq!(t.apply(Point3::new(1.0, 1.0, 1.0)), Point3::new(-3.0, 2.0, 5.0), epsilon = 1e-12);
    assert_relative_eq!(t.apply_vector(Vector3::x()), Vector3::new(0.0, 2.0, 0.0), epsilon = 1e-12);
}

#[test]
fn transform3d_zero_scale_apply_inverse() {
    support::init_logger();
    let t = Transform3d::from_scale(Vector3::new(0.0, 1.0, 1.0));
    assert_eq!(
        t.apply_inverse(Point3::new(1.0, 1.0, 1.0)),
        Err(TransformError::ZeroScale { axis: 0 })
    );
    // forward application still works (it flattens onto the YZ-plane)
    assert_eq!(t.apply(Point3::new(5.0, 1.0, 1.0)), Point3::new(0.0, 1.0, 1.0));
}

#[test]
fn transform3d_rotation_about_point() {
    let pivot = Point3::new(0.0, 2.0, 0.0);
    let t = Transform3d::rotation_about_point(AxisAngle3d::new(Vector3::x(), FRAC_PI_2).into(), pivot);
    assert_relative_eq!(t.apply(pivot), pivot, epsilon = 1e-12);
    assert_relative_eq!(t.orient(), Orient3d::rotation_about_point(t.rotation, pivot), epsilon = 1e-12);
}

#[test]
fn transform3d_reflection_unsupported() {
    assert_eq!(
        Transform3d::reflection(Point3::origin(), Vector3::z()),
        Err(TransformError::Unsupported("Transform3d::reflection"))
    );
}

#[test]
fn transform3d_default_is_identity() {
    let t = Transform3d::default();
    assert!(t.is_valid());
    let p = Point3::new(1.0, -2.0, 3.0);
    assert_eq!(t.apply(p), p);
}
