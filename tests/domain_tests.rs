use approx::assert_relative_eq;
use csgrs_transform::{
    domain::{Domain2d, Interval},
    errors::TransformError,
    float_types::Real,
};
use nalgebra::Point2;

#[test]
fn interval_basics() {
    let i = Interval::new(4.0, 1.0);
    assert_eq!(i.length(), -3.0);
    assert_eq!(i.mid(), 2.5);
    assert_eq!((i.min(), i.max()), (1.0, 4.0));
    assert!(!i.is_increasing());
    assert!(i.contains(2.0));
    assert!(!i.contains(4.5));
    assert_eq!(i.evaluate(0.0), 4.0);
    assert_eq!(i.evaluate(1.0), 1.0);
}

#[test]
fn interval_make_increasing() {
    let mut i = Interval::new(4.0, 1.0);
    i.make_increasing();
    assert_eq!(i, Interval::new(1.0, 4.0));
    i.make_increasing();
    assert_eq!(i, Interval::new(1.0, 4.0));
    i.reverse();
    assert_eq!(i, Interval::new(4.0, 1.0));
}

#[test]
fn interval_from_values() {
    let i = Interval::from_values([3.0, -1.0, 7.0, 2.0]).unwrap();
    assert_eq!(i, Interval::new(-1.0, 7.0));
    assert!(Interval::from_values(std::iter::empty()).is_none());
    assert!(!Interval::new(0.0, Real::NAN).is_valid());
}

#[test]
fn interval_normalize_and_evaluate_agree() {
    let i = Interval::new(-2.0, 6.0);
    let u = i.normalize(4.0).unwrap();
    assert_relative_eq!(u, 0.75, epsilon = 1e-12);
    assert_relative_eq!(i.evaluate(u), 4.0, epsilon = 1e-12);
}

#[test]
fn domain_wrap_and_clamp() {
    let d = Domain2d::new(Interval::new(0.0, 1.0), Interval::new(0.0, 2.0));
    let p = Point2::new(1.25, -0.5);
    assert_relative_eq!(d.wrap(p).unwrap(), Point2::new(0.25, 1.5), epsilon = 1e-12);
    assert_eq!(d.clamp(p), Point2::new(1.0, 0.0));
    assert!(d.contains(d.clamp(p)));
    assert_eq!(d.mid(), Point2::new(0.5, 1.0));
}

#[test]
fn domain_include_grows() {
    let mut d = Domain2d::from_corners(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0));
    d.include(Point2::new(-1.0, 3.0));
    assert_eq!(d, Domain2d::new(Interval::new(-1.0, 1.0), Interval::new(0.0, 3.0)));
}

#[test]
fn domain_remap_flipped() {
    let from = Domain2d::unit();
    let mut to = Domain2d::from_corners(Point2::new(10.0, 0.0), Point2::new(0.0, 5.0));
    assert!(!to.is_increasing());
    let p = from.remap(Point2::new(0.2, 0.4), &to).unwrap();
    assert_relative_eq!(p, Point2::new(8.0, 2.0), epsilon = 1e-12);
    to.make_increasing();
    assert!(to.is_increasing());
}

#[test]
fn domain_degenerate_axis() {
    let d = Domain2d::from_corners(Point2::new(2.0, 0.0), Point2::new(2.0, 1.0));
    assert_eq!(
        d.wrap(Point2::new(2.0, 0.5)),
        Err(TransformError::ZeroLength { what: "interval" })
    );
}
