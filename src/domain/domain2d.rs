use crate::domain::Interval;
use crate::errors::TransformError;
use crate::float_types::Real;
use nalgebra::Point2;

/// The product of two independent intervals: a (possibly flipped)
/// axis-aligned rectangle in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Domain2d {
    pub x: Interval,
    pub y: Interval,
}

impl_approx_eq!(Domain2d { x, y });

impl Domain2d {
    #[inline]
    pub const fn new(x: Interval, y: Interval) -> Self {
        Self { x, y }
    }

    /// `[0, 1] × [0, 1]`
    #[inline]
    pub const fn unit() -> Self {
        Self::new(Interval::unit(), Interval::unit())
    }

    /// Domain spanned by two corners.
    #[inline]
    pub fn from_corners(from: Point2<Real>, to: Point2<Real>) -> Self {
        Self::new(Interval::new(from.x, to.x), Interval::new(from.y, to.y))
    }

    /// Bounding domain of the points, or `None` if there are none.
    pub fn from_points(points: impl IntoIterator<Item = Point2<Real>>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut domain = Self::from_corners(first, first);
        for p in points {
            domain.include(p);
        }
        Some(domain)
    }

    /// Both intervals increasing.
    #[inline]
    pub fn is_increasing(&self) -> bool {
        self.x.is_increasing() && self.y.is_increasing()
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.x.is_valid() && self.y.is_valid()
    }

    #[inline]
    pub fn mid(&self) -> Point2<Real> {
        Point2::new(self.x.mid(), self.y.mid())
    }

    #[inline]
    pub fn contains(&self, point: Point2<Real>) -> bool {
        self.x.contains(point.x) && self.y.contains(point.y)
    }

    pub fn include(&mut self, point: Point2<Real>) {
        self.x.include(point.x);
        self.y.include(point.y);
    }

    pub fn make_increasing(&mut self) {
        self.x.make_increasing();
        self.y.make_increasing();
    }

    #[inline]
    pub fn evaluate(&self, uv: Point2<Real>) -> Point2<Real> {
        Point2::new(self.x.evaluate(uv.x), self.y.evaluate(uv.y))
    }

    pub fn normalize(&self, point: Point2<Real>) -> Result<Point2<Real>, TransformError> {
        Ok(Point2::new(self.x.normalize(point.x)?, self.y.normalize(point.y)?))
    }

    /// Maps `point` from this domain onto `to`, axis by axis.
    pub fn remap(&self, point: Point2<Real>, to: &Self) -> Result<Point2<Real>, TransformError> {
        Ok(to.evaluate(self.normalize(point)?))
    }

    #[inline]
    pub fn clamp(&self, point: Point2<Real>) -> Point2<Real> {
        Point2::new(self.x.clamp(point.x), self.y.clamp(point.y))
    }

    pub fn wrap(&self, point: Point2<Real>) -> Result<Point2<Real>, TransformError> {
        Ok(Point2::new(self.x.wrap(point.x)?, self.y.wrap(point.y)?))
    }
}
