/// Anything that maps points (or vectors) of one kind onto the same kind.
///
/// Implementors only provide [`transform_point`](PointTransform::transform_point);
/// the batch helpers come for free.
pub trait PointTransform<P: Copy> {
    fn transform_point(&self, point: P) -> P;

    /// Returns a new `Vec` holding every point of `points` transformed.
    fn transform_points(&self, points: &[P]) -> Vec<P> {
        points.iter().map(|&p| self.transform_point(p)).collect()
    }

    /// Transforms every point of `points` in place.
    fn transform_points_mut(&self, points: &mut [P]) {
        for p in points.iter_mut() {
            *p = self.transform_point(*p);
        }
    }
}

