use crate::errors::TransformError;
use crate::float_types::Real;

/// A closed interval between two values that need not be in order.
///
/// A decreasing interval (`t0 > t1`) is legal and keeps its direction
/// through [`evaluate`](Self::evaluate), [`normalize`](Self::normalize) and
/// [`include`](Self::include).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    pub t0: Real,
    pub t1: Real,
}

impl_approx_eq!(Interval { t0, t1 });

impl Interval {
    #[inline]
    pub const fn new(t0: Real, t1: Real) -> Self {
        Self { t0, t1 }
    }

    /// `[0, 1]`
    #[inline]
    pub const fn unit() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Smallest increasing interval holding every value, or `None` if there
    /// are none.
    pub fn from_values(values: impl IntoIterator<Item = Real>) -> Option<Self> {
        let mut values = values.into_iter();
        let first = values.next()?;
        let mut interval = Self::new(first, first);
        for t in values {
            interval.include(t);
        }
        Some(interval)
    }

    /// Signed length, `t1 - t0`.
    #[inline]
    pub fn length(&self) -> Real {
        self.t1 - self.t0
    }

    #[inline]
    pub fn mid(&self) -> Real {
        (self.t0 + self.t1) * 0.5
    }

    #[inline]
    pub fn min(&self) -> Real {
        self.t0.min(self.t1)
    }

    #[inline]
    pub fn max(&self) -> Real {
        self.t0.max(self.t1)
    }

    #[inline]
    pub fn is_increasing(&self) -> bool {
        self.t0 < self.t1
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.t0.is_finite() && self.t1.is_finite()
    }

    #[inline]
    pub fn contains(&self, t: Real) -> bool {
        t >= self.min() && t <= self.max()
    }

    /// Grows the interval to hold `t`, keeping its direction.
    pub fn include(&mut self, t: Real) {
        if self.t0 > self.t1 {
            self.t0 = self.t0.max(t);
            self.t1 = self.t1.min(t);
        } else {
            self.t0 = self.t0.min(t);
            self.t1 = self.t1.max(t);
        }
    }

    pub fn reverse(&mut self) {
        core::mem::swap(&mut self.t0, &mut self.t1);
    }

    pub fn make_increasing(&mut self) {
        if self.t0 > self.t1 {
            self.reverse();
        }
    }

    /// The value at normalized parameter `u` (0 at `t0`, 1 at `t1`).
    #[inline]
    pub fn evaluate(&self, u: Real) -> Real {
        self.t0 + u * self.length()
    }

    /// The normalized parameter of `t`; the inverse of [`evaluate`](Self::evaluate).
    pub fn normalize(&self, t: Real) -> Result<Real, TransformError> {
        let length = self.length();
        if length == 0.0 {
            return Err(TransformError::ZeroLength { what: "interval" });
        }
        Ok((t - self.t0) / length)
    }

    /// Maps `t` from this interval onto `to`.
    pub fn remap(&self, t: Real, to: &Self) -> Result<Real, TransformError> {
        Ok(to.evaluate(self.normalize(t)?))
    }

    #[inline]
    pub fn clamp(&self, t: Real) -> Real {
        t.clamp(self.min(), self.max())
    }

    /// Wraps `t` periodically into the interval.
    pub fn wrap(&self, t: Real) -> Result<Real, TransformError> {
        let u = self.normalize(t)?;
        Ok(self.evaluate(u - u.floor()))
    }
}
