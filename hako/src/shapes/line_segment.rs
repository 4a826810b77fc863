use std::fmt::{Display, Formatter};

use hako_common::{clamp, two, FloatValueType};

use crate::math::Point;

/// A line segment between two points.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineSegment<T, const D: usize>
where
    T: FloatValueType,
{
    pub start: Point<T, D>,
    pub end: Point<T, D>,
}

impl<T, const D: usize> LineSegment<T, D>
where
    T: FloatValueType,
{
    /// Creates a new `LineSegment`.
    #[inline]
    pub fn new(start: Point<T, D>, end: Point<T, D>) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn center(&self) -> Point<T, D> {
        (self.start + self.end) / two()
    }

    #[inline]
    pub fn length(&self) -> T {
        self.start.dist(self.end)
    }

    /// Finds the point on this `LineSegment` closest to `p`.
    ///
    /// A segment with equal endpoints is treated as the point `start`.
    pub fn closest_point(&self, p: Point<T, D>) -> Point<T, D> {
        let d = self.end - self.start;
        let len_sqr = d.len_sqr();
        if len_sqr == T::zero() {
            return self.start;
        }

        let t = clamp((p - self.start).dot(d) / len_sqr, T::zero(), T::one());
        self.start + d * t
    }

    #[inline]
    pub fn min(&self) -> Point<T, D> {
        self.start.min(self.end)
    }

    #[inline]
    pub fn max(&self) -> Point<T, D> {
        self.start.max(self.end)
    }

    #[inline]
    pub fn has_nans(&self) -> bool {
        self.start.has_nans() || self.end.has_nans()
    }
}

impl<T, const D: usize> Display for LineSegment<T, D>
where
    T: FloatValueType,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "LineSegment {{ start: {}, end: {} }}", self.start, self.end)
    }
}
