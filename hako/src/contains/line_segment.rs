use hako_common::FloatValueType;

use super::{contains_all, Contains};
use crate::{distance::Distance, math::Point, shapes::LineSegment};

impl<T, const D: usize> Contains<Point<T, D>> for LineSegment<T, D>
where
    T: FloatValueType,
{
    /// Exact, points off by rounding are not on the segment.
    #[inline]
    fn contains(&self, other: &Point<T, D>) -> bool {
        self.distance_squared(other) == T::zero()
    }
}

impl<T, const D: usize> Contains<LineSegment<T, D>> for LineSegment<T, D>
where
    T: FloatValueType,
{
    #[inline]
    fn contains(&self, other: &LineSegment<T, D>) -> bool {
        contains_all(self, [other.start, other.end])
    }
}
