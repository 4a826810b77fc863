use hako_common::FloatValueType;

use super::Contains;
use crate::{distance::Distance, math::Point, shapes::Triangle};

impl<T, const D: usize> Contains<Point<T, D>> for Triangle<T, D>
where
    T: FloatValueType,
{
    /// Exact, points off by rounding are not on the triangle.
    #[inline]
    fn contains(&self, other: &Point<T, D>) -> bool {
        self.distance_squared(other) == T::zero()
    }
}
