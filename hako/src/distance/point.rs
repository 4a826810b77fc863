use hako_common::FloatValueType;

use super::Distance;
use crate::math::Point;

impl<T, const D: usize> Distance<Point<T, D>> for Point<T, D>
where
    T: FloatValueType,
{
    type Scalar = T;

    #[inline]
    fn distance(&self, other: &Point<T, D>) -> T {
        self.dist(*other)
    }

    #[inline]
    fn distance_squared(&self, other: &Point<T, D>) -> T {
        self.dist_sqr(*other)
    }
}
