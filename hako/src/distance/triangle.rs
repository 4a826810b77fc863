use hako_common::FloatValueType;
use hako_derive::symmetric;

use super::Distance;
use crate::{math::Point, shapes::Triangle};

#[symmetric]
impl<T, const D: usize> Distance<Point<T, D>> for Triangle<T, D>
where
    T: FloatValueType,
{
    type Scalar = T;

    #[inline]
    fn distance_squared(&self, other: &Point<T, D>) -> T {
        self.closest_point(*other).dist_sqr(*other)
    }
}
