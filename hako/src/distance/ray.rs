use hako_common::{positive_difference, FloatValueType};
use hako_derive::symmetric;

use super::Distance;
use crate::{math::Point, shapes::Ray};

#[symmetric]
impl<T, const D: usize> Distance<Point<T, D>> for Ray<T, D>
where
    T: FloatValueType,
{
    type Scalar = T;

    #[inline]
    fn distance_squared(&self, other: &Point<T, D>) -> T {
        let t = positive_difference((*other - self.origin).dot(self.direction), T::zero());
        self.point(t).dist_sqr(*other)
    }
}
