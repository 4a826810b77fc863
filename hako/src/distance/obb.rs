use hako_common::FloatValueType;
use hako_derive::symmetric;

use super::Distance;
use crate::{math::Point, shapes::Obb};

#[symmetric]
impl<T, const D: usize> Distance<Point<T, D>> for Obb<T, D>
where
    T: FloatValueType,
{
    type Scalar = T;

    #[inline]
    fn distance_squared(&self, other: &Point<T, D>) -> T {
        // Rotations preserve distances so the local frame gives the same answer
        self.local_bounds().distance_squared(&self.to_local(*other))
    }
}
