use hako_common::FloatValueType;

use super::Contains;
use crate::{math::Point, shapes::Plane};

impl<T, const D: usize> Contains<Point<T, D>> for Plane<T, D>
where
    T: FloatValueType,
{
    #[inline]
    fn contains(&self, other: &Point<T, D>) -> bool {
        self.signed_distance(*other) == T::zero()
    }
}

impl<T, const D: usize> Contains<Plane<T, D>> for Plane<T, D>
where
    T: FloatValueType,
{
    #[inline]
    fn contains(&self, other: &Plane<T, D>) -> bool {
        self == other
    }
}
