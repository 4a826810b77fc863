use hako_common::FloatValueType;

use super::Contains;
use crate::{math::Point, shapes::Ray};

impl<T, const D: usize> Contains<Point<T, D>> for Ray<T, D>
where
    T: FloatValueType,
{
    /// Exact: the origin, or a point whose direction from the origin matches the ray's.
    #[inline]
    fn contains(&self, other: &Point<T, D>) -> bool {
        if *other == self.origin {
            return true;
        }
        (*other - self.origin).normalized().dot(self.direction) == T::one()
    }
}

impl<T, const D: usize> Contains<Ray<T, D>> for Ray<T, D>
where
    T: FloatValueType,
{
    /// Only an equal ray, sub-rays further along the same line aren't considered.
    #[inline]
    fn contains(&self, other: &Ray<T, D>) -> bool {
        self == other
    }
}
