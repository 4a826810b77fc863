use hako_common::{positive_difference, FloatValueType};
use hako_derive::symmetric;

use super::Distance;
use crate::{
    math::Point,
    shapes::{Aabb, Sphere},
};

impl<T, const D: usize> Distance<Aabb<T, D>> for Aabb<T, D>
where
    T: FloatValueType,
{
    type Scalar = T;

    fn distance_squared(&self, other: &Aabb<T, D>) -> T {
        // At most one of the gaps is non-zero on each axis
        (0..D).fold(T::zero(), |acc, i| {
            let gap = positive_difference(self.p_min[i], other.p_max[i])
                + positive_difference(other.p_min[i], self.p_max[i]);
            acc + gap * gap
        })
    }
}

#[symmetric]
impl<T, const D: usize> Distance<Sphere<T, D>> for Aabb<T, D>
where
    T: FloatValueType,
{
    type Scalar = T;

    #[inline]
    fn distance(&self, other: &Sphere<T, D>) -> T {
        positive_difference(self.distance(&other.center), other.radius)
    }

    #[inline]
    fn distance_squared(&self, other: &Sphere<T, D>) -> T {
        let d = self.distance(other);
        d * d
    }
}

#[symmetric]
impl<T, const D: usize> Distance<Point<T, D>> for Aabb<T, D>
where
    T: FloatValueType,
{
    type Scalar = T;

    #[inline]
    fn distance_squared(&self, other: &Point<T, D>) -> T {
        let closest = other.clamp(self.p_min, self.p_max);
        closest.dist_sqr(*other)
    }
}
