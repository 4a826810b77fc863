use hako_common::{positive_difference, FloatValueType};
use hako_derive::symmetric;

use super::Distance;
use crate::{
    math::Point,
    shapes::{LineSegment, Sphere},
};

#[symmetric]
impl<T, const D: usize> Distance<Sphere<T, D>> for LineSegment<T, D>
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
impl<T, const D: usize> Distance<Point<T, D>> for LineSegment<T, D>
where
    T: FloatValueType,
{
    type Scalar = T;

    #[inline]
    fn distance_squared(&self, other: &Point<T, D>) -> T {
        self.closest_point(*other).dist_sqr(*other)
    }
}
