use hako_common::{positive_difference, FloatValueType};
use hako_derive::symmetric;

use super::Distance;
use crate::{
    math::Point,
    shapes::{Plane, Sphere},
};

#[symmetric]
impl<T, const D: usize> Distance<Point<T, D>> for Plane<T, D>
where
    T: FloatValueType,
{
    type Scalar = T;

    #[inline]
    fn distance(&self, other: &Point<T, D>) -> T {
        self.signed_distance(*other).abs()
    }

    #[inline]
    fn distance_squared(&self, other: &Point<T, D>) -> T {
        let d = self.signed_distance(*other);
        d * d
    }
}

#[symmetric]
impl<T, const D: usize> Distance<Sphere<T, D>> for Plane<T, D>
where
    T: FloatValueType,
{
    type Scalar = T;

    #[inline]
    fn distance(&self, other: &Sphere<T, D>) -> T {
        positive_difference(self.signed_distance(other.center).abs(), other.radius)
    }

    #[inline]
    fn distance_squared(&self, other: &Sphere<T, D>) -> T {
        let d = self.distance(other);
        d * d
    }
}
