use hako_common::{positive_difference, FloatValueType};
use hako_derive::symmetric;

use super::Distance;
use crate::{
    math::Point,
    shapes::{Capsule, Sphere},
};

#[symmetric]
impl<T, const D: usize> Distance<Sphere<T, D>> for Capsule<T, D>
where
    T: FloatValueType,
{
    type Scalar = T;

    #[inline]
    fn distance(&self, other: &Sphere<T, D>) -> T {
        positive_difference(
            self.segment().distance(&other.center),
            self.radius + other.radius,
        )
    }

    #[inline]
    fn distance_squared(&self, other: &Sphere<T, D>) -> T {
        let d = self.distance(other);
        d * d
    }
}

#[symmetric]
impl<T, const D: usize> Distance<Point<T, D>> for Capsule<T, D>
where
    T: FloatValueType,
{
    type Scalar = T;

    #[inline]
    fn distance(&self, other: &Point<T, D>) -> T {
        positive_difference(self.segment().distance(other), self.radius)
    }

    #[inline]
    fn distance_squared(&self, other: &Point<T, D>) -> T {
        let d = self.distance(other);
        d * d
    }
}
