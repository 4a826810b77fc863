use hako_common::FloatValueType;
use hako_derive::symmetric;

use super::Distance;
use crate::{
    math::Point,
    shapes::{Aabb, Aabc, Sphere},
};

// Cubes measure as the boxes they are

impl<T, const D: usize> Distance<Aabc<T, D>> for Aabc<T, D>
where
    T: FloatValueType,
{
    type Scalar = T;

    #[inline]
    fn distance_squared(&self, other: &Aabc<T, D>) -> T {
        Aabb::from(*self).distance_squared(&Aabb::from(*other))
    }
}

#[symmetric]
impl<T, const D: usize> Distance<Aabb<T, D>> for Aabc<T, D>
where
    T: FloatValueType,
{
    type Scalar = T;

    #[inline]
    fn distance_squared(&self, other: &Aabb<T, D>) -> T {
        Aabb::from(*self).distance_squared(other)
    }
}

#[symmetric]
impl<T, const D: usize> Distance<Sphere<T, D>> for Aabc<T, D>
where
    T: FloatValueType,
{
    type Scalar = T;

    #[inline]
    fn distance(&self, other: &Sphere<T, D>) -> T {
        Aabb::from(*self).distance(other)
    }

    #[inline]
    fn distance_squared(&self, other: &Sphere<T, D>) -> T {
        Aabb::from(*self).distance_squared(other)
    }
}

#[symmetric]
impl<T, const D: usize> Distance<Point<T, D>> for Aabc<T, D>
where
    T: FloatValueType,
{
    type Scalar = T;

    #[inline]
    fn distance_squared(&self, other: &Point<T, D>) -> T {
        Aabb::from(*self).distance_squared(other)
    }
}
