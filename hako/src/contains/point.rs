use hako_common::FloatValueType;

use super::Contains;
use crate::{
    math::{Point, Point3},
    shapes::{Aabb, Aabc, Capsule, Frustum, LineSegment, Obb, Plane, Ray, Sphere, Triangle},
};

// A point only contains shapes that collapse onto it

impl<T, const D: usize> Contains<Point<T, D>> for Point<T, D>
where
    T: FloatValueType,
{
    #[inline]
    fn contains(&self, other: &Point<T, D>) -> bool {
        self == other
    }
}

impl<T, const D: usize> Contains<Aabb<T, D>> for Point<T, D>
where
    T: FloatValueType,
{
    #[inline]
    fn contains(&self, other: &Aabb<T, D>) -> bool {
        other.p_min == *self && other.p_max == *self
    }
}

impl<T, const D: usize> Contains<Aabc<T, D>> for Point<T, D>
where
    T: FloatValueType,
{
    #[inline]
    fn contains(&self, other: &Aabc<T, D>) -> bool {
        other.half_size == T::zero() && other.center == *self
    }
}

impl<T, const D: usize> Contains<Sphere<T, D>> for Point<T, D>
where
    T: FloatValueType,
{
    #[inline]
    fn contains(&self, other: &Sphere<T, D>) -> bool {
        other.radius == T::zero() && other.center == *self
    }
}

impl<T, const D: usize> Contains<Capsule<T, D>> for Point<T, D>
where
    T: FloatValueType,
{
    #[inline]
    fn contains(&self, other: &Capsule<T, D>) -> bool {
        other.radius == T::zero() && other.start == *self && other.end == *self
    }
}

impl<T, const D: usize> Contains<LineSegment<T, D>> for Point<T, D>
where
    T: FloatValueType,
{
    #[inline]
    fn contains(&self, other: &LineSegment<T, D>) -> bool {
        other.start == *self && other.end == *self
    }
}

impl<T, const D: usize> Contains<Obb<T, D>> for Point<T, D>
where
    T: FloatValueType,
{
    #[inline]
    fn contains(&self, other: &Obb<T, D>) -> bool {
        other.half_extents == Point::zeros() && other.center == *self
    }
}

impl<T, const D: usize> Contains<Triangle<T, D>> for Point<T, D>
where
    T: FloatValueType,
{
    #[inline]
    fn contains(&self, other: &Triangle<T, D>) -> bool {
        other.vertices.iter().all(|v| v == self)
    }
}

impl<T> Contains<Frustum<T>> for Point3<T>
where
    T: FloatValueType,
{
    #[inline]
    fn contains(&self, other: &Frustum<T>) -> bool {
        other.min() == *self && other.max() == *self
    }
}

impl<T, const D: usize> Contains<Plane<T, D>> for Point<T, D>
where
    T: FloatValueType,
{
    #[inline]
    fn contains(&self, _other: &Plane<T, D>) -> bool {
        false
    }
}

impl<T, const D: usize> Contains<Ray<T, D>> for Point<T, D>
where
    T: FloatValueType,
{
    #[inline]
    fn contains(&self, _other: &Ray<T, D>) -> bool {
        false
    }
}
