use hako_common::FloatValueType;

use super::{contains_all, Contains};
use crate::{
    math::Point,
    shapes::{Aabb, Aabc, Capsule, Frustum, LineSegment, Obb, Sphere, Triangle},
};

impl<T, const D: usize> Contains<Point<T, D>> for Capsule<T, D>
where
    T: FloatValueType,
{
    #[inline]
    fn contains(&self, other: &Point<T, D>) -> bool {
        let closest = self.segment().closest_point(*other);
        closest.dist_sqr(*other) <= self.radius * self.radius
    }
}

impl<T, const D: usize> Contains<Sphere<T, D>> for Capsule<T, D>
where
    T: FloatValueType,
{
    #[inline]
    fn contains(&self, other: &Sphere<T, D>) -> bool {
        if !(self.radius >= other.radius) {
            return false;
        }
        let slack = self.radius - other.radius;
        let closest = self.segment().closest_point(other.center);
        closest.dist_sqr(other.center) <= slack * slack
    }
}

impl<T, const D: usize> Contains<Capsule<T, D>> for Capsule<T, D>
where
    T: FloatValueType,
{
    #[inline]
    fn contains(&self, other: &Capsule<T, D>) -> bool {
        contains_all(self, other.end_spheres())
    }
}

impl<T, const D: usize> Contains<Aabb<T, D>> for Capsule<T, D>
where
    T: FloatValueType,
{
    #[inline]
    fn contains(&self, other: &Aabb<T, D>) -> bool {
        contains_all(self, other.corners())
    }
}

impl<T, const D: usize> Contains<Aabc<T, D>> for Capsule<T, D>
where
    T: FloatValueType,
{
    #[inline]
    fn contains(&self, other: &Aabc<T, D>) -> bool {
        contains_all(self, other.corners())
    }
}

impl<T, const D: usize> Contains<Obb<T, D>> for Capsule<T, D>
where
    T: FloatValueType,
{
    #[inline]
    fn contains(&self, other: &Obb<T, D>) -> bool {
        contains_all(self, other.corners())
    }
}

impl<T> Contains<Frustum<T>> for Capsule<T, 3>
where
    T: FloatValueType,
{
    #[inline]
    fn contains(&self, other: &Frustum<T>) -> bool {
        contains_all(self, other.corners())
    }
}

impl<T, const D: usize> Contains<LineSegment<T, D>> for Capsule<T, D>
where
    T: FloatValueType,
{
    #[inline]
    fn contains(&self, other: &LineSegment<T, D>) -> bool {
        contains_all(self, [other.start, other.end])
    }
}

impl<T, const D: usize> Contains<Triangle<T, D>> for Capsule<T, D>
where
    T: FloatValueType,
{
    #[inline]
    fn contains(&self, other: &Triangle<T, D>) -> bool {
        contains_all(self, other.vertices)
    }
}
