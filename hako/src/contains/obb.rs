use hako_common::FloatValueType;

use super::{contains_all, Contains};
use crate::{
    math::Point,
    shapes::{Aabb, Aabc, Capsule, Frustum, LineSegment, Obb, Sphere, Triangle},
};

impl<T, const D: usize> Contains<Point<T, D>> for Obb<T, D>
where
    T: FloatValueType,
{
    #[inline]
    fn contains(&self, other: &Point<T, D>) -> bool {
        let local = self.to_local(*other);
        (0..D).all(|i| local[i].abs() <= self.half_extents[i])
    }
}

impl<T, const D: usize> Contains<Sphere<T, D>> for Obb<T, D>
where
    T: FloatValueType,
{
    #[inline]
    fn contains(&self, other: &Sphere<T, D>) -> bool {
        let local = self.to_local(other.center);
        (0..D).all(|i| local[i].abs() + other.radius <= self.half_extents[i])
    }
}

impl<T, const D: usize> Contains<Capsule<T, D>> for Obb<T, D>
where
    T: FloatValueType,
{
    #[inline]
    fn contains(&self, other: &Capsule<T, D>) -> bool {
        contains_all(self, other.end_spheres())
    }
}

impl<T, const D: usize> Contains<Aabb<T, D>> for Obb<T, D>
where
    T: FloatValueType,
{
    #[inline]
    fn contains(&self, other: &Aabb<T, D>) -> bool {
        contains_all(self, other.corners())
    }
}

impl<T, const D: usize> Contains<Aabc<T, D>> for Obb<T, D>
where
    T: FloatValueType,
{
    #[inline]
    fn contains(&self, other: &Aabc<T, D>) -> bool {
        contains_all(self, other.corners())
    }
}

impl<T, const D: usize> Contains<Obb<T, D>> for Obb<T, D>
where
    T: FloatValueType,
{
    #[inline]
    fn contains(&self, other: &Obb<T, D>) -> bool {
        contains_all(self, other.corners())
    }
}

impl<T> Contains<Frustum<T>> for Obb<T, 3>
where
    T: FloatValueType,
{
    #[inline]
    fn contains(&self, other: &Frustum<T>) -> bool {
        contains_all(self, other.corners())
    }
}

impl<T, const D: usize> Contains<LineSegment<T, D>> for Obb<T, D>
where
    T: FloatValueType,
{
    #[inline]
    fn contains(&self, other: &LineSegment<T, D>) -> bool {
        contains_all(self, [other.start, other.end])
    }
}

impl<T, const D: usize> Contains<Triangle<T, D>> for Obb<T, D>
where
    T: FloatValueType,
{
    #[inline]
    fn contains(&self, other: &Triangle<T, D>) -> bool {
        contains_all(self, other.vertices)
    }
}
