use hako_common::FloatValueType;

use super::{contains_all, Contains};
use crate::{
    math::Point3,
    shapes::{Aabb, Aabc, Capsule, Frustum, LineSegment, Obb, Plane, Ray, Sphere, Triangle},
};

impl<T> Contains<Point3<T>> for Frustum<T>
where
    T: FloatValueType,
{
    #[inline]
    fn contains(&self, other: &Point3<T>) -> bool {
        self.inside(*other)
    }
}

impl<T> Contains<Sphere<T, 3>> for Frustum<T>
where
    T: FloatValueType,
{
    /// The sphere has to be on the inner side of every plane, never straddling one.
    #[inline]
    fn contains(&self, other: &Sphere<T, 3>) -> bool {
        self.planes
            .iter()
            .all(|p| p.signed_distance(other.center) <= -other.radius)
    }
}

impl<T> Contains<Capsule<T, 3>> for Frustum<T>
where
    T: FloatValueType,
{
    #[inline]
    fn contains(&self, other: &Capsule<T, 3>) -> bool {
        contains_all(self, other.end_spheres())
    }
}

impl<T> Contains<Aabb<T, 3>> for Frustum<T>
where
    T: FloatValueType,
{
    #[inline]
    fn contains(&self, other: &Aabb<T, 3>) -> bool {
        contains_all(self, other.corners())
    }
}

impl<T> Contains<Aabc<T, 3>> for Frustum<T>
where
    T: FloatValueType,
{
    #[inline]
    fn contains(&self, other: &Aabc<T, 3>) -> bool {
        contains_all(self, other.corners())
    }
}

impl<T> Contains<Obb<T, 3>> for Frustum<T>
where
    T: FloatValueType,
{
    #[inline]
    fn contains(&self, other: &Obb<T, 3>) -> bool {
        contains_all(self, other.corners())
    }
}

impl<T> Contains<Frustum<T>> for Frustum<T>
where
    T: FloatValueType,
{
    #[inline]
    fn contains(&self, other: &Frustum<T>) -> bool {
        contains_all(self, other.corners())
    }
}

impl<T> Contains<LineSegment<T, 3>> for Frustum<T>
where
    T: FloatValueType,
{
    #[inline]
    fn contains(&self, other: &LineSegment<T, 3>) -> bool {
        contains_all(self, [other.start, other.end])
    }
}

impl<T> Contains<Triangle<T, 3>> for Frustum<T>
where
    T: FloatValueType,
{
    #[inline]
    fn contains(&self, other: &Triangle<T, 3>) -> bool {
        contains_all(self, other.vertices)
    }
}

impl<T> Contains<Plane<T, 3>> for Frustum<T>
where
    T: FloatValueType,
{
    #[inline]
    fn contains(&self, _other: &Plane<T, 3>) -> bool {
        false
    }
}

impl<T> Contains<Ray<T, 3>> for Frustum<T>
where
    T: FloatValueType,
{
    #[inline]
    fn contains(&self, _other: &Ray<T, 3>) -> bool {
        false
    }
}
