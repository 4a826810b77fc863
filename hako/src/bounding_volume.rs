use strum::{Display, EnumCount, EnumDiscriminants, EnumIter};

use hako_common::FloatValueType;
use hako_derive::{symmetric, FromVariants};

use crate::{
    contains::Contains,
    distance::Distance,
    math::Point3,
    shapes::{Aabb, Aabc, Frustum, LineSegment, Obb, Plane, Ray, Sphere, Triangle},
};

/// Any of the three-dimensional bounding volumes.
///
/// Every operation matches on all of the members so adding one has to touch all of them.
#[derive(Copy, Clone, Debug, PartialEq, EnumDiscriminants, FromVariants)]
#[strum_discriminants(name(BoundingVolumeKind), derive(Display, EnumIter, EnumCount, Hash))]
pub enum BoundingVolume<T>
where
    T: FloatValueType,
{
    Aabb(Aabb<T, 3>),
    Aabc(Aabc<T, 3>),
    Frustum(Frustum<T>),
    LineSegment(LineSegment<T, 3>),
    Obb(Obb<T, 3>),
    Plane(Plane<T, 3>),
    Point(Point3<T>),
    Ray(Ray<T, 3>),
    Sphere(Sphere<T, 3>),
    Triangle(Triangle<T, 3>),
}

pub type BoundingVolumes<T> = Vec<BoundingVolume<T>>;

impl<T> BoundingVolume<T>
where
    T: FloatValueType,
{
    #[inline]
    pub fn kind(&self) -> BoundingVolumeKind {
        BoundingVolumeKind::from(self)
    }

    /// Returns the minimum axis-aligned extent, negative infinity on unbounded axes.
    pub fn min(&self) -> Point3<T> {
        match self {
            BoundingVolume::Aabb(v) => v.min(),
            BoundingVolume::Aabc(v) => v.min(),
            BoundingVolume::Frustum(v) => v.min(),
            BoundingVolume::LineSegment(v) => v.min(),
            BoundingVolume::Obb(v) => v.min(),
            BoundingVolume::Plane(v) => v.min(),
            BoundingVolume::Point(v) => *v,
            BoundingVolume::Ray(v) => v.min(),
            BoundingVolume::Sphere(v) => v.min(),
            BoundingVolume::Triangle(v) => v.min(),
        }
    }

    /// Returns the maximum axis-aligned extent, infinity on unbounded axes.
    pub fn max(&self) -> Point3<T> {
        match self {
            BoundingVolume::Aabb(v) => v.max(),
            BoundingVolume::Aabc(v) => v.max(),
            BoundingVolume::Frustum(v) => v.max(),
            BoundingVolume::LineSegment(v) => v.max(),
            BoundingVolume::Obb(v) => v.max(),
            BoundingVolume::Plane(v) => v.max(),
            BoundingVolume::Point(v) => *v,
            BoundingVolume::Ray(v) => v.max(),
            BoundingVolume::Sphere(v) => v.max(),
            BoundingVolume::Triangle(v) => v.max(),
        }
    }

    #[inline]
    pub fn bounding_box(&self) -> Aabb<T, 3> {
        Aabb {
            p_min: self.min(),
            p_max: self.max(),
        }
    }

    pub fn has_nans(&self) -> bool {
        match self {
            BoundingVolume::Aabb(v) => v.has_nans(),
            BoundingVolume::Aabc(v) => v.has_nans(),
            BoundingVolume::Frustum(v) => v.has_nans(),
            BoundingVolume::LineSegment(v) => v.has_nans(),
            BoundingVolume::Obb(v) => v.has_nans(),
            BoundingVolume::Plane(v) => v.has_nans(),
            BoundingVolume::Point(v) => v.has_nans(),
            BoundingVolume::Ray(v) => v.has_nans(),
            BoundingVolume::Sphere(v) => v.has_nans(),
            BoundingVolume::Triangle(v) => v.has_nans(),
        }
    }
}

impl<T> std::fmt::Display for BoundingVolume<T>
where
    T: FloatValueType,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundingVolume::Aabb(v) => write!(f, "{}", v),
            BoundingVolume::Aabc(v) => write!(f, "{}", v),
            BoundingVolume::Frustum(v) => write!(f, "{}", v),
            BoundingVolume::LineSegment(v) => write!(f, "{}", v),
            BoundingVolume::Obb(v) => write!(f, "{}", v),
            BoundingVolume::Plane(v) => write!(f, "{}", v),
            BoundingVolume::Point(v) => write!(f, "Point {}", v),
            BoundingVolume::Ray(v) => write!(f, "{}", v),
            BoundingVolume::Sphere(v) => write!(f, "{}", v),
            BoundingVolume::Triangle(v) => write!(f, "{}", v),
        }
    }
}

impl<T> Contains<Point3<T>> for BoundingVolume<T>
where
    T: FloatValueType,
{
    fn contains(&self, other: &Point3<T>) -> bool {
        match self {
            BoundingVolume::Aabb(v) => v.contains(other),
            BoundingVolume::Aabc(v) => v.contains(other),
            BoundingVolume::Frustum(v) => v.contains(other),
            BoundingVolume::LineSegment(v) => v.contains(other),
            BoundingVolume::Obb(v) => v.contains(other),
            BoundingVolume::Plane(v) => v.contains(other),
            BoundingVolume::Point(v) => v.contains(other),
            BoundingVolume::Ray(v) => v.contains(other),
            BoundingVolume::Sphere(v) => v.contains(other),
            BoundingVolume::Triangle(v) => v.contains(other),
        }
    }
}

#[symmetric]
impl<T> Distance<Point3<T>> for BoundingVolume<T>
where
    T: FloatValueType,
{
    type Scalar = T;

    fn distance(&self, other: &Point3<T>) -> T {
        match self {
            BoundingVolume::Aabb(v) => v.distance(other),
            BoundingVolume::Aabc(v) => v.distance(other),
            BoundingVolume::Frustum(v) => v.distance(other),
            BoundingVolume::LineSegment(v) => v.distance(other),
            BoundingVolume::Obb(v) => v.distance(other),
            BoundingVolume::Plane(v) => v.distance(other),
            BoundingVolume::Point(v) => v.distance(other),
            BoundingVolume::Ray(v) => v.distance(other),
            BoundingVolume::Sphere(v) => v.distance(other),
            BoundingVolume::Triangle(v) => v.distance(other),
        }
    }

    fn distance_squared(&self, other: &Point3<T>) -> T {
        match self {
            BoundingVolume::Aabb(v) => v.distance_squared(other),
            BoundingVolume::Aabc(v) => v.distance_squared(other),
            BoundingVolume::Frustum(v) => v.distance_squared(other),
            BoundingVolume::LineSegment(v) => v.distance_squared(other),
            BoundingVolume::Obb(v) => v.distance_squared(other),
            BoundingVolume::Plane(v) => v.distance_squared(other),
            BoundingVolume::Point(v) => v.distance_squared(other),
            BoundingVolume::Ray(v) => v.distance_squared(other),
            BoundingVolume::Sphere(v) => v.distance_squared(other),
            BoundingVolume::Triangle(v) => v.distance_squared(other),
        }
    }
}

// The convex bounded kinds contain any member of the sum type
macro_rules! contains_bounding_volume {
    ( $( $lhs:ty ),+ ) => {
        $(
            impl<T> Contains<BoundingVolume<T>> for $lhs
            where
                T: FloatValueType,
            {
                fn contains(&self, other: &BoundingVolume<T>) -> bool {
                    match other {
                        BoundingVolume::Aabb(v) => self.contains(v),
                        BoundingVolume::Aabc(v) => self.contains(v),
                        BoundingVolume::Frustum(v) => self.contains(v),
                        BoundingVolume::LineSegment(v) => self.contains(v),
                        BoundingVolume::Obb(v) => self.contains(v),
                        BoundingVolume::Plane(v) => self.contains(v),
                        BoundingVolume::Point(v) => self.contains(v),
                        BoundingVolume::Ray(v) => self.contains(v),
                        BoundingVolume::Sphere(v) => self.contains(v),
                        BoundingVolume::Triangle(v) => self.contains(v),
                    }
                }
            }
        )*
    };
}

contains_bounding_volume!(Aabb<T, 3>, Aabc<T, 3>, Sphere<T, 3>, Obb<T, 3>, Frustum<T>);
