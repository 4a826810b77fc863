use hako_common::FloatValueType;

use super::{contains_all, Contains};
use crate::{
    math::Point,
    shapes::{Aabb, Aabc, Capsule, Frustum, LineSegment, Obb, Sphere, Triangle},
};

// A box contains any shape whose axis-aligned extent it contains
macro_rules! contains_by_extent {
    ( $( $rhs:ident ),+ ) => {
        $(
            impl<T, const D: usize> Contains<$rhs<T, D>> for Aabb<T, D>
            where
                T: FloatValueType,
            {
                #[inline]
                fn contains(&self, other: &$rhs<T, D>) -> bool {
                    self.contains_extent(other.min(), other.max())
                }
            }
        )*
    };
}

contains_by_extent!(Aabb, Aabc, Sphere, Capsule, Obb, Triangle);

impl<T> Contains<Frustum<T>> for Aabb<T, 3>
where
    T: FloatValueType,
{
    #[inline]
    fn contains(&self, other: &Frustum<T>) -> bool {
        self.contains_extent(other.min(), other.max())
    }
}

impl<T, const D: usize> Contains<LineSegment<T, D>> for Aabb<T, D>
where
    T: FloatValueType,
{
    #[inline]
    fn contains(&self, other: &LineSegment<T, D>) -> bool {
        contains_all(self, [other.start, other.end])
    }
}

impl<T, const D: usize> Contains<Point<T, D>> for Aabb<T, D>
where
    T: FloatValueType,
{
    #[inline]
    fn contains(&self, other: &Point<T, D>) -> bool {
        self.inside(*other)
    }
}
