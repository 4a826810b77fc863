use hako_common::FloatValueType;

use super::Contains;
use crate::{
    math::Point,
    shapes::{Aabb, Aabc, Capsule, Frustum, LineSegment, Obb, Sphere, Triangle},
};

// A cube is a box, so every pair goes through the box predicate
macro_rules! contains_as_aabb {
    ( $( $rhs:ty ),+ ) => {
        $(
            impl<T, const D: usize> Contains<$rhs> for Aabc<T, D>
            where
                T: FloatValueType,
            {
                #[inline]
                fn contains(&self, other: &$rhs) -> bool {
                    Aabb::from(*self).contains(other)
                }
            }
        )*
    };
}

contains_as_aabb!(
    Aabb<T, D>,
    Aabc<T, D>,
    Sphere<T, D>,
    Capsule<T, D>,
    LineSegment<T, D>,
    Obb<T, D>,
    Triangle<T, D>,
    Point<T, D>
);

impl<T> Contains<Frustum<T>> for Aabc<T, 3>
where
    T: FloatValueType,
{
    #[inline]
    fn contains(&self, other: &Frustum<T>) -> bool {
        Aabb::from(*self).contains(other)
    }
}
