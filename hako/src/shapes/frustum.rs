use std::{
    array,
    fmt::{Display, Formatter},
    ops::Index,
};

use hako_common::{two, FloatValueType};

use super::{line_segment::LineSegment, plane::Plane};
use crate::math::{Point3, Vec3};

pub const NEAR: usize = 0;
pub const FAR: usize = 1;
pub const LEFT: usize = 2;
pub const RIGHT: usize = 3;
pub const BOTTOM: usize = 4;
pub const TOP: usize = 5;

/// A convex region bounded by six planes with outward facing normals.
///
/// Planes are stored in the order near, far, left, right, bottom, top.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frustum<T>
where
    T: FloatValueType,
{
    pub planes: [Plane<T, 3>; 6],
}

impl<T> Frustum<T>
where
    T: FloatValueType,
{
    /// Creates a new `Frustum`.
    #[inline]
    pub fn new(planes: [Plane<T, 3>; 6]) -> Self {
        Self { planes }
    }

    /// Creates the view `Frustum` of a perspective camera at `position` looking at `target`.
    ///
    /// `vertical_fov` is in radians and `aspect` is width over height.
    pub fn from_view(
        position: Point3<T>,
        target: Point3<T>,
        up: Vec3<T>,
        vertical_fov: T,
        aspect: T,
        near: T,
        far: T,
    ) -> Self {
        let forward = (target - position).normalized();
        let right = forward.cross(up).normalized();
        let up = right.cross(forward);

        let tan_v = (vertical_fov / two()).tan();
        let tan_h = tan_v * aspect;

        let side = |n: Vec3<T>| Plane::from_point_normal(position, n.normalized());

        Self {
            planes: [
                Plane::from_point_normal(position + forward * near, -forward),
                Plane::from_point_normal(position + forward * far, forward),
                side(-right - forward * tan_h),
                side(right - forward * tan_h),
                side(-up - forward * tan_v),
                side(up - forward * tan_v),
            ],
        }
    }

    /// Returns the corner at the intersection of one plane from each opposing pair.
    ///
    /// Bit 0 of `i` selects right over left, bit 1 top over bottom and bit 2 far over near.
    pub fn corner(&self, i: usize) -> Point3<T> {
        debug_assert!(i < 8);

        let p0 = self.planes[if i & 4 != 0 { FAR } else { NEAR }];
        let p1 = self.planes[if i & 1 != 0 { RIGHT } else { LEFT }];
        let p2 = self.planes[if i & 2 != 0 { TOP } else { BOTTOM }];

        let n12 = p1.normal.cross(p2.normal);
        let n20 = p2.normal.cross(p0.normal);
        let n01 = p0.normal.cross(p1.normal);

        (n12 * p0.offset + n20 * p1.offset + n01 * p2.offset) / p0.normal.dot(n12)
    }

    /// Returns the eight corners of this `Frustum`, see [Frustum::corner] for the ordering.
    pub fn corners(&self) -> [Point3<T>; 8] {
        array::from_fn(|i| self.corner(i))
    }

    /// Returns the twelve edges of this `Frustum`.
    pub fn edges(&self) -> [LineSegment<T, 3>; 12] {
        let corners = self.corners();
        array::from_fn(|e| {
            // Four edges along each axis bit, between corners that differ only in that bit
            let bit = e / 4;
            let rest = e % 4;
            let low = rest & ((1 << bit) - 1);
            let high = (rest >> bit) << (bit + 1);
            let i = high | low;
            LineSegment::new(corners[i], corners[i | (1 << bit)])
        })
    }

    /// Checks if `p` is on the inner side of all planes, boundary included.
    #[inline]
    pub fn inside(&self, p: Point3<T>) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.signed_distance(p) <= T::zero())
    }

    pub fn min(&self) -> Point3<T> {
        let corners = self.corners();
        corners.iter().skip(1).fold(corners[0], |acc, &c| acc.min(c))
    }

    pub fn max(&self) -> Point3<T> {
        let corners = self.corners();
        corners.iter().skip(1).fold(corners[0], |acc, &c| acc.max(c))
    }

    #[inline]
    pub fn has_nans(&self) -> bool {
        self.planes.iter().any(|p| p.has_nans())
    }
}

impl<T> Index<usize> for Frustum<T>
where
    T: FloatValueType,
{
    type Output = Plane<T, 3>;

    fn index(&self, i: usize) -> &Self::Output {
        &self.planes[i]
    }
}

impl<T> Display for Frustum<T>
where
    T: FloatValueType,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Frustum {{ planes: [")?;
        for (i, p) in self.planes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", p)?;
        }
        write!(f, "] }}")
    }
}
