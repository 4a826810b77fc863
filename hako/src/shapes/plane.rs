use std::fmt::{Display, Formatter};

use hako_common::FloatValueType;

use crate::math::{Point, Point3, Vector};

/// A hyperplane in Hesse normal form: points `p` for which `dot(normal, p) == offset`.
///
/// The side the normal points to is the outside.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Plane<T, const D: usize>
where
    T: FloatValueType,
{
    /// Unit normal.
    pub normal: Vector<T, D>,
    pub offset: T,
}

/// A line in 2D.
pub type Line<T> = Plane<T, 2>;

impl<T, const D: usize> Plane<T, D>
where
    T: FloatValueType,
{
    /// Creates a new `Plane`. `normal` is expected to be unit length.
    #[inline]
    pub fn new(normal: Vector<T, D>, offset: T) -> Self {
        Self { normal, offset }
    }

    /// Creates a new `Plane` through `p`. `normal` is expected to be unit length.
    #[inline]
    pub fn from_point_normal(p: Point<T, D>, normal: Vector<T, D>) -> Self {
        Self {
            normal,
            offset: normal.dot(p),
        }
    }

    /// Returns the signed distance of `p` to this `Plane`, positive on the outside.
    #[inline]
    pub fn signed_distance(&self, p: Point<T, D>) -> T {
        self.normal.dot(p) - self.offset
    }

    /// Returns the axis the normal is aligned with, if any.
    fn aligned_axis(&self) -> Option<usize> {
        let mut ret = None;
        for i in 0..D {
            if self.normal[i] != T::zero() {
                if ret.is_some() {
                    return None;
                }
                ret = Some(i);
            }
        }
        ret
    }

    /// Returns the minimum extent, infinite on every axis this `Plane` isn't fixed on.
    pub fn min(&self) -> Point<T, D> {
        self.extent(T::neg_infinity())
    }

    /// Returns the maximum extent, infinite on every axis this `Plane` isn't fixed on.
    pub fn max(&self) -> Point<T, D> {
        self.extent(T::infinity())
    }

    fn extent(&self, unbounded: T) -> Point<T, D> {
        let mut ret = Vector::from(unbounded);
        if let Some(axis) = self.aligned_axis() {
            ret[axis] = self.offset / self.normal[axis];
        }
        ret
    }

    #[inline]
    pub fn has_nans(&self) -> bool {
        self.normal.has_nans() || self.offset.is_nan()
    }
}

impl<T> Plane<T, 3>
where
    T: FloatValueType,
{
    /// Creates the `Plane` through three points.
    ///
    /// The normal points towards the side from which `p0`, `p1`, `p2` appear counter-clockwise.
    pub fn from_points(p0: Point3<T>, p1: Point3<T>, p2: Point3<T>) -> Self {
        let normal = (p1 - p0).cross(p2 - p0).normalized();
        Self::from_point_normal(p0, normal)
    }
}

impl<T, const D: usize> Display for Plane<T, D>
where
    T: FloatValueType,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Plane {{ normal: {}, offset: {} }}",
            self.normal, self.offset
        )
    }
}
