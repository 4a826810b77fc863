use std::fmt::{Display, Formatter};

use hako_common::{two, FloatValueType};

use crate::math::{Point, Vector};

/// An axis-aligned box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb<T, const D: usize>
where
    T: FloatValueType,
{
    /// The minimum extent of the box.
    pub p_min: Point<T, D>,
    /// The maximum extent of the box.
    pub p_max: Point<T, D>,
}

impl<T, const D: usize> Aabb<T, D>
where
    T: FloatValueType,
{
    /// Creates a new `Aabb` spanning `p0` and `p1`.
    ///
    /// The points don't need to be ordered.
    #[inline]
    pub fn new(p0: Point<T, D>, p1: Point<T, D>) -> Self {
        Self {
            p_min: p0.min(p1),
            p_max: p0.max(p1),
        }
    }

    /// Creates a new `Aabb` around `center`.
    #[inline]
    pub fn from_center(center: Point<T, D>, half_extents: Vector<T, D>) -> Self {
        Self {
            p_min: center - half_extents,
            p_max: center + half_extents,
        }
    }

    /// Returns the minimum extent of this `Aabb`.
    #[inline]
    pub fn min(&self) -> Point<T, D> {
        self.p_min
    }

    /// Returns the maximum extent of this `Aabb`.
    #[inline]
    pub fn max(&self) -> Point<T, D> {
        self.p_max
    }

    /// Returns the vector from `p_min` to `p_max`.
    #[inline]
    pub fn diagonal(&self) -> Vector<T, D> {
        self.p_max - self.p_min
    }

    #[inline]
    pub fn center(&self) -> Point<T, D> {
        (self.p_min + self.p_max) / two()
    }

    #[inline]
    pub fn half_extents(&self) -> Vector<T, D> {
        self.diagonal() / two()
    }

    /// Returns the corner with the maximum extent on the axes whose bit is set in `i`.
    #[inline]
    pub fn corner(&self, i: usize) -> Point<T, D> {
        debug_assert!(i < (1 << D));

        let mut ret = self.p_min;
        for axis in 0..D {
            if i & (1 << axis) != 0 {
                ret[axis] = self.p_max[axis];
            }
        }
        ret
    }

    /// Returns an iterator over the `2^D` corners of this `Aabb`.
    #[inline]
    pub fn corners(&self) -> Corners<T, D> {
        Corners {
            bb: *self,
            next: 0,
        }
    }

    /// Checks if `p` is inside this `Aabb`, boundary included.
    #[inline]
    pub fn inside(&self, p: Point<T, D>) -> bool {
        (0..D).all(|i| self.p_min[i] <= p[i] && p[i] <= self.p_max[i])
    }

    /// Checks if this `Aabb` contains the extent spanned by `p_min` and `p_max`.
    #[inline]
    pub fn contains_extent(&self, p_min: Point<T, D>, p_max: Point<T, D>) -> bool {
        (0..D).all(|i| self.p_min[i] <= p_min[i] && p_max[i] <= self.p_max[i])
    }

    /// Checks if this `Aabb` contains NaNs.
    #[inline]
    pub fn has_nans(&self) -> bool {
        self.p_min.has_nans() || self.p_max.has_nans()
    }
}

impl<T, const D: usize> Display for Aabb<T, D>
where
    T: FloatValueType,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Aabb {{ min: {}, max: {} }}", self.p_min, self.p_max)
    }
}

/// An iterator over the corners of an [Aabb].
///
/// Corner `i` takes the maximum extent on the axes whose bit is set in `i`.
pub struct Corners<T, const D: usize>
where
    T: FloatValueType,
{
    bb: Aabb<T, D>,
    next: usize,
}

impl<T, const D: usize> Iterator for Corners<T, D>
where
    T: FloatValueType,
{
    type Item = Point<T, D>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= (1 << D) {
            None
        } else {
            let ret = self.bb.corner(self.next);
            self.next += 1;
            Some(ret)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (1usize << D).saturating_sub(self.next);
        (left, Some(left))
    }
}

impl<T, const D: usize> ExactSizeIterator for Corners<T, D> where T: FloatValueType {}
