use std::fmt::{Display, Formatter};

use hako_common::FloatValueType;

use super::aabb::{Aabb, Corners};
use crate::math::{Point, Vector};

/// An axis-aligned cube.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabc<T, const D: usize>
where
    T: FloatValueType,
{
    pub center: Point<T, D>,
    /// Half of the edge length, shared by all axes.
    pub half_size: T,
}

impl<T, const D: usize> Aabc<T, D>
where
    T: FloatValueType,
{
    /// Creates a new `Aabc`.
    #[inline]
    pub fn new(center: Point<T, D>, half_size: T) -> Self {
        Self { center, half_size }
    }

    #[inline]
    pub fn min(&self) -> Point<T, D> {
        self.center - Vector::from(self.half_size)
    }

    #[inline]
    pub fn max(&self) -> Point<T, D> {
        self.center + Vector::from(self.half_size)
    }

    #[inline]
    pub fn corners(&self) -> Corners<T, D> {
        Aabb::from(*self).corners()
    }

    #[inline]
    pub fn has_nans(&self) -> bool {
        self.center.has_nans() || self.half_size.is_nan()
    }
}

impl<T, const D: usize> From<Aabc<T, D>> for Aabb<T, D>
where
    T: FloatValueType,
{
    fn from(c: Aabc<T, D>) -> Self {
        Aabb::from_center(c.center, Vector::from(c.half_size))
    }
}

impl<T, const D: usize> Display for Aabc<T, D>
where
    T: FloatValueType,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Aabc {{ center: {}, half_size: {} }}",
            self.center, self.half_size
        )
    }
}
