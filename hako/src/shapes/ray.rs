use std::fmt::{Display, Formatter};

use hako_common::FloatValueType;

use crate::math::{Point, Vector};

/// A half-line starting at `origin`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray<T, const D: usize>
where
    T: FloatValueType,
{
    pub origin: Point<T, D>,
    /// Unit direction.
    pub direction: Vector<T, D>,
}

impl<T, const D: usize> Ray<T, D>
where
    T: FloatValueType,
{
    /// Creates a new `Ray`. `direction` is normalized.
    #[inline]
    pub fn new(origin: Point<T, D>, direction: Vector<T, D>) -> Self {
        Self {
            origin,
            direction: direction.normalized(),
        }
    }

    /// Returns the point `t` units along this `Ray`.
    #[inline]
    pub fn point(&self, t: T) -> Point<T, D> {
        self.origin + self.direction * t
    }

    pub fn min(&self) -> Point<T, D> {
        let mut ret = self.origin;
        for i in 0..D {
            if self.direction[i] < T::zero() {
                ret[i] = T::neg_infinity();
            }
        }
        ret
    }

    pub fn max(&self) -> Point<T, D> {
        let mut ret = self.origin;
        for i in 0..D {
            if self.direction[i] > T::zero() {
                ret[i] = T::infinity();
            }
        }
        ret
    }

    #[inline]
    pub fn has_nans(&self) -> bool {
        self.origin.has_nans() || self.direction.has_nans()
    }
}

impl<T, const D: usize> Display for Ray<T, D>
where
    T: FloatValueType,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Ray {{ origin: {}, direction: {} }}",
            self.origin, self.direction
        )
    }
}
