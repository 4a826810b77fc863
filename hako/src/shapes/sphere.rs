use std::fmt::{Display, Formatter};

use hako_common::FloatValueType;

use crate::math::{Point, Vector};

/// A sphere, or a circle in 2D.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere<T, const D: usize>
where
    T: FloatValueType,
{
    pub center: Point<T, D>,
    pub radius: T,
}

impl<T, const D: usize> Sphere<T, D>
where
    T: FloatValueType,
{
    /// Creates a new `Sphere`.
    #[inline]
    pub fn new(center: Point<T, D>, radius: T) -> Self {
        Self { center, radius }
    }

    #[inline]
    pub fn min(&self) -> Point<T, D> {
        self.center - Vector::from(self.radius)
    }

    #[inline]
    pub fn max(&self) -> Point<T, D> {
        self.center + Vector::from(self.radius)
    }

    #[inline]
    pub fn has_nans(&self) -> bool {
        self.center.has_nans() || self.radius.is_nan()
    }
}

impl<T, const D: usize> Display for Sphere<T, D>
where
    T: FloatValueType,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Sphere {{ center: {}, radius: {} }}",
            self.center, self.radius
        )
    }
}
