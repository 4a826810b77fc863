use std::fmt::{Display, Formatter};

use hako_common::FloatValueType;

use super::{line_segment::LineSegment, sphere::Sphere};
use crate::math::{Point, Vector};

/// The set of points within `radius` of the segment from `start` to `end`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Capsule<T, const D: usize>
where
    T: FloatValueType,
{
    pub start: Point<T, D>,
    pub end: Point<T, D>,
    pub radius: T,
}

impl<T, const D: usize> Capsule<T, D>
where
    T: FloatValueType,
{
    /// Creates a new `Capsule`.
    #[inline]
    pub fn new(start: Point<T, D>, end: Point<T, D>, radius: T) -> Self {
        Self { start, end, radius }
    }

    /// Returns the core segment of this `Capsule`.
    #[inline]
    pub fn segment(&self) -> LineSegment<T, D> {
        LineSegment::new(self.start, self.end)
    }

    /// Returns the spheres capping the ends of this `Capsule`.
    #[inline]
    pub fn end_spheres(&self) -> [Sphere<T, D>; 2] {
        [
            Sphere::new(self.start, self.radius),
            Sphere::new(self.end, self.radius),
        ]
    }

    #[inline]
    pub fn min(&self) -> Point<T, D> {
        self.start.min(self.end) - Vector::from(self.radius)
    }

    #[inline]
    pub fn max(&self) -> Point<T, D> {
        self.start.max(self.end) + Vector::from(self.radius)
    }

    #[inline]
    pub fn has_nans(&self) -> bool {
        self.start.has_nans() || self.end.has_nans() || self.radius.is_nan()
    }
}

impl<T, const D: usize> Display for Capsule<T, D>
where
    T: FloatValueType,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Capsule {{ start: {}, end: {}, radius: {} }}",
            self.start, self.end, self.radius
        )
    }
}
