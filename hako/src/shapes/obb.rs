use std::fmt::{Display, Formatter};

use hako_common::FloatValueType;

use super::aabb::Aabb;
use crate::math::{Matrix, Point, Vector};

/// An oriented box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Obb<T, const D: usize>
where
    T: FloatValueType,
{
    pub center: Point<T, D>,
    /// Half of the box's extent along each of its own axes.
    pub half_extents: Vector<T, D>,
    /// Orthonormal basis whose columns are the box's axes in world space.
    pub rotation: Matrix<T, D>,
}

impl<T, const D: usize> Obb<T, D>
where
    T: FloatValueType,
{
    /// Creates a new `Obb`.
    #[inline]
    pub fn new(center: Point<T, D>, half_extents: Vector<T, D>, rotation: Matrix<T, D>) -> Self {
        Self {
            center,
            half_extents,
            rotation,
        }
    }

    /// Transforms world space `p` into the frame of this `Obb`.
    #[inline]
    pub fn to_local(&self, p: Point<T, D>) -> Point<T, D> {
        self.rotation.transposed() * (p - self.center)
    }

    /// Returns this `Obb` in its own frame, centered at the origin.
    #[inline]
    pub fn local_bounds(&self) -> Aabb<T, D> {
        Aabb::from_center(Vector::zeros(), self.half_extents)
    }

    /// Returns an iterator over the `2^D` corners of this `Obb` in world space.
    pub fn corners(&self) -> impl Iterator<Item = Point<T, D>> {
        let center = self.center;
        let rotation = self.rotation;
        self.local_bounds()
            .corners()
            .map(move |c| center + rotation * c)
    }

    #[inline]
    pub fn min(&self) -> Point<T, D> {
        self.center - self.rotation.abs() * self.half_extents
    }

    #[inline]
    pub fn max(&self) -> Point<T, D> {
        self.center + self.rotation.abs() * self.half_extents
    }

    #[inline]
    pub fn has_nans(&self) -> bool {
        self.center.has_nans() || self.half_extents.has_nans() || self.rotation.has_nans()
    }
}

impl<T, const D: usize> Display for Obb<T, D>
where
    T: FloatValueType,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Obb {{ center: {}, half_extents: {}, axes: [",
            self.center, self.half_extents
        )?;
        for i in 0..D {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", self.rotation.col(i))?;
        }
        write!(f, "] }}")
    }
}
