use std::{
    fmt::{Display, Formatter},
    ops::Index,
};

use hako_common::FloatValueType;

use crate::math::{Point, Vec3};

/// A triangle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Triangle<T, const D: usize>
where
    T: FloatValueType,
{
    pub vertices: [Point<T, D>; 3],
}

impl<T, const D: usize> Triangle<T, D>
where
    T: FloatValueType,
{
    /// Creates a new `Triangle`.
    #[inline]
    pub fn new(p0: Point<T, D>, p1: Point<T, D>, p2: Point<T, D>) -> Self {
        Self {
            vertices: [p0, p1, p2],
        }
    }

    /// Returns the centroid of this `Triangle`.
    #[inline]
    pub fn center(&self) -> Point<T, D> {
        let [a, b, c] = self.vertices;
        (a + b + c) / (T::one() + T::one() + T::one())
    }

    /// Finds the point on this `Triangle` closest to `p`.
    pub fn closest_point(&self, p: Point<T, D>) -> Point<T, D> {
        // Real-Time Collision Detection, Ericson, 5.1.5
        // Only dot products so this works in any dimension
        let [a, b, c] = self.vertices;
        let ab = b - a;
        let ac = c - a;

        // Vertex region A
        let ap = p - a;
        let d1 = ab.dot(ap);
        let d2 = ac.dot(ap);
        if d1 <= T::zero() && d2 <= T::zero() {
            return a;
        }

        // Vertex region B
        let bp = p - b;
        let d3 = ab.dot(bp);
        let d4 = ac.dot(bp);
        if d3 >= T::zero() && d4 <= d3 {
            return b;
        }

        // Edge region AB
        let vc = d1 * d4 - d3 * d2;
        if vc <= T::zero() && d1 >= T::zero() && d3 <= T::zero() {
            let v = d1 / (d1 - d3);
            return a + ab * v;
        }

        // Vertex region C
        let cp = p - c;
        let d5 = ab.dot(cp);
        let d6 = ac.dot(cp);
        if d6 >= T::zero() && d5 <= d6 {
            return c;
        }

        // Edge region AC
        let vb = d5 * d2 - d1 * d6;
        if vb <= T::zero() && d2 >= T::zero() && d6 <= T::zero() {
            let w = d2 / (d2 - d6);
            return a + ac * w;
        }

        // Edge region BC
        let va = d3 * d6 - d5 * d4;
        if va <= T::zero() && (d4 - d3) >= T::zero() && (d5 - d6) >= T::zero() {
            let w = (d4 - d3) / ((d4 - d3) + (d5 - d6));
            return b + (c - b) * w;
        }

        // Inside, barycentrics from the region tests
        let denom = T::one() / (va + vb + vc);
        let v = vb * denom;
        let w = vc * denom;
        a + ab * v + ac * w
    }

    #[inline]
    pub fn min(&self) -> Point<T, D> {
        let [a, b, c] = self.vertices;
        a.min(b).min(c)
    }

    #[inline]
    pub fn max(&self) -> Point<T, D> {
        let [a, b, c] = self.vertices;
        a.max(b).max(c)
    }

    #[inline]
    pub fn has_nans(&self) -> bool {
        self.vertices.iter().any(|v| v.has_nans())
    }
}

impl<T> Triangle<T, 3>
where
    T: FloatValueType,
{
    /// Returns the unit normal of this `Triangle`, following counter-clockwise winding.
    #[inline]
    pub fn normal(&self) -> Vec3<T> {
        let [a, b, c] = self.vertices;
        (b - a).cross(c - a).normalized()
    }
}

impl<T, const D: usize> Index<usize> for Triangle<T, D>
where
    T: FloatValueType,
{
    type Output = Point<T, D>;

    fn index(&self, i: usize) -> &Self::Output {
        &self.vertices[i]
    }
}

impl<T, const D: usize> Display for Triangle<T, D>
where
    T: FloatValueType,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.vertices;
        write!(f, "Triangle {{ vertices: [{}, {}, {}] }}", a, b, c)
    }
}
