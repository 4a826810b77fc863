//! Distances between pairs of shapes.
//!
//! Each unordered pair is implemented once and the reversed pair is generated with
//! `#[symmetric]`, so `distance(a, b)` and `distance(b, a)` always agree.
//! Overlapping or touching shapes are at distance zero.
//!
//! ```compile_fail
//! use hako::{distance, math::point3, shapes::{Aabb, Triangle}};
//!
//! let triangle = Triangle::new(
//!     point3(0.0, 0.0, 0.0),
//!     point3(1.0, 0.0, 0.0),
//!     point3(0.0, 1.0, 0.0),
//! );
//! let bb = Aabb::new(point3(0.0, 0.0, 0.0), point3(1.0, 1.0, 1.0));
//! distance(&triangle, &bb);
//! ```

use hako_common::FloatValueType;
use num::Float;

mod aabb;
mod aabc;
mod capsule;
mod frustum;
mod line_segment;
mod obb;
mod plane;
mod point;
mod ray;
mod sphere;
mod triangle;

/// Distance between `Self` and `Rhs`.
pub trait Distance<Rhs: ?Sized> {
    type Scalar: FloatValueType;

    /// Returns the squared distance between `self` and `other`.
    fn distance_squared(&self, other: &Rhs) -> Self::Scalar;

    /// Returns the distance between `self` and `other`.
    #[inline]
    fn distance(&self, other: &Rhs) -> Self::Scalar {
        self.distance_squared(other).sqrt()
    }
}

/// Returns the distance between `a` and `b`.
#[inline]
pub fn distance<A, B>(a: &A, b: &B) -> A::Scalar
where
    A: Distance<B> + ?Sized,
    B: ?Sized,
{
    a.distance(b)
}

/// Returns the squared distance between `a` and `b`.
#[inline]
pub fn distance_squared<A, B>(a: &A, b: &B) -> A::Scalar
where
    A: Distance<B> + ?Sized,
    B: ?Sized,
{
    a.distance_squared(b)
}
