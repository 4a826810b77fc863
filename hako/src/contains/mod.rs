//! Containment predicates between pairs of shapes.
//!
//! `a.contains(&b)` is true when every point of `b` is inside `a`, boundaries included.
//! Pairs without an implementation don't compile:
//!
//! ```compile_fail
//! use hako::{contains, math::point3, shapes::{Aabb, LineSegment}};
//!
//! let segment = LineSegment::new(point3(0.0, 0.0, 0.0), point3(1.0, 0.0, 0.0));
//! let bb = Aabb::new(point3(0.0, 0.0, 0.0), point3(1.0, 1.0, 1.0));
//! contains(&segment, &bb);
//! ```
//!
//! ```compile_fail
//! use hako::{contains, math::point3, shapes::{Sphere, Triangle}};
//!
//! let triangle = Triangle::new(
//!     point3(0.0, 0.0, 0.0),
//!     point3(1.0, 0.0, 0.0),
//!     point3(0.0, 1.0, 0.0),
//! );
//! let sphere = Sphere::new(point3(0.0, 0.0, 0.0), 1.0);
//! contains(&triangle, &sphere);
//! ```

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

/// Containment of `Rhs` in `Self`.
pub trait Contains<Rhs: ?Sized> {
    /// Checks if all of `other` is inside `self`.
    fn contains(&self, other: &Rhs) -> bool;
}

/// Checks if all of `b` is inside `a`.
#[inline]
pub fn contains<A, B>(a: &A, b: &B) -> bool
where
    A: Contains<B> + ?Sized,
    B: ?Sized,
{
    a.contains(b)
}

/// Implements `Contains` with a constant `false` for shapes that can't contain an unbounded `Rhs`.
macro_rules! never_contains {
    ( $rhs:ident for $( $lhs:ident ),+ ) => {
        $(
            impl<T, const D: usize> crate::contains::Contains<crate::shapes::$rhs<T, D>>
                for crate::shapes::$lhs<T, D>
            where
                T: hako_common::FloatValueType,
            {
                #[inline]
                fn contains(&self, _other: &crate::shapes::$rhs<T, D>) -> bool {
                    false
                }
            }
        )*
    };
}

never_contains!(Plane for Aabb, Aabc, Sphere, Capsule, Obb, LineSegment, Ray, Triangle);
never_contains!(Ray for Aabb, Aabc, Sphere, Capsule, Obb, LineSegment, Triangle);

/// Checks if all `points` are inside `shape`.
#[inline]
pub(crate) fn contains_all<S, P, I>(shape: &S, points: I) -> bool
where
    S: Contains<P>,
    I: IntoIterator<Item = P>,
{
    points.into_iter().all(|p| shape.contains(&p))
}
