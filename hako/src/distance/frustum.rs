use hako_common::FloatValueType;
use hako_derive::symmetric;

use super::Distance;
use crate::{math::Point3, shapes::Frustum};

#[symmetric]
impl<T> Distance<Point3<T>> for Frustum<T>
where
    T: FloatValueType,
{
    type Scalar = T;

    fn distance_squared(&self, other: &Point3<T>) -> T {
        let p = *other;
        if self.has_nans() || p.has_nans() {
            return T::nan();
        }
        if self.inside(p) {
            return T::zero();
        }

        // The closest point is either inside a face or on an edge
        let mut best = T::infinity();
        for (i, plane) in self.planes.iter().enumerate() {
            let d = plane.signed_distance(p);
            let projected = p - plane.normal * d;
            let on_face = self
                .planes
                .iter()
                .enumerate()
                .all(|(j, q)| i == j || q.signed_distance(projected) <= T::zero());
            if on_face && d * d < best {
                best = d * d;
            }
        }
        for edge in self.edges() {
            let d = edge.distance_squared(&p);
            if d < best {
                best = d;
            }
        }
        best
    }
}
