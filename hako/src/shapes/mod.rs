pub mod aabb;
pub mod aabc;
pub mod capsule;
pub mod frustum;
pub mod line_segment;
pub mod obb;
pub mod plane;
pub mod ray;
pub mod sphere;
pub mod triangle;

pub use aabb::{Aabb, Corners};
pub use aabc::Aabc;
pub use capsule::Capsule;
pub use frustum::Frustum;
pub use line_segment::LineSegment;
pub use obb::Obb;
pub use plane::{Line, Plane};
pub use ray::Ray;
pub use sphere::Sphere;
pub use triangle::Triangle;
