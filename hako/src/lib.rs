//! Containment and distance queries between bounding volumes.
//!
//! ```
//! use hako::{contains, distance_squared, math::point3, shapes::Aabb};
//!
//! let outer = Aabb::new(point3(0.0, 0.0, 0.0), point3(1.0, 1.0, 1.0));
//! let inner = Aabb::new(point3(0.2, 0.2, 0.2), point3(0.8, 0.8, 0.8));
//! assert!(contains(&outer, &inner));
//! assert_eq!(distance_squared(&outer, &point3(2.0, 0.0, 0.0)), 1.0);
//! ```

pub mod bounding_volume;
pub mod contains;
pub mod distance;
pub mod math;
pub mod shapes;

pub use bounding_volume::{BoundingVolume, BoundingVolumeKind, BoundingVolumes};
pub use contains::{contains, Contains};
pub use distance::{distance, distance_squared, Distance};
pub use hako_common::{FloatValueType, ValueType};
