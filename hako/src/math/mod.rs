pub mod matrix;
pub mod vector;

pub use matrix::Matrix;
pub use vector::{point2, point3, vec2, vec3, Point, Point2, Point3, Vec2, Vec3, Vector};
