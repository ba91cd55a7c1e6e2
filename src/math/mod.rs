mod ray;
mod vector;

pub use ray::*;
pub use vector::*;

pub type Vec3 = Vector3<f32>;
pub type Point3 = Vector3<f32>;
pub type Color = Vector3<f32>;
