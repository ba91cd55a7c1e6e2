use std::f32::consts::PI;

use crate::math::{Point3, Ray, Vec3};

/// Pinhole camera looking down -Z. The fov-derived factor scales normalized
/// device coordinates onto the image plane at z = -1.
pub struct Camera {
    pub origin: Point3,
    pub factor: f32,
}

impl Camera {
    pub fn new(fov: f32) -> Camera {
        Camera::from_origin(Point3::ZERO, fov)
    }

    pub fn from_origin(origin: Point3, fov: f32) -> Camera {
        // tangent of the half angle: fov spans the full NDC range [-1, 1]
        let factor = (PI * 0.5 * fov / 180.0).tan();
        Camera { origin, factor }
    }

    /// (x, y) are normalized device coordinates, already aspect-corrected
    /// by the caller. The returned direction is unit length, as the tracer
    /// requires for distances to come out in world units.
    pub fn primary_ray(&self, x: f32, y: f32) -> Ray {
        let x = x * self.factor;
        let y = y * self.factor;
        Ray::new(self.origin, Vec3::new(x, y, -1.0).normalized())
    }
}
