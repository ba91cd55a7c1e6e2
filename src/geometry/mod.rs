use crate::math::{Color, Point3, Ray, Vec3};

mod sphere;

pub use sphere::Sphere;

/// A successful ray-object intersection. Borrowed from the scene that owns
/// the object; consumed immediately by the tracer.
#[derive(Copy, Clone)]
pub struct Hit<'a> {
    pub point: Point3,
    pub normal: Vec3,
    pub object: &'a dyn Primitive,
}

/// A geometric primitive the tracer can query. Adding a new kind of
/// primitive only requires implementing this trait; the tracer never names
/// concrete types.
pub trait Primitive: Send + Sync {
    fn intersect(&self, r: Ray) -> Option<Hit<'_>>;

    /// Albedo-like multiplier applied to reflected light.
    fn surface_color(&self) -> Color;

    /// Light emitted regardless of incoming light. Zero for non-emissive
    /// objects.
    fn emission_color(&self) -> Color;
}
