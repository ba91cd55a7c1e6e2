use super::{Point3, Vec3};

#[derive(Copy, Clone, Debug, Default)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vec3,
}

impl Ray {
    pub const fn new(origin: Point3, direction: Vec3) -> Self {
        Ray { origin, direction }
    }

    /// Distances are in units of the direction's length; the camera hands
    /// out unit directions, so they coincide with world units there.
    pub fn point_at_parameter(self, t: f32) -> Point3 {
        self.origin + self.direction * t
    }
}
