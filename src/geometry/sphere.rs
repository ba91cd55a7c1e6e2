use crate::geometry::{Hit, Primitive};
use crate::math::{dot, Color, Point3, Ray};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub radius: f32,
    pub origin: Point3,
    pub surface_color: Color,
    pub emission_color: Color,
}

impl Sphere {
    pub fn new(radius: f32, origin: Point3, surface_color: Color) -> Sphere {
        Sphere {
            radius,
            origin,
            surface_color,
            emission_color: Color::ZERO,
        }
    }

    pub fn emissive(
        radius: f32,
        origin: Point3,
        surface_color: Color,
        emission_color: Color,
    ) -> Sphere {
        Sphere {
            radius,
            origin,
            surface_color,
            emission_color,
        }
    }
}

impl Primitive for Sphere {
    fn intersect(&self, r: Ray) -> Option<Hit<'_>> {
        // project the origin-to-center vector onto the ray; l_cos is the
        // distance to the center's foot point, l_sin_sqr the squared
        // distance from the center to the ray line
        let l = self.origin - r.origin;
        let l_cos = dot(l, r.direction);

        // center behind or at the origin is a miss, which also rejects an
        // origin inside the sphere looking away from the center
        if l_cos <= 0.0 {
            return None;
        }

        let l_sin_sqr = l.sqr_length() - l_cos * l_cos;
        let r_sqr = self.radius * self.radius;

        // strict comparison: tangent rays hit
        if l_sin_sqr > r_sqr {
            return None;
        }

        let distance = l_cos - (r_sqr - l_sin_sqr).sqrt();

        let point = r.point_at_parameter(distance);
        let normal = (point - self.origin).normalized();

        Some(Hit {
            point,
            normal,
            object: self,
        })
    }

    fn surface_color(&self) -> Color {
        self.surface_color
    }

    fn emission_color(&self) -> Color {
        self.emission_color
    }
}
