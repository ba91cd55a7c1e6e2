use serde::{Deserialize, Serialize};

use crate::geometry::{Primitive, Sphere};
use crate::math::{Color, Point3};

#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PrimitiveData {
    Sphere {
        origin: [f32; 3],
        radius: f32,
        surface_color: [f32; 3],
        #[serde(default)]
        emission_color: [f32; 3],
    },
}

impl PrimitiveData {
    pub fn transform(self) -> Box<dyn Primitive> {
        match self {
            Self::Sphere {
                origin,
                radius,
                surface_color,
                emission_color,
            } => Box::new(Sphere::emissive(
                radius,
                Point3::new(origin[0], origin[1], origin[2]),
                Color::new(surface_color[0], surface_color[1], surface_color[2]),
                Color::new(emission_color[0], emission_color[1], emission_color[2]),
            )),
        }
    }
}
