mod primitives;

use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub use primitives::PrimitiveData;

use crate::camera::Camera;
use crate::math::Point3;
use crate::scene::Scene;

#[derive(Clone, Serialize, Deserialize)]
pub struct CameraData {
    #[serde(default)]
    pub origin: [f32; 3],
    pub fov: f32,
}

impl From<CameraData> for Camera {
    fn from(data: CameraData) -> Camera {
        Camera::from_origin(
            Point3::new(data.origin[0], data.origin[1], data.origin[2]),
            data.fov,
        )
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct SceneData {
    pub camera: CameraData,
    pub primitives: Vec<PrimitiveData>,
}

impl From<SceneData> for Scene {
    fn from(mut data: SceneData) -> Scene {
        data.primitives
            .drain(..)
            .map(|e| e.transform())
            .collect::<Vec<_>>()
            .into()
    }
}

pub fn load_json<T>(path: PathBuf) -> Result<T, Box<dyn Error>>
where
    T: DeserializeOwned,
{
    let mut input = String::new();
    File::open(path).and_then(|mut f| f.read_to_string(&mut input))?;

    let data: T = serde_json::from_str(&input)?;
    Ok(data)
}
