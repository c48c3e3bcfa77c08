//! JSON scene descriptions.
//!
//! A scene file names its materials once and lets bodies refer to them by
//! name, so one material can be shared by many surfaces:
//!
//! ```json
//! {
//!   "name": "two-spheres",
//!   "materials": { "red": { "ambient": [0.2, 0, 0], "diffuse": [0.8, 0, 0],
//!                           "specular": [0.1, 0.1, 0.1], "reflective": [0, 0, 0],
//!                           "specular_power": 2, "fuzz": 0.2 } },
//!   "bodies": [ { "type": "sphere", "center": [0, 0, -1], "radius": 0.5, "material": "red" } ],
//!   "lights": [ { "position": [0, 2, 0], "intensity": [0.5, 0.5, 0.5] } ]
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use rayn_math::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Light, Material};

/// Errors that can occur while loading a scene file.
#[derive(Error, Debug)]
pub enum SceneFileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid scene JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Body {index} references unknown material {material:?}")]
    UnknownMaterial { index: usize, material: String },

    #[error("Area light with {count} lights exceeds the limit of {max}")]
    AreaLightTooLarge { count: u32, max: u32 },
}

pub type SceneFileResult<T> = Result<T, SceneFileError>;

/// One intersectable surface in a scene file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BodyDescription {
    Sphere {
        center: Vec3,
        radius: f32,
        material: String,
    },
    Plane {
        point: Vec3,
        normal: Vec3,
        material: String,
    },
    Triangle {
        v1: Vec3,
        v2: Vec3,
        v3: Vec3,
        material: String,
    },
    Quad {
        v1: Vec3,
        v2: Vec3,
        v3: Vec3,
        material: String,
    },
}

impl BodyDescription {
    /// Name of the material this body refers to.
    pub fn material(&self) -> &str {
        match self {
            BodyDescription::Sphere { material, .. }
            | BodyDescription::Plane { material, .. }
            | BodyDescription::Triangle { material, .. }
            | BodyDescription::Quad { material, .. } => material,
        }
    }
}

/// Largest number of point lights one area light may expand into.
pub const MAX_AREA_LIGHTS: u32 = 4096;

/// Grid expansion settings for an area light.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AreaLight {
    pub count: u32,
    pub spread: f32,
}

/// A light in a scene file, optionally expanded into an area light.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LightDescription {
    #[serde(flatten)]
    pub light: Light,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<AreaLight>,
}

impl LightDescription {
    /// The point lights this description stands for.
    pub fn expand(&self) -> SceneFileResult<Vec<Light>> {
        match self.area {
            Some(area) if area.count > MAX_AREA_LIGHTS => Err(SceneFileError::AreaLightTooLarge {
                count: area.count,
                max: MAX_AREA_LIGHTS,
            }),
            Some(area) => Ok(self.light.area(area.count, area.spread)),
            None => Ok(vec![self.light]),
        }
    }
}

/// A complete scene file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    pub name: String,

    #[serde(default)]
    pub materials: BTreeMap<String, Material>,

    #[serde(default)]
    pub bodies: Vec<BodyDescription>,

    #[serde(default)]
    pub lights: Vec<LightDescription>,
}

impl SceneDescription {
    /// Parse a scene from JSON text.
    pub fn from_json(json: &str) -> SceneFileResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a scene file from disk.
    pub fn load(path: impl AsRef<Path>) -> SceneFileResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let desc = Self::from_json(&text)?;
        log::info!(
            "Loaded scene {:?} from {}: {} bodies, {} lights",
            desc.name,
            path.display(),
            desc.bodies.len(),
            desc.lights.len()
        );
        Ok(desc)
    }

    /// Look up the material for the body at `index`.
    pub fn material_for(&self, index: usize, body: &BodyDescription) -> SceneFileResult<Material> {
        self.materials
            .get(body.material())
            .copied()
            .ok_or_else(|| SceneFileError::UnknownMaterial {
                index,
                material: body.material().to_string(),
            })
    }

    /// All point lights, with area lights expanded.
    pub fn expanded_lights(&self) -> SceneFileResult<Vec<Light>> {
        let mut lights = Vec::new();
        for light in &self.lights {
            lights.extend(light.expand()?);
        }
        Ok(lights)
    }
}
