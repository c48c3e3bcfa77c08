//! Renderable scenes and the named scene registry.

use rayn_core::description::SceneFileResult;
use rayn_core::{BodyDescription, ConfigError, ConfigResult, Light, SceneDescription};
use rayn_math::{Interval, Ray};

use crate::intersection::{Intersect, Intersection};
use crate::{Aggregate, Body, Plane, Quad, Sphere, Triangle};

/// A named world of bodies and lights.
///
/// The aggregate over all bodies is built once here, so shaders query a
/// single body for the nearest hit.
#[derive(Debug, Clone)]
pub struct Scene {
    name: String,
    lights: Vec<Light>,
    world: Aggregate,
}

impl Scene {
    pub fn new(name: impl Into<String>, bodies: Vec<Body>, lights: Vec<Light>) -> Self {
        Self {
            name: name.into(),
            lights,
            world: Aggregate::new(bodies),
        }
    }

    /// Build a scene from a parsed scene file, resolving material names.
    pub fn from_description(desc: &SceneDescription) -> SceneFileResult<Self> {
        let bodies = desc
            .bodies
            .iter()
            .enumerate()
            .map(|(index, body)| -> SceneFileResult<Body> {
                let material = desc.material_for(index, body)?;
                Ok(match *body {
                    BodyDescription::Sphere { center, radius, .. } => {
                        Sphere::new(center, radius, material).into()
                    }
                    BodyDescription::Plane { point, normal, .. } => {
                        Plane::new(point, normal, material).into()
                    }
                    BodyDescription::Triangle { v1, v2, v3, .. } => {
                        Triangle::new(v1, v2, v3, material).into()
                    }
                    BodyDescription::Quad { v1, v2, v3, .. } => Quad::new(v1, v2, v3, material).into(),
                })
            })
            .collect::<SceneFileResult<Vec<_>>>()?;

        let scene = Self::new(desc.name.clone(), bodies, desc.expanded_lights()?);
        log::debug!(
            "Built scene '{}': {} bodies, {} lights",
            scene.name,
            scene.bodies().len(),
            scene.lights.len()
        );
        Ok(scene)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bodies(&self) -> &[Body] {
        self.world.children()
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// The aggregate over every body in the scene.
    pub fn world(&self) -> &Aggregate {
        &self.world
    }
}

impl Intersect for Scene {
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<Intersection<'_>> {
        self.world.intersect(ray, ray_t)
    }
}

/// Fixed set of scenes, looked up by name.
///
/// Built once at startup and passed by reference to whoever needs a lookup.
#[derive(Debug, Clone, Default)]
pub struct SceneRegistry {
    scenes: Vec<Scene>,
}

impl SceneRegistry {
    pub fn new(scenes: Vec<Scene>) -> Self {
        Self { scenes }
    }

    /// Look up a scene by name.
    pub fn get(&self, name: &str) -> ConfigResult<&Scene> {
        self.scenes
            .iter()
            .find(|scene| scene.name == name)
            .ok_or_else(|| ConfigError::SceneNotFound(name.to_string()))
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.scenes.iter().map(Scene::name)
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayn_core::Material;
    use rayn_math::{Vec3, EPSILON};

    fn two_sphere_scene() -> Scene {
        Scene::new(
            "two",
            vec![
                Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, Material::default()).into(),
                Sphere::new(Vec3::new(0.0, -100.5, -1.0), 100.0, Material::default()).into(),
            ],
            vec![Light::grey(Vec3::new(0.0, 2.0, 0.0), 0.5)],
        )
    }

    #[test]
    fn test_scene_world_covers_bodies() {
        let scene = two_sphere_scene();
        assert_eq!(scene.bodies().len(), 2);
        assert_eq!(scene.world().len(), 2);
        assert_eq!(scene.lights().len(), 1);

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let hit = scene.intersect(&ray, Interval::from_min(EPSILON)).unwrap();
        assert!((hit.t - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_registry_lookup() {
        let registry = SceneRegistry::new(vec![two_sphere_scene(), Scene::new("empty", vec![], vec![])]);

        assert_eq!(registry.get("empty").unwrap().name(), "empty");
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["two", "empty"]);
        assert_eq!(
            registry.get("missing").unwrap_err(),
            ConfigError::SceneNotFound("missing".to_string())
        );
    }

    #[test]
    fn test_scene_from_description() {
        let json = r#"{
            "name": "file",
            "materials": {
                "red": {
                    "ambient": [0.2, 0.0, 0.0],
                    "diffuse": [0.8, 0.0, 0.0],
                    "specular": [0.1, 0.1, 0.1],
                    "reflective": [0.0, 0.0, 0.0]
                }
            },
            "bodies": [
                { "type": "sphere", "center": [0, 0, -1], "radius": 0.5, "material": "red" },
                { "type": "quad", "v1": [0, 0, -2], "v2": [1, 0, -2], "v3": [0, 1, -2], "material": "red" }
            ],
            "lights": [
                { "position": [0, 2, 0], "intensity": [0.8, 0.8, 0.8], "area": { "count": 4, "spread": 0.5 } }
            ]
        }"#;
        let desc = SceneDescription::from_json(json).unwrap();
        let scene = Scene::from_description(&desc).unwrap();

        assert_eq!(scene.name(), "file");
        assert_eq!(scene.bodies()[0].kind(), "sphere");
        assert_eq!(scene.bodies()[1].kind(), "quad");
        assert_eq!(scene.lights().len(), 4);
    }

    #[test]
    fn test_scene_from_description_unknown_material() {
        let json = r#"{
            "name": "broken",
            "materials": {},
            "bodies": [ { "type": "sphere", "center": [0, 0, -1], "radius": 0.5, "material": "nope" } ],
            "lights": []
        }"#;
        let desc = SceneDescription::from_json(json).unwrap();
        assert!(Scene::from_description(&desc).is_err());
    }
}
