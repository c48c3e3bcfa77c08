//! Shading strategies.
//!
//! A shader maps a ray, a scene and a recursion depth to linear radiance.
//! Radiance is unclamped except where a term says otherwise; the final
//! [`Color`](rayn_core::Color) conversion clamps and gamma-corrects.

use std::fmt;
use std::str::FromStr;

use rand::RngCore;
use rayn_core::{ConfigError, ConfigResult, AMBIENT};
use rayn_math::{Interval, Ray, Vec3, EPSILON};

use crate::intersection::{Intersect, Intersection};
use crate::sampling::{random_in_unit_sphere, reflect};
use crate::Scene;

/// Deepest bounce the recursive shaders will follow.
pub const MAX_DEPTH: u32 = 16;

/// Depth of a primary camera ray.
pub const INITIAL_DEPTH: u32 = 1;

/// Named shading strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shader {
    /// Surface normal as a color, no lighting
    Normal,
    /// Monte-Carlo path tracing with diffuse and fuzzy mirror bounces
    Scatter,
    /// Ambient, diffuse and specular terms with hard shadows, plus mirror bounces
    Phong,
}

impl Shader {
    /// Every shader, in registration order.
    pub const ALL: [Shader; 3] = [Shader::Normal, Shader::Scatter, Shader::Phong];

    pub fn name(&self) -> &'static str {
        match self {
            Shader::Normal => "normal",
            Shader::Scatter => "scatter",
            Shader::Phong => "phong",
        }
    }

    /// Radiance arriving along `ray`.
    pub fn shade(&self, ray: &Ray, scene: &Scene, depth: u32, rng: &mut dyn RngCore) -> Vec3 {
        match self {
            Shader::Normal => normal(ray, scene),
            Shader::Scatter => scatter(ray, scene, depth, rng),
            Shader::Phong => phong(ray, scene, depth, rng),
        }
    }
}

impl fmt::Display for Shader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shader {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        Shader::ALL
            .into_iter()
            .find(|shader| shader.name() == s)
            .ok_or_else(|| ConfigError::ShaderNotFound(s.to_string()))
    }
}

/// Vertical white to sky-blue gradient seen by rays that hit nothing.
pub fn background(ray: &Ray) -> Vec3 {
    let t = 0.5 * (ray.direction().y + 1.0);
    (1.0 - t) * Vec3::ONE + t * Vec3::new(0.5, 0.7, 1.0)
}

#[inline]
fn nearest<'a>(ray: &Ray, scene: &'a Scene) -> Option<Intersection<'a>> {
    scene.intersect(ray, Interval::from_min(EPSILON))
}

fn normal(ray: &Ray, scene: &Scene) -> Vec3 {
    match nearest(ray, scene) {
        Some(hit) => 0.5 * (hit.normal + Vec3::ONE),
        None => background(ray),
    }
}

fn scatter(ray: &Ray, scene: &Scene, depth: u32, rng: &mut dyn RngCore) -> Vec3 {
    // Past the bounce limit the sky is returned even for rays that would hit
    if depth > MAX_DEPTH {
        return background(ray);
    }
    let Some(hit) = nearest(ray, scene) else {
        return background(ray);
    };

    let material = hit.material;
    // One offset drives both bounces
    let off = random_in_unit_sphere(rng);
    let mut color = Vec3::ZERO;

    if material.is_diffuse() {
        let mut direction = hit.normal + off;
        // Catch degenerate scatter direction
        if direction.length_squared() < 1e-8 {
            direction = hit.normal;
        }
        let bounce = Ray::new(hit.point, direction);
        color += material.diffuse * scatter(&bounce, scene, depth + 1, rng);
    }

    if material.is_reflective() {
        let direction = reflect(ray.direction(), hit.normal) + material.fuzz * off;
        let bounce = Ray::new(hit.point, direction);
        color += material.reflective * scatter(&bounce, scene, depth + 1, rng);
    }

    color
}

fn phong(ray: &Ray, scene: &Scene, depth: u32, rng: &mut dyn RngCore) -> Vec3 {
    // Past the bounce limit the sky is returned even for rays that would hit
    if depth > MAX_DEPTH {
        return background(ray);
    }
    let Some(hit) = nearest(ray, scene) else {
        return background(ray);
    };

    let material = hit.material;
    let fuzzed = (hit.normal + material.fuzz * random_in_unit_sphere(rng)).normalize_or_zero();
    let mut color = AMBIENT * material.ambient;

    for light in scene.lights() {
        let to_light = light.position - hit.point;
        let distance = to_light.length();
        let l = to_light.normalize_or_zero();

        let shadow = Ray::new(hit.point, l);
        if scene.intersect(&shadow, Interval::new(EPSILON, distance)).is_some() {
            continue;
        }

        let diffuse = light.intensity * material.diffuse * fuzzed.dot(l);
        let h = (l - ray.direction()).normalize_or_zero();
        // Clamped to zero so a half vector below the surface adds no highlight
        // and a fractional exponent never sees a negative base
        let highlight = hit.normal.dot(h).max(0.0).powf(material.specular_power);
        let specular = light.intensity * material.specular * highlight;

        color += clamp01(diffuse) + clamp01(specular);
    }

    if material.is_reflective() {
        let bounce = Ray::new(hit.point, reflect(ray.direction(), fuzzed));
        color += material.reflective * phong(&bounce, scene, depth + 1, rng);
    }

    color
}

#[inline]
fn clamp01(v: Vec3) -> Vec3 {
    v.clamp(Vec3::ZERO, Vec3::ONE)
}
