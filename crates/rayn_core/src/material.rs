//! Surface reflectance coefficients.

use rayn_math::Vec3;
use serde::{Deserialize, Serialize};

/// Scene-wide ambient light level multiplied into every material's
/// ambient coefficient.
pub const AMBIENT: f32 = 0.1;

/// Per-surface reflectance model shared by every shader.
///
/// All coefficient vectors are linear RGB and expected to be non-negative.
/// Materials are small `Copy` values, so many bodies can carry the same one.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Ambient coefficient (scaled by [`AMBIENT`])
    pub ambient: Vec3,

    /// Lambertian diffuse coefficient
    pub diffuse: Vec3,

    /// Specular highlight coefficient
    pub specular: Vec3,

    /// Mirror reflection coefficient
    pub reflective: Vec3,

    /// Specular exponent (Blinn-Phong)
    #[serde(default)]
    pub specular_power: f32,

    /// Roughness applied to reflected directions (0 = perfect mirror)
    #[serde(default)]
    pub fuzz: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self::lambertian(Vec3::splat(0.5))
    }
}

impl Material {
    /// Create a material from all of its coefficients.
    pub fn new(
        ambient: Vec3,
        diffuse: Vec3,
        specular: Vec3,
        reflective: Vec3,
        specular_power: f32,
        fuzz: f32,
    ) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            reflective,
            specular_power,
            fuzz,
        }
    }

    /// A matte surface that scatters light diffusely.
    pub fn lambertian(albedo: Vec3) -> Self {
        Self::new(albedo / 4.0, albedo, Vec3::splat(0.1), Vec3::ZERO, 2.0, 0.2)
    }

    /// A metallic surface that reflects, blurred by `fuzz`.
    pub fn metal(albedo: Vec3, fuzz: f32) -> Self {
        Self::new(albedo / 4.0, Vec3::ZERO, Vec3::ZERO, albedo, 0.0, fuzz)
    }

    /// Whether the diffuse coefficient is large enough to be worth sampling.
    pub fn is_diffuse(&self) -> bool {
        self.diffuse.length() > rayn_math::EPSILON
    }

    /// Whether the reflective coefficient is large enough to be worth sampling.
    pub fn is_reflective(&self) -> bool {
        self.reflective.length() > rayn_math::EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lambertian() {
        let mat = Material::lambertian(Vec3::new(0.8, 0.4, 0.0));
        assert_eq!(mat.ambient, Vec3::new(0.2, 0.1, 0.0));
        assert_eq!(mat.diffuse, Vec3::new(0.8, 0.4, 0.0));
        assert!(mat.is_diffuse());
        assert!(!mat.is_reflective());
    }

    #[test]
    fn test_metal() {
        let mat = Material::metal(Vec3::splat(0.8), 0.3);
        assert_eq!(mat.diffuse, Vec3::ZERO);
        assert_eq!(mat.reflective, Vec3::splat(0.8));
        assert_eq!(mat.fuzz, 0.3);
        assert!(!mat.is_diffuse());
        assert!(mat.is_reflective());
    }

    #[test]
    fn test_material_json() {
        let json = r#"{
            "ambient": [0.1, 0.1, 0.1],
            "diffuse": [0.3, 0.3, 0.3],
            "specular": [0.9, 0.9, 0.9],
            "reflective": [0.0, 0.0, 0.0],
            "specular_power": 35.0
        }"#;
        let mat: Material = serde_json::from_str(json).unwrap();
        assert_eq!(mat.specular_power, 35.0);
        assert_eq!(mat.fuzz, 0.0);
        assert_eq!(mat.specular, Vec3::splat(0.9));
    }
}
