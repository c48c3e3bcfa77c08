//! Point lights.

use rayn_math::Vec3;
use serde::{Deserialize, Serialize};

/// A point light with an RGB intensity.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub position: Vec3,
    pub intensity: Vec3,
}

impl Light {
    /// Create a new light.
    pub fn new(position: Vec3, intensity: Vec3) -> Self {
        Self {
            position,
            intensity,
        }
    }

    /// Create a white light with the same intensity on every channel.
    pub fn grey(position: Vec3, intensity: f32) -> Self {
        Self::new(position, Vec3::splat(intensity))
    }

    /// Approximate an area light by a square grid of dimmer point lights.
    ///
    /// The grid has `floor(sqrt(count))` lights per side, spaced
    /// `2 * spread / side` apart along X and Z starting at this light's
    /// position. The total intensity is split evenly across the grid.
    pub fn area(&self, count: u32, spread: f32) -> Vec<Light> {
        let side = (f64::from(count)).sqrt() as usize;
        if side == 0 {
            return Vec::new();
        }

        let step = 2.0 * spread / side as f32;
        let intensity = self.intensity / (side * side) as f32;

        let mut lights = Vec::with_capacity(side * side);
        for ix in 0..side {
            for iz in 0..side {
                let position = Vec3::new(
                    self.position.x + ix as f32 * step,
                    self.position.y,
                    self.position.z + iz as f32 * step,
                );
                lights.push(Light::new(position, intensity));
            }
        }
        lights
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grey_light() {
        let light = Light::grey(Vec3::Y, 0.2);
        assert_eq!(light.intensity, Vec3::splat(0.2));
    }

    #[test]
    fn test_area_grid() {
        let light = Light::new(Vec3::new(0.0, 0.4, -0.62), Vec3::new(0.32, 0.64, 0.16));
        let lights = light.area(64, 0.02);

        assert_eq!(lights.len(), 64);

        // Energy is conserved across the grid
        let total: Vec3 = lights.iter().map(|l| l.intensity).sum();
        assert!((total - light.intensity).length() < 1e-5);

        // All lights share the base light's height
        assert!(lights.iter().all(|l| l.position.y == 0.4));

        // Grid starts at the base position and steps by 2 * spread / 8
        assert_eq!(lights[0].position, light.position);
        assert!((lights[1].position.z - (-0.62 + 0.005)).abs() < 1e-6);
        assert!((lights[8].position.x - 0.005).abs() < 1e-6);
    }

    #[test]
    fn test_area_non_square_count() {
        let lights = Light::grey(Vec3::ZERO, 1.0).area(10, 1.0);
        // floor(sqrt(10)) = 3 per side
        assert_eq!(lights.len(), 9);
    }

    #[test]
    fn test_area_zero_count() {
        assert!(Light::grey(Vec3::ZERO, 1.0).area(0, 1.0).is_empty());
    }
}
