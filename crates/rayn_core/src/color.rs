//! 8-bit output color.

use rayn_math::Vec3;

/// Gamma applied when converting linear radiance to 8-bit channels.
pub const GAMMA: f32 = 1.0 / 2.0;

/// Scale mapping the gamma-corrected `[0, 1]` range onto `0..=255`.
const RANGE: f32 = 255.99;

/// Final pixel color, one byte per channel.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels in BMP (little-endian BGR) order.
    pub fn bgr(&self) -> [u8; 3] {
        [self.b, self.g, self.r]
    }
}

/// Convert one linear channel to a gamma-corrected byte.
///
/// Values are clamped to `[0, 1]` first; NaN maps to 0.
#[inline]
pub fn convert(f: f32) -> u8 {
    let f = if f.is_nan() { 0.0 } else { f.clamp(0.0, 1.0) };
    (RANGE * f.powf(GAMMA)) as u8
}

impl From<Vec3> for Color {
    fn from(v: Vec3) -> Self {
        Color::new(convert(v.x), convert(v.y), convert(v.z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_bounds() {
        assert_eq!(convert(0.0), 0);
        assert_eq!(convert(1.0), 255);
        assert_eq!(convert(0.25), 127);
    }

    #[test]
    fn test_convert_clamps() {
        assert_eq!(convert(-3.0), 0);
        assert_eq!(convert(42.0), 255);
        assert_eq!(convert(f32::INFINITY), 255);
        assert_eq!(convert(f32::NAN), 0);
    }

    #[test]
    fn test_from_vec3() {
        let color = Color::from(Vec3::new(1.0, 0.0, 0.25));
        assert_eq!(color, Color::new(255, 0, 127));
    }

    #[test]
    fn test_bgr() {
        assert_eq!(Color::new(1, 2, 3).bgr(), [3, 2, 1]);
    }
}
