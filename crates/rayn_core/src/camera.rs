//! Viewing frustum and image resolution.

use std::str::FromStr;

use rayn_math::{Ray, Vec3};

use crate::{ConfigError, ConfigResult};

/// Where the camera sits and what it looks at.
///
/// Builder for [`Camera`]: the field of view and aspect ratio are supplied
/// when the camera is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraView {
    pub from: Vec3,
    pub to: Vec3,
    pub up: Vec3,
}

impl Default for CameraView {
    fn default() -> Self {
        Self {
            from: Vec3::ZERO,
            to: Vec3::new(0.0, 0.0, -1.0),
            up: Vec3::Y,
        }
    }
}

impl CameraView {
    /// Create a new camera view.
    pub fn new(from: Vec3, to: Vec3, up: Vec3) -> Self {
        Self { from, to, up }
    }

    /// Build a camera with a vertical field of view in degrees.
    pub fn camera(&self, fov: f32, aspect: f32) -> Camera {
        Camera::new(self.from, self.to, self.up, fov, aspect)
    }
}

/// A pinhole camera projecting onto a virtual image plane one unit in
/// front of the eye.
///
/// Screen coordinates `(u, v)` run from `(0, 0)` at the lower left corner
/// of the image plane to `(1, 1)` at the upper right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub origin: Vec3,
    pub lower_left_corner: Vec3,
    pub horizontal: Vec3,
    pub vertical: Vec3,
}

impl Camera {
    /// Build the camera basis from an eye position, look-at target, up
    /// vector, vertical field of view (degrees) and aspect ratio.
    pub fn new(origin: Vec3, to: Vec3, up: Vec3, fov: f32, aspect: f32) -> Self {
        // Image plane size at unit distance
        let height = (fov.to_radians() / 2.0).tan() * 2.0;
        let width = aspect * height;

        // Orthonormal basis
        let w = (origin - to).normalize();
        let u = up.cross(w).normalize();
        let v = w.cross(u).normalize();

        let horizontal = width * u;
        let vertical = height * v;
        let lower_left_corner = origin - horizontal / 2.0 - vertical / 2.0 - w;

        Self {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
        }
    }

    /// The ray through normalized screen coordinates `(u, v)`.
    pub fn ray(&self, u: f32, v: f32) -> Ray {
        let target = self.lower_left_corner + u * self.horizontal + v * self.vertical;
        Ray::new(self.origin, target - self.origin)
    }
}

/// Check that a vertical field of view (degrees) lies in `[0, 180)`.
pub fn validate_fov(fov: f32) -> ConfigResult<f32> {
    if (0.0..180.0).contains(&fov) {
        Ok(fov)
    } else {
        Err(ConfigError::InvalidFov(fov))
    }
}

/// Parse a vector written as `x,y,z`.
pub fn parse_vec3(s: &str) -> ConfigResult<Vec3> {
    let invalid = || ConfigError::InvalidVector(s.to_string());

    let parts = s
        .split(',')
        .map(|part| part.trim().parse::<f32>().map_err(|_| invalid()))
        .collect::<ConfigResult<Vec<f32>>>()?;

    match parts.as_slice() {
        [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
        _ => Err(invalid()),
    }
}

/// Output image size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    /// Create a new resolution.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height.
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// A resolution with the same aspect ratio and the given height.
    pub fn with_height(&self, height: u32) -> Self {
        let width = (self.aspect() * height as f32) as u32;
        Self::new(width.max(1), height)
    }
}

impl FromStr for Resolution {
    type Err = ConfigError;

    /// Parse `WIDTHxHEIGHT`, e.g. `1000x500`.
    fn from_str(s: &str) -> ConfigResult<Self> {
        let invalid = || ConfigError::InvalidResolution(s.to_string());

        let (width, height) = s.trim().split_once(['x', 'X']).ok_or_else(invalid)?;
        let width = width.parse::<u32>().map_err(|_| invalid())?;
        let height = height.parse::<u32>().map_err(|_| invalid())?;

        if width == 0 || height == 0 {
            return Err(invalid());
        }
        Ok(Self::new(width, height))
    }
}
