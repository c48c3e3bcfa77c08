//! Intersection record and the `Intersect` trait shared by all bodies.

use rayn_core::Material;
use rayn_math::{Interval, Ray, Vec3};

/// Record of where a ray first meets a surface.
#[derive(Debug, Clone, Copy)]
pub struct Intersection<'a> {
    /// Ray parameter of the hit (a distance, since rays are unit length)
    pub t: f32,
    /// World-space hit point
    pub point: Vec3,
    /// Unit surface normal (not flipped toward the ray)
    pub normal: Vec3,
    /// Material of the surface that was hit
    pub material: &'a Material,
}

impl<'a> Intersection<'a> {
    /// Create a new intersection, normalizing `normal`.
    pub fn new(t: f32, point: Vec3, normal: Vec3, material: &'a Material) -> Self {
        Self {
            t,
            point,
            normal: normal.normalize_or_zero(),
            material,
        }
    }
}

/// Anything a ray can hit.
pub trait Intersect: Send + Sync {
    /// Find the nearest hit with `t` strictly inside `ray_t`.
    ///
    /// A miss is `None`, never an error.
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<Intersection<'_>>;
}
