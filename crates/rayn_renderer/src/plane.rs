//! Infinite plane primitive.

use rayn_core::Material;
use rayn_math::{Interval, Ray, Vec3, PARALLEL_EPSILON};

use crate::intersection::{Intersect, Intersection};

/// An infinite plane through `point` with a unit `normal`.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    point: Vec3,
    normal: Vec3,
    material: Material,
}

impl Plane {
    /// Create a new plane. The normal is normalized here.
    pub fn new(point: Vec3, normal: Vec3, material: Material) -> Self {
        Self {
            point,
            normal: normal.normalize_or_zero(),
            material,
        }
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}

/// Ray parameter where `ray` meets the plane through `point` with `normal`.
///
/// Returns `None` when the ray runs parallel to the plane, so a zero
/// denominator never turns into an infinite or NaN `t`.
#[inline]
pub(crate) fn plane_t(ray: &Ray, point: Vec3, normal: Vec3) -> Option<f32> {
    let denom = normal.dot(ray.direction());
    if denom.abs() < PARALLEL_EPSILON {
        return None;
    }
    Some((point - ray.origin()).dot(normal) / denom)
}

impl Intersect for Plane {
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<Intersection<'_>> {
        let t = plane_t(ray, self.point, self.normal)?;
        if !ray_t.surrounds(t) {
            return None;
        }
        Some(Intersection::new(t, ray.at(t), self.normal, &self.material))
    }
}
