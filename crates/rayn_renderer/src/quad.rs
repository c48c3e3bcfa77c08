//! Parallelogram primitive.

use rayn_core::Material;
use rayn_math::{Interval, Ray, Vec3};

use crate::intersection::{Intersect, Intersection};
use crate::plane::plane_t;

/// A parallelogram spanned by three corners: `v1`, and its neighbours `v2`
/// and `v3`. The fourth corner is implicitly `v2 + v3 - v1`.
///
/// Unlike [`Triangle`](crate::Triangle), hits on the boundary count.
#[derive(Debug, Clone, PartialEq)]
pub struct Quad {
    v1: Vec3,
    /// v2 - v1
    s1: Vec3,
    /// v3 - v1
    s2: Vec3,
    /// -(s1 x s2), unnormalized
    normal: Vec3,
    sqrs1: f32,
    sqrs2: f32,
    material: Material,
}

impl Quad {
    /// Create a new quad from three corners.
    pub fn new(v1: Vec3, v2: Vec3, v3: Vec3, material: Material) -> Self {
        let s1 = v2 - v1;
        let s2 = v3 - v1;
        Self {
            v1,
            s1,
            s2,
            normal: -s1.cross(s2),
            sqrs1: s1.length_squared(),
            sqrs2: s2.length_squared(),
            material,
        }
    }
}

impl Intersect for Quad {
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<Intersection<'_>> {
        let t = plane_t(ray, self.v1, self.normal)?;
        if !ray_t.surrounds(t) {
            return None;
        }

        // Project the hit onto both edges
        let point = ray.at(t);
        let s3 = point - self.v1;
        let u = s3.dot(self.s1);
        let v = s3.dot(self.s2);

        let inside = (0.0..=self.sqrs1).contains(&u) && (0.0..=self.sqrs2).contains(&v);
        if !inside {
            return None;
        }

        Some(Intersection::new(t, point, self.normal, &self.material))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayn_math::EPSILON;

    // Unit square in the z = -1 plane; a ray from (x, y, 0) along -Z
    // projects to u = x, v = y.
    fn square() -> Quad {
        Quad::new(
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(1.0, 0.0, -1.0),
            Vec3::new(0.0, 1.0, -1.0),
            Material::default(),
        )
    }

    fn ray_at(x: f32, y: f32) -> Ray {
        Ray::new(Vec3::new(x, y, 0.0), Vec3::new(0.0, 0.0, -1.0))
    }

    #[test]
    fn test_quad_hit() {
        let quad = square();
        let hit = quad.intersect(&ray_at(0.75, 0.75), Interval::from_min(EPSILON)).unwrap();

        assert!((hit.t - 1.0).abs() < 1e-6);
        // -(s1 x s2) = -Z
        assert_eq!(hit.normal, -Vec3::Z);
    }

    #[test]
    fn test_quad_boundary_is_hit() {
        let interval = Interval::from_min(EPSILON);
        // u == 0
        assert!(square().intersect(&ray_at(0.0, 0.5), interval).is_some());
        // u == sqrs1
        assert!(square().intersect(&ray_at(1.0, 0.5), interval).is_some());
        // corner
        assert!(square().intersect(&ray_at(0.0, 0.0), interval).is_some());
    }

    #[test]
    fn test_quad_outside_is_miss() {
        let interval = Interval::from_min(EPSILON);
        assert!(square().intersect(&ray_at(1.01, 0.5), interval).is_none());
        assert!(square().intersect(&ray_at(0.5, -0.01), interval).is_none());
        assert!(square().intersect(&ray_at(0.5, 1.5), interval).is_none());
    }

    #[test]
    fn test_quad_parallel_is_miss() {
        let ray = Ray::new(Vec3::new(-1.0, 0.5, -1.0), Vec3::X);
        assert!(square().intersect(&ray, Interval::from_min(EPSILON)).is_none());
    }

    #[test]
    fn test_quad_scaled_edges() {
        let quad = Quad::new(
            Vec3::new(-1.0, -1.0, -2.0),
            Vec3::new(1.0, -1.0, -2.0),
            Vec3::new(-1.0, 3.0, -2.0),
            Material::default(),
        );
        let interval = Interval::from_min(EPSILON);
        assert!(quad.intersect(&ray_at(0.9, 2.9), interval).is_some());
        assert!(quad.intersect(&ray_at(1.1, 0.0), interval).is_none());
    }
}
