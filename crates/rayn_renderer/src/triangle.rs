//! Triangle primitive for ray tracing.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use rayn_core::Material;
use rayn_math::{Interval, Ray, Vec3, EPSILON};

use crate::intersection::{Intersect, Intersection};

/// A triangle primitive.
///
/// Hits on the edges or vertices are rejected: the barycentric test is
/// strict.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    v1: Vec3,
    /// v2 - v1
    edge1: Vec3,
    /// v3 - v1
    edge2: Vec3,
    /// edge1 x edge2, unnormalized
    normal: Vec3,
    material: Material,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    pub fn new(v1: Vec3, v2: Vec3, v3: Vec3, material: Material) -> Self {
        let edge1 = v2 - v1;
        let edge2 = v3 - v1;
        Self {
            v1,
            edge1,
            edge2,
            normal: edge1.cross(edge2),
            material,
        }
    }
}

impl Intersect for Triangle {
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<Intersection<'_>> {
        let a = ray.direction().cross(self.edge2);
        let det = self.edge1.dot(a);

        // Ray is parallel to the triangle, or the triangle is degenerate
        if det.abs() <= EPSILON {
            return None;
        }

        let b = ray.origin() - self.v1;
        let u = b.dot(a) / det;
        if !(u > 0.0 && u < 1.0) {
            return None;
        }

        let c = b.cross(self.edge1);
        let v = ray.direction().dot(c) / det;
        if !(v > 0.0 && u + v < 1.0) {
            return None;
        }

        let t = self.edge2.dot(c) / det;
        if !ray_t.surrounds(t) {
            return None;
        }

        Some(Intersection::new(t, ray.at(t), self.normal, &self.material))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Right triangle in the z = -1 plane; a ray from (x, y, 0) along -Z
    // hits it with barycentric coordinates u = x, v = y.
    fn tri() -> Triangle {
        Triangle::new(
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
    fn test_triangle_hit() {
        let triangle = tri();
        let hit = triangle.intersect(&ray_at(0.25, 0.25), Interval::from_min(EPSILON)).unwrap();

        assert!((hit.t - 1.0).abs() < 1e-6);
        assert!((hit.point - Vec3::new(0.25, 0.25, -1.0)).length() < 1e-6);
        // cross(edge1, edge2) = +Z, even though the ray travels along -Z
        assert_eq!(hit.normal, Vec3::Z);
    }

    #[test]
    fn test_triangle_miss() {
        let away = Ray::new(Vec3::new(0.25, 0.25, 0.0), Vec3::Z);
        assert!(tri().intersect(&away, Interval::from_min(EPSILON)).is_none());
        assert!(tri().intersect(&ray_at(0.8, 0.8), Interval::from_min(EPSILON)).is_none());
    }

    #[test]
    fn test_triangle_edges_are_misses() {
        let interval = Interval::from_min(EPSILON);
        // u == 0
        assert!(tri().intersect(&ray_at(0.0, 0.3), interval).is_none());
        // v == 0
        assert!(tri().intersect(&ray_at(0.3, 0.0), interval).is_none());
        // u + v == 1
        assert!(tri().intersect(&ray_at(0.5, 0.5), interval).is_none());
        // vertex
        assert!(tri().intersect(&ray_at(0.0, 0.0), interval).is_none());
    }

    #[test]
    fn test_triangle_parallel_ray() {
        let ray = Ray::new(Vec3::new(-1.0, 0.25, -1.0), Vec3::X);
        assert!(tri().intersect(&ray, Interval::from_min(EPSILON)).is_none());
    }

    #[test]
    fn test_degenerate_triangle() {
        let line = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::new(2.0, 0.0, 0.0), Material::default());
        let ray = Ray::new(Vec3::new(0.5, 0.0, 1.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(line.intersect(&ray, Interval::from_min(EPSILON)).is_none());
    }
}
