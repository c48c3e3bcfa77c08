// Re-export glam for convenience
pub use glam::*;

// Rayn math types
mod interval;
mod ray;
pub use interval::Interval;
pub use ray::Ray;

/// Minimum hit distance, and the tolerance below which a triangle's
/// determinant counts as degenerate. Keeps secondary rays off the surface
/// they start from.
pub const EPSILON: f32 = 0.001;

/// Denominators of plane and quad intersections smaller than this in
/// magnitude are treated as a ray running parallel to the surface.
pub const PARALLEL_EPSILON: f32 = 1e-8;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
        assert_eq!(a.cross(b), Vec3::new(-3.0, 6.0, -3.0));
    }
}
