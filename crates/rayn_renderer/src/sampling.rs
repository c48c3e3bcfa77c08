//! Random sampling helpers for the Monte-Carlo shaders.
//!
//! All randomness flows through an explicit `&mut dyn RngCore`, so a render
//! is reproducible from its seed no matter how rows are scheduled.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use rayn_math::Vec3;

/// Uniform float in `[0, 1)`.
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}

/// Random point strictly inside the unit sphere, by rejection sampling.
pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = Vec3::new(
            gen_f32(rng) * 2.0 - 1.0,
            gen_f32(rng) * 2.0 - 1.0,
            gen_f32(rng) * 2.0 - 1.0,
        );
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Random stream for scanline `y` of a render seeded with `seed`.
///
/// Each row owns its stream, which keeps the image independent of the
/// number of worker threads.
pub fn row_rng(seed: u64, y: u32) -> StdRng {
    // splitmix64 increment keeps neighbouring rows well apart
    StdRng::seed_from_u64(seed ^ (u64::from(y) + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gen_f32_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1000 {
            let x = gen_f32(&mut rng);
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_random_in_unit_sphere() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..1000 {
            assert!(random_in_unit_sphere(&mut rng).length_squared() < 1.0);
        }
    }

    #[test]
    fn test_reflect() {
        let v = Vec3::new(1.0, -1.0, 0.0);
        assert_eq!(reflect(v, Vec3::Y), Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_row_rng_is_reproducible() {
        let a: Vec<u32> = (0..4).map(|_| row_rng(9, 3).next_u32()).collect();
        assert!(a.windows(2).all(|w| w[0] == w[1]));

        assert_ne!(row_rng(9, 3).next_u64(), row_rng(9, 4).next_u64());
        assert_ne!(row_rng(9, 3).next_u64(), row_rng(10, 3).next_u64());
    }
}
