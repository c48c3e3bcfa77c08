//! Parallel render driver.
//!
//! Scanlines are rendered in parallel with rayon. Every row draws its
//! random numbers from its own seeded stream, so the image is a pure
//! function of the inputs and the seed, whatever the thread count.

use std::time::Instant;

use rayn_core::{Camera, Color, Framebuffer, Resolution};
use rayon::prelude::*;
use thiserror::Error;

use crate::aa::{AntiAliasing, ProgressFn, Sampler};
use crate::sampling::row_rng;
use crate::shader::Shader;
use crate::Scene;

/// Errors that can occur while rendering.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to build render thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type RenderResult<T> = Result<T, RenderError>;

/// Render configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Shading strategy
    pub shader: Shader,
    /// Anti-aliasing strategy
    pub aa: AntiAliasing,
    /// Seed for the Monte-Carlo shaders
    pub seed: u64,
    /// Fixed worker count, or rayon's global pool when `None`
    pub threads: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            shader: Shader::Normal,
            aa: AntiAliasing::None,
            seed: 0,
            threads: None,
        }
    }
}

/// Render `scene` through `camera` into a new framebuffer.
pub fn render(
    camera: &Camera,
    scene: &Scene,
    resolution: Resolution,
    config: &RenderConfig,
    progress: Option<ProgressFn<'_>>,
) -> RenderResult<Framebuffer> {
    let mut framebuffer = Framebuffer::new(resolution.width, resolution.height);
    if resolution.width == 0 || resolution.height == 0 {
        log::warn!("Nothing to render at {}x{}", resolution.width, resolution.height);
        return Ok(framebuffer);
    }

    log::info!(
        "Rendering '{}' at {}x{} with {} shader, {} AA ({} spp)",
        scene.name(),
        resolution.width,
        resolution.height,
        config.shader,
        config.aa,
        config.aa.samples_per_pixel()
    );
    let start = Instant::now();

    let mut sampler = config.aa.sampler(camera, scene, config.shader);
    if let Some(progress) = progress {
        sampler = sampler.with_progress(progress);
    }

    let width = resolution.width as usize;
    let seed = config.seed;
    let fill = |pixels: &mut [Color]| {
        pixels
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| render_row(&sampler, y as u32, resolution, seed, row));
    };

    match config.threads {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;
            log::debug!("Using {} render threads", pool.current_num_threads());
            pool.install(|| fill(framebuffer.pixels_mut()));
        }
        None => fill(framebuffer.pixels_mut()),
    }

    log::info!("Render complete in {:.2?}", start.elapsed());
    Ok(framebuffer)
}

/// Color one scanline. `row` holds the `width` pixels of row `y`.
pub fn render_row(sampler: &Sampler<'_>, y: u32, resolution: Resolution, seed: u64, row: &mut [Color]) {
    let mut rng = row_rng(seed, y);
    for (x, pixel) in row.iter_mut().enumerate() {
        *pixel = sampler.sample(x as u32, y, resolution, &mut rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Plane, Sphere};
    use rayn_core::{CameraView, Light, Material};
    use rayn_math::Vec3;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;

    fn scene() -> Scene {
        Scene::new(
            "test",
            vec![
                Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, Material::lambertian(Vec3::new(0.7, 0.3, 0.3))).into(),
                Sphere::new(Vec3::new(1.0, 0.0, -1.0), 0.5, Material::metal(Vec3::splat(0.8), 0.3)).into(),
                Plane::new(Vec3::new(0.0, -0.5, 0.0), Vec3::Y, Material::lambertian(Vec3::splat(0.5))).into(),
            ],
            vec![Light::grey(Vec3::new(0.0, 2.0, 0.0), 0.8)],
        )
    }

    fn camera(resolution: Resolution) -> Camera {
        CameraView::default().camera(90.0, resolution.aspect())
    }

    #[test]
    fn test_render_dimensions() {
        let resolution = Resolution::new(16, 8);
        let fb = render(&camera(resolution), &scene(), resolution, &RenderConfig::default(), None).unwrap();

        assert_eq!(fb.width(), 16);
        assert_eq!(fb.height(), 8);
        assert_eq!(fb.pixels().len(), 16 * 8);
    }

    #[test]
    fn test_render_empty_resolution() {
        let resolution = Resolution::new(0, 8);
        let fb = render(&camera(Resolution::new(1, 1)), &scene(), resolution, &RenderConfig::default(), None).unwrap();
        assert!(fb.pixels().is_empty());
    }

    #[test]
    fn test_center_pixel_sees_sphere() {
        let resolution = Resolution::new(20, 10);
        let config = RenderConfig {
            aa: AntiAliasing::Centered,
            ..RenderConfig::default()
        };
        let fb = render(&camera(resolution), &scene(), resolution, &config, None).unwrap();

        // Normal pointing at the camera: 0.5 * (n + 1) has a bright blue channel
        let center = fb.get(10, 5);
        assert!(center.b > 240);
        assert!(center.r > 150 && center.r < 220);
    }

    #[test]
    fn test_ssaa_render_is_byte_identical() {
        let resolution = Resolution::new(12, 6);
        let config = RenderConfig {
            aa: AntiAliasing::Ssaa(2),
            ..RenderConfig::default()
        };
        let a = render(&camera(resolution), &scene(), resolution, &config, None).unwrap();
        let b = render(&camera(resolution), &scene(), resolution, &config, None).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_thread_count_does_not_change_image() {
        let resolution = Resolution::new(16, 8);
        for shader in [Shader::Scatter, Shader::Phong] {
            let single = RenderConfig {
                shader,
                seed: 42,
                threads: Some(1),
                ..RenderConfig::default()
            };
            let many = RenderConfig {
                threads: Some(4),
                ..single
            };

            let a = render(&camera(resolution), &scene(), resolution, &single, None).unwrap();
            let b = render(&camera(resolution), &scene(), resolution, &many, None).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_progress_once_per_row() {
        let resolution = Resolution::new(8, 6);
        let calls = AtomicU32::new(0);
        let rows = Mutex::new(Vec::new());
        let progress = |y: u32, height: u32| {
            assert_eq!(height, 6);
            calls.fetch_add(1, Ordering::SeqCst);
            if let Ok(mut rows) = rows.lock() {
                rows.push(y);
            }
        };

        render(&camera(resolution), &scene(), resolution, &RenderConfig::default(), Some(&progress)).unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 6);
        let mut rows = rows.into_inner().unwrap();
        rows.sort_unstable();
        assert_eq!(rows, vec![0, 1, 2, 3, 4, 5]);
    }
}
