//! Anti-aliasing strategies.
//!
//! A strategy decides where inside a pixel the shader is sampled and how
//! the samples are combined into one [`Color`].

use std::fmt;
use std::str::FromStr;

use rand::RngCore;
use rayn_core::{Camera, Color, ConfigError, ConfigResult, Resolution};
use rayn_math::Vec3;

use crate::shader::{Shader, INITIAL_DEPTH};
use crate::Scene;

/// Fixed sub-cell sample positions, as fractions of the cell size.
const SSAA_OFFSETS: [(f32, f32); 4] = [(0.7, 0.1), (0.1, 0.3), (0.9, 0.7), (0.3, 0.9)];

/// Callback invoked with `(y, height)` when a scanline starts.
pub type ProgressFn<'a> = &'a (dyn Fn(u32, u32) + Sync);

/// Named anti-aliasing strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AntiAliasing {
    /// One sample at the lower left corner of the pixel
    None,
    /// One sample at the pixel center
    Centered,
    /// An `n x n` grid of cells with four fixed samples in each
    Ssaa(u32),
}

impl AntiAliasing {
    /// Every strategy, in registration order.
    pub const ALL: [AntiAliasing; 7] = [
        AntiAliasing::None,
        AntiAliasing::Centered,
        AntiAliasing::Ssaa(1),
        AntiAliasing::Ssaa(2),
        AntiAliasing::Ssaa(4),
        AntiAliasing::Ssaa(8),
        AntiAliasing::Ssaa(16),
    ];

    /// Registered name, e.g. `centered` or `16xSSAA`.
    pub fn name(&self) -> String {
        self.to_string()
    }

    /// Number of shader evaluations per pixel.
    pub fn samples_per_pixel(&self) -> u32 {
        match *self {
            AntiAliasing::None | AntiAliasing::Centered => 1,
            AntiAliasing::Ssaa(n) => 4 * n * n,
        }
    }

    /// Bind this strategy to a camera, scene and shader.
    pub fn sampler<'a>(&self, camera: &'a Camera, scene: &'a Scene, shader: Shader) -> Sampler<'a> {
        Sampler {
            aa: *self,
            camera,
            scene,
            shader,
            progress: None,
        }
    }
}

impl fmt::Display for AntiAliasing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AntiAliasing::None => f.write_str("none"),
            AntiAliasing::Centered => f.write_str("centered"),
            AntiAliasing::Ssaa(n) => write!(f, "{}xSSAA", 4 * n),
        }
    }
}

impl FromStr for AntiAliasing {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        AntiAliasing::ALL
            .into_iter()
            .find(|aa| aa.name() == s)
            .ok_or_else(|| ConfigError::AntiAliasingNotFound(s.to_string()))
    }
}

/// An anti-aliasing strategy bound to everything it needs to color a pixel.
#[derive(Clone, Copy)]
pub struct Sampler<'a> {
    aa: AntiAliasing,
    camera: &'a Camera,
    scene: &'a Scene,
    shader: Shader,
    progress: Option<ProgressFn<'a>>,
}

impl<'a> Sampler<'a> {
    /// Report scanline starts to `progress`.
    pub fn with_progress(mut self, progress: ProgressFn<'a>) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Final color of pixel `(x, y)`.
    ///
    /// Column 0 of every row triggers the progress callback.
    pub fn sample(&self, x: u32, y: u32, resolution: Resolution, rng: &mut dyn RngCore) -> Color {
        if x == 0 {
            if let Some(progress) = self.progress {
                progress(y, resolution.height);
            }
        }
        Color::from(self.radiance(x, y, resolution, rng))
    }

    /// Combined linear radiance of pixel `(x, y)`, before color conversion.
    pub fn radiance(&self, x: u32, y: u32, resolution: Resolution, rng: &mut dyn RngCore) -> Vec3 {
        let (x, y) = (x as f32, y as f32);
        let (w, h) = (resolution.width as f32, resolution.height as f32);

        match self.aa {
            AntiAliasing::None => self.shade(x / w, y / h, rng),
            AntiAliasing::Centered => self.shade((x + 0.5) / w, (y + 0.5) / h, rng),
            AntiAliasing::Ssaa(n) => {
                let step = 1.0 / n as f32;
                let k = 1.0 / (n * n) as f32;

                let mut sum = Vec3::ZERO;
                for j in 0..n {
                    let yoff = j as f32 * step;
                    for i in 0..n {
                        let xoff = i as f32 * step;

                        let mut cell = Vec3::ZERO;
                        for (dx, dy) in SSAA_OFFSETS {
                            let u = (x + xoff + dx * step) / w;
                            let v = (y + yoff + dy * step) / h;
                            cell += self.shade(u, v, rng);
                        }
                        sum += cell * 0.25;
                    }
                }
                sum * k
            }
        }
    }

    #[inline]
    fn shade(&self, u: f32, v: f32, rng: &mut dyn RngCore) -> Vec3 {
        let ray = self.camera.ray(u, v);
        self.shader.shade(&ray, self.scene, INITIAL_DEPTH, rng)
    }
}
