//! Rayn Renderer - CPU ray tracing.
//!
//! Geometry, shading, anti-aliasing and the parallel render driver:
//!
//! - **Bodies**: `Sphere`, `Plane`, `Triangle`, `Quad` and `Aggregate`,
//!   unified by the closed `Body` enum and the `Intersect` trait
//! - **Scenes**: `Scene` owns bodies and lights, `SceneRegistry` names them
//! - **Shaders**: `normal`, `scatter` (path tracing) and `phong`
//! - **Anti-aliasing**: `none`, `centered` and `4x` to `64x` SSAA
//!
//! # Example
//!
//! ```ignore
//! use rayn_renderer::{render, RenderConfig, Scene, Shader};
//!
//! let config = RenderConfig { shader: Shader::Phong, ..RenderConfig::default() };
//! let framebuffer = render(&camera, &scene, resolution, &config, None)?;
//! ```

pub mod aa;
mod body;
mod intersection;
mod plane;
mod quad;
mod renderer;
pub mod sampling;
mod scene;
pub mod shader;
mod sphere;
mod triangle;

pub use aa::{AntiAliasing, ProgressFn, Sampler};
pub use body::{Aggregate, Body};
pub use intersection::{Intersect, Intersection};
pub use plane::Plane;
pub use quad::Quad;
pub use renderer::{render, render_row, RenderConfig, RenderError, RenderResult};
pub use scene::{Scene, SceneRegistry};
pub use shader::{background, Shader, MAX_DEPTH};
pub use sphere::Sphere;
pub use triangle::Triangle;
