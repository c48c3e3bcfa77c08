//! Rayn Core - renderer-agnostic data model for the Rayn ray tracer.
//!
//! This crate provides:
//!
//! - **Surface and light types**: `Material`, `Light`
//! - **Viewing**: `CameraView`, `Camera`, `Resolution`
//! - **Output**: `Color`, `Framebuffer`, PPM/BMP encoding
//! - **Scene descriptions**: JSON scene files via serde
//!
//! # Example
//!
//! ```ignore
//! use rayn_core::{CameraView, Resolution};
//!
//! let res: Resolution = "800x400".parse()?;
//! let camera = CameraView::default().camera(90.0, res.aspect());
//! ```

pub mod camera;
pub mod color;
pub mod description;
pub mod error;
pub mod framebuffer;
pub mod light;
pub mod material;
pub mod output;

// Re-export commonly used types
pub use camera::{validate_fov, Camera, CameraView, Resolution};
pub use color::Color;
pub use description::{BodyDescription, LightDescription, SceneDescription, SceneFileError};
pub use error::{ConfigError, ConfigResult};
pub use framebuffer::{Framebuffer, RowOrder};
pub use light::Light;
pub use material::{Material, AMBIENT};
pub use output::{parse_ppm, save, write_bmp, write_ppm, ImageFormat, OutputError};
