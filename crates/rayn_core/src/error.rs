//! Configuration errors.
//!
//! Everything that can go wrong before a render starts: unknown registry
//! names and malformed user input. Geometric misses are never errors.

use thiserror::Error;

/// Errors raised while resolving render configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{0} is not a valid scene name")]
    SceneNotFound(String),

    #[error("{0} is not a valid shader name")]
    ShaderNotFound(String),

    #[error("{0} is not a valid AA algorithm")]
    AntiAliasingNotFound(String),

    #[error("{0} is not a valid fov, expected a value in [0, 180)")]
    InvalidFov(f32),

    #[error("{0} is not a valid resolution, expected WIDTHxHEIGHT")]
    InvalidResolution(String),

    #[error("{0} is not a valid vector, expected x,y,z")]
    InvalidVector(String),

    #[error("{0} is not a valid output format")]
    InvalidFormat(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
