use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use rayn_core::camera::parse_vec3;
use rayn_core::{validate_fov, CameraView, ConfigError, ConfigResult, ImageFormat, Resolution};
use rayn_renderer::{AntiAliasing, RenderConfig, Shader};

const BANNER: &str = r"
  __________    _____ _____.___._______
  \______   \  /  _  \\__  |   |\      \
   |       _/ /  /_\  \/   |   |/   |   \
   |    |   \/    |    \____   /    |    \
   |____|_  /\____|__  / ______\____|__  /
          \/         \/\/              \/";

/// Height of the quick preview render, in pixels.
pub const PREVIEW_HEIGHT: u32 = 100;

/// Command line arguments.
///
/// Values are kept as text here and validated by [`Args::settings`], so
/// every bad value is reported as a [`ConfigError`].
#[derive(Parser, Debug)]
#[command(name = "rayn", version, about = "A classic ray tracer", before_help = BANNER)]
pub struct Args {
    /// Output format (bmp or ppm)
    #[arg(short, long, default_value = "bmp")]
    pub format: String,

    /// Output file path [default: render.<format>]
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Select shader (normal, scatter, phong)
    #[arg(short, long, default_value = "normal")]
    pub shader: String,

    /// Select a built-in scene
    #[arg(short = 'S', long, default_value = "scene1")]
    pub scene: String,

    /// Load the scene from a JSON file instead of the built-in registry
    #[arg(long, value_name = "PATH")]
    pub scene_file: Option<PathBuf>,

    /// Select anti-aliasing method (none, centered, 4xSSAA ... 64xSSAA)
    #[arg(short, long, default_value = "none")]
    pub aa: String,

    /// Vertical field of view in degrees, in [0, 180)
    #[arg(short = 'v', long, default_value_t = 90.0)]
    pub fov: f32,

    /// Camera position, look-at target and up vector, each as x,y,z
    #[arg(
        short,
        long,
        num_args = 3,
        value_names = ["FROM", "TO", "UP"],
        allow_hyphen_values = true,
        default_values = ["0,0,0", "0,0,-1", "0,1,0"]
    )]
    pub camera: Vec<String>,

    /// Output resolution as WIDTHxHEIGHT
    #[arg(short, long, default_value = "1000x500")]
    pub resolution: String,

    /// Also write a small preview.<format> rendered without anti-aliasing
    #[arg(short, long)]
    pub preview: bool,

    /// Enable debug messages
    #[arg(short, long)]
    pub debug: bool,

    /// Seed for Monte-Carlo sampling
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Number of render threads [default: one per core]
    #[arg(long)]
    pub threads: Option<usize>,

    /// List the available scenes, shaders and anti-aliasing methods, then exit
    #[arg(long)]
    pub list: bool,
}

/// Validated render settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub format: ImageFormat,
    pub out: PathBuf,
    pub scene: String,
    pub scene_file: Option<PathBuf>,
    pub fov: f32,
    pub view: CameraView,
    pub resolution: Resolution,
    pub preview: bool,
    pub render: RenderConfig,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        if self.debug {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    /// Validate every option.
    pub fn settings(&self) -> ConfigResult<Settings> {
        let format: ImageFormat = self.format.parse()?;
        let out = self
            .out
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("render.{}", format.extension())));

        let view = match self.camera.as_slice() {
            [from, to, up] => CameraView::new(parse_vec3(from)?, parse_vec3(to)?, parse_vec3(up)?),
            _ => return Err(ConfigError::InvalidVector(self.camera.join(" "))),
        };

        Ok(Settings {
            format,
            out,
            scene: self.scene.clone(),
            scene_file: self.scene_file.clone(),
            fov: validate_fov(self.fov)?,
            view,
            resolution: self.resolution.parse()?,
            preview: self.preview,
            render: RenderConfig {
                shader: self.shader.parse::<Shader>()?,
                aa: self.aa.parse::<AntiAliasing>()?,
                seed: self.seed,
                threads: self.threads,
            },
        })
    }
}

impl Settings {
    /// Where the preview image goes.
    pub fn preview_path(&self) -> PathBuf {
        PathBuf::from(format!("preview.{}", self.format.extension()))
    }

    /// Preview resolution: same aspect ratio, fixed height.
    pub fn preview_resolution(&self) -> Resolution {
        self.resolution.with_height(PREVIEW_HEIGHT)
    }

    /// The preview renders with the main shader but no anti-aliasing.
    pub fn preview_config(&self) -> RenderConfig {
        RenderConfig {
            aa: AntiAliasing::None,
            ..self.render
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayn_math::Vec3;

    fn parse(args: &[&str]) -> ConfigResult<Settings> {
        let args = Args::try_parse_from(std::iter::once("rayn").chain(args.iter().copied()))
            .expect("arguments should parse");
        args.settings()
    }

    #[test]
    fn test_defaults() {
        let settings = parse(&[]).unwrap();

        assert_eq!(settings.format, ImageFormat::Bmp);
        assert_eq!(settings.out, PathBuf::from("render.bmp"));
        assert_eq!(settings.scene, "scene1");
        assert_eq!(settings.fov, 90.0);
        assert_eq!(settings.view, CameraView::default());
        assert_eq!(settings.resolution, Resolution::new(1000, 500));
        assert!(!settings.preview);
        assert_eq!(settings.render, RenderConfig::default());
    }

    #[test]
    fn test_full_configuration() {
        let settings = parse(&[
            "-f", "ppm", "-s", "phong", "-S", "triforce", "-a", "16xSSAA", "-v", "60", "-c", "0,1,2", "0,0,-1",
            "0,1,0", "-r", "320x240", "-p", "--seed", "7", "--threads", "2",
        ])
        .unwrap();

        assert_eq!(settings.format, ImageFormat::Ppm);
        assert_eq!(settings.out, PathBuf::from("render.ppm"));
        assert_eq!(settings.scene, "triforce");
        assert_eq!(settings.fov, 60.0);
        assert_eq!(settings.view.from, Vec3::new(0.0, 1.0, 2.0));
        assert_eq!(settings.resolution, Resolution::new(320, 240));
        assert!(settings.preview);
        assert_eq!(settings.render.shader, Shader::Phong);
        assert_eq!(settings.render.aa, AntiAliasing::Ssaa(4));
        assert_eq!(settings.render.seed, 7);
        assert_eq!(settings.render.threads, Some(2));
    }

    #[test]
    fn test_negative_camera_components() {
        let settings = parse(&["-c", "-1,0,0", "0,0,-1", "0,1,0"]).unwrap();
        assert_eq!(settings.view.from, Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_invalid_values_are_config_errors() {
        assert_eq!(parse(&["-f", "png"]), Err(ConfigError::InvalidFormat("png".to_string())));
        assert_eq!(parse(&["-s", "toon"]), Err(ConfigError::ShaderNotFound("toon".to_string())));
        assert_eq!(parse(&["-a", "3xSSAA"]), Err(ConfigError::AntiAliasingNotFound("3xSSAA".to_string())));
        assert_eq!(parse(&["-v", "180"]), Err(ConfigError::InvalidFov(180.0)));
        assert_eq!(parse(&["-r", "big"]), Err(ConfigError::InvalidResolution("big".to_string())));
        assert_eq!(
            parse(&["-c", "0,0", "0,0,-1", "0,1,0"]),
            Err(ConfigError::InvalidVector("0,0".to_string()))
        );
    }

    #[test]
    fn test_preview_settings() {
        let settings = parse(&["-a", "64xSSAA", "-s", "scatter", "-f", "ppm"]).unwrap();

        assert_eq!(settings.preview_path(), PathBuf::from("preview.ppm"));
        assert_eq!(settings.preview_resolution(), Resolution::new(200, 100));

        let preview = settings.preview_config();
        assert_eq!(preview.aa, AntiAliasing::None);
        assert_eq!(preview.shader, Shader::Scatter);
    }

    #[test]
    fn test_log_level() {
        let args = Args::try_parse_from(["rayn", "-d"]).unwrap();
        assert_eq!(args.log_level(), LevelFilter::Debug);
        let args = Args::try_parse_from(["rayn"]).unwrap();
        assert_eq!(args.log_level(), LevelFilter::Info);
    }
}
