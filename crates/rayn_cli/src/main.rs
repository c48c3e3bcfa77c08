use std::path::Path;
use std::sync::atomic::{AtomicU32, Ordering};

use anyhow::{Context, Result};
use clap::Parser;
use rayn_core::{save, Camera, ImageFormat, Resolution, SceneDescription};
use rayn_renderer::{render, AntiAliasing, RenderConfig, Scene, SceneRegistry, Shader};

mod cli;
mod scenes;

use cli::Args;

/// Logs progress at debug level each time another tenth of the rows starts.
struct Progress {
    reported: AtomicU32,
}

impl Progress {
    fn new() -> Self {
        Self {
            reported: AtomicU32::new(0),
        }
    }

    fn on_row_start(&self, _y: u32, height: u32) {
        // Rows start out of order under rayon, so count them instead of using y
        let started = self.reported.fetch_add(1, Ordering::Relaxed) + 1;
        let tenth = (height / 10).max(1);
        if started % tenth == 0 || started == height {
            log::debug!("{:>3}% ({}/{} rows)", started * 100 / height, started, height);
        }
    }
}

fn render_to_file(
    label: &str,
    camera: &Camera,
    scene: &Scene,
    resolution: Resolution,
    config: &RenderConfig,
    format: ImageFormat,
    path: &Path,
) -> Result<()> {
    log::debug!("[{}]", label);
    let progress = Progress::new();
    let hook = |y: u32, height: u32| progress.on_row_start(y, height);

    let framebuffer = render(camera, scene, resolution, config, Some(&hook))
        .with_context(|| format!("Failed to render {}", label))?;
    save(&framebuffer, format, path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    log::info!("Wrote {}", path.display());
    Ok(())
}

fn list(registry: &SceneRegistry) {
    println!("Scenes:");
    for name in registry.names() {
        println!("  {}", name);
    }
    println!("Shaders:");
    for shader in Shader::ALL {
        println!("  {}", shader);
    }
    println!("Anti-aliasing:");
    for aa in AntiAliasing::ALL {
        println!("  {} ({} spp)", aa, aa.samples_per_pixel());
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level())
        .init();

    let registry = scenes::registry();
    if args.list {
        list(&registry);
        return Ok(());
    }

    let settings = args.settings()?;

    let loaded;
    let scene = match &settings.scene_file {
        Some(path) => {
            let desc = SceneDescription::load(path)
                .with_context(|| format!("Failed to load scene file {}", path.display()))?;
            loaded = Scene::from_description(&desc)
                .with_context(|| format!("Invalid scene file {}", path.display()))?;
            &loaded
        }
        None => registry.get(&settings.scene)?,
    };

    log::debug!("Running ray tracer in debug mode...");
    log::debug!("[Configuration]");
    log::debug!(" FORMAT:   {}", settings.format.extension());
    log::debug!(" OUTPUT:   {}", settings.out.display());
    log::debug!(" SHADER:   {}", settings.render.shader);
    log::debug!(" SCENE:    {}", scene.name());
    log::debug!(" AA:       {}", settings.render.aa);
    log::debug!(" FOV:      {}", settings.fov);
    log::debug!(" POSITION: {}", settings.view.from);
    log::debug!(" TOWARDS:  {}", settings.view.to);
    log::debug!(" VUP:      {}", settings.view.up);
    log::debug!(" RES:      {}x{}", settings.resolution.width, settings.resolution.height);
    log::debug!(" SEED:     {}", settings.render.seed);

    let camera = settings.view.camera(settings.fov, settings.resolution.aspect());

    if settings.preview {
        render_to_file(
            "Previewing",
            &camera,
            scene,
            settings.preview_resolution(),
            &settings.preview_config(),
            settings.format,
            &settings.preview_path(),
        )?;
    }

    render_to_file(
        "Rendering",
        &camera,
        scene,
        settings.resolution,
        &settings.render,
        settings.format,
        &settings.out,
    )?;

    Ok(())
}
