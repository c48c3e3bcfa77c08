//! Simple ray tracer example.
//!
//! Renders a few spheres on a floor with the phong shader and saves the
//! result as a PPM.

use rayn_core::{save, CameraView, ImageFormat, Light, Material, Resolution};
use rayn_math::Vec3;
use rayn_renderer::{render, AntiAliasing, Body, Plane, RenderConfig, Scene, Shader, Sphere};

fn main() {
    println!("Rayn - Simple Example");
    println!("=====================");

    let start = std::time::Instant::now();
    let scene = build_scene();
    println!("Scene built in {:?}", start.elapsed());

    let resolution = Resolution::new(800, 400);
    let camera = CameraView::new(Vec3::new(0.0, 0.5, 1.0), Vec3::new(0.0, 0.0, -1.0), Vec3::Y)
        .camera(75.0, resolution.aspect());

    let config = RenderConfig {
        shader: Shader::Phong,
        aa: AntiAliasing::Ssaa(1),
        ..RenderConfig::default()
    };

    println!(
        "Rendering {}x{} @ {} spp...",
        resolution.width,
        resolution.height,
        config.aa.samples_per_pixel()
    );

    let start = std::time::Instant::now();
    let framebuffer = render(&camera, &scene, resolution, &config, None).expect("Render failed");
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    save(&framebuffer, ImageFormat::Ppm, filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn build_scene() -> Scene {
    let bodies: Vec<Body> = vec![
        // Floor
        Plane::new(Vec3::new(0.0, -0.5, 0.0), Vec3::Y, Material::lambertian(Vec3::splat(0.5))).into(),
        // Matte center sphere
        Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, Material::lambertian(Vec3::new(0.7, 0.2, 0.1))).into(),
        // Brushed metal on the left, mirror on the right
        Sphere::new(Vec3::new(-1.0, 0.0, -1.2), 0.5, Material::metal(Vec3::new(0.8, 0.6, 0.2), 0.3)).into(),
        Sphere::new(Vec3::new(1.0, 0.0, -1.2), 0.5, Material::metal(Vec3::splat(0.8), 0.0)).into(),
    ];

    let lights = Light::grey(Vec3::new(-1.0, 3.0, 0.0), 0.9).area(9, 0.5);

    Scene::new("simple", bodies, lights)
}
