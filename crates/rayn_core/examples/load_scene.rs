//! Example: Load and inspect a JSON scene file.
//!
//! Run with: cargo run --example load_scene -- assets/two_spheres.json

use std::env;

use rayn_core::SceneDescription;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: load_scene <path-to-scene-json>");
        println!("\nExample:");
        println!("  cargo run --example load_scene -- assets/two_spheres.json");
        return;
    }

    let path = &args[1];
    println!("Loading scene file: {}", path);

    match SceneDescription::load(path) {
        Ok(desc) => {
            println!("\n=== Scene: {} ===", desc.name);
            println!("Materials: {}", desc.materials.len());
            println!("Bodies: {}", desc.bodies.len());
            let lights = match desc.expanded_lights() {
                Ok(lights) => lights,
                Err(e) => {
                    eprintln!("Invalid lights: {}", e);
                    Vec::new()
                }
            };
            println!("Lights: {} ({} after area expansion)", desc.lights.len(), lights.len());

            println!("\n--- Materials ---");
            for (name, material) in &desc.materials {
                println!(
                    "  {} - diffuse ({:.2}, {:.2}, {:.2}), reflective ({:.2}, {:.2}, {:.2}), fuzz {:.2}",
                    name,
                    material.diffuse.x,
                    material.diffuse.y,
                    material.diffuse.z,
                    material.reflective.x,
                    material.reflective.y,
                    material.reflective.z,
                    material.fuzz
                );
            }

            println!("\n--- Bodies ---");
            for (i, body) in desc.bodies.iter().enumerate() {
                let status = match desc.material_for(i, body) {
                    Ok(_) => "ok",
                    Err(_) => "MISSING MATERIAL",
                };
                println!("  [{}] {:?} -> {} ({})", i, body, body.material(), status);
            }

            println!("\n--- Lights ---");
            for (i, light) in lights.iter().enumerate() {
                println!(
                    "  [{}] at ({:.2}, {:.2}, {:.2}) intensity ({:.2}, {:.2}, {:.2})",
                    i,
                    light.position.x,
                    light.position.y,
                    light.position.z,
                    light.intensity.x,
                    light.intensity.y,
                    light.intensity.z
                );
            }
        }
        Err(e) => {
            eprintln!("Error loading scene: {}", e);
            std::process::exit(1);
        }
    }
}
