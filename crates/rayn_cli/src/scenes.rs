//! Built-in demo scenes and their material presets.

use std::f32::consts::FRAC_PI_4;

use rayn_core::{Light, Material};
use rayn_math::{Mat3, Vec3};
use rayn_renderer::{Body, Plane, Quad, Scene, SceneRegistry, Sphere, Triangle};

/// Named material presets shared by the demo scenes.
pub mod presets {
    use super::*;

    /// Bright white panel standing in for the box scene's ceiling lamp.
    pub const CORNELL_LIGHT: Material = Material {
        ambient: Vec3::ONE,
        diffuse: Vec3::ONE,
        specular: Vec3::ONE,
        reflective: Vec3::ONE,
        specular_power: 35.0,
        fuzz: 0.1,
    };

    /// Gold with a soft reflection.
    pub const TRIFORCE: Material = Material {
        ambient: Vec3::new(0.3, 0.25, 0.07),
        diffuse: Vec3::new(1.0, 0.9, 0.3),
        specular: Vec3::new(0.5, 0.4, 0.1),
        reflective: Vec3::new(0.3, 0.2, 0.0),
        specular_power: 32.0,
        fuzz: 0.1,
    };

    /// Grey with a tight highlight and a faint mirror term.
    pub const FBRASS: Material = Material {
        ambient: Vec3::splat(0.1),
        diffuse: Vec3::splat(0.3),
        specular: Vec3::splat(0.9),
        reflective: Vec3::splat(0.05),
        specular_power: 35.0,
        fuzz: 0.0,
    };
}

use presets::*;

/// Every built-in scene.
pub fn registry() -> SceneRegistry {
    SceneRegistry::new(vec![
        scene1(),
        scene2(),
        scene3(),
        triforce(),
        spheres_and_planes(),
        box_scene(),
    ])
}

fn scene1() -> Scene {
    Scene::new(
        "scene1",
        vec![
            Plane::new(Vec3::new(0.0, -0.5, 0.0), Vec3::Y, FBRASS).into(),
            Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, FBRASS).into(),
            Sphere::new(Vec3::new(1.0, 0.0, -5.0), 0.5, FBRASS).into(),
        ],
        vec![
            Light::grey(Vec3::new(-0.5, 2.0, 0.0), 0.2),
            Light::grey(Vec3::new(0.5, 2.0, 0.0), 0.2),
        ],
    )
}

fn scene2() -> Scene {
    Scene::new(
        "scene2",
        vec![
            Sphere::new(Vec3::new(0.0, -100.5, -1.0), 100.0, Material::lambertian(Vec3::new(0.8, 0.8, 0.0))).into(),
            Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, Material::lambertian(Vec3::new(0.8, 0.3, 0.3))).into(),
            Sphere::new(Vec3::new(-1.0, 0.0, -1.0), 0.5, Material::metal(Vec3::splat(0.8), 0.1)).into(),
            Sphere::new(Vec3::new(1.0, 0.0, -1.0), 0.5, Material::metal(Vec3::new(0.8, 0.6, 0.2), 0.4)).into(),
        ],
        vec![Light::grey(Vec3::new(-0.5, 0.0, 0.0), 0.2)],
    )
}

/// Two touching spheres that exactly fill a 90 degree view.
fn scene3() -> Scene {
    let r = FRAC_PI_4.cos();
    Scene::new(
        "scene3",
        vec![
            Sphere::new(Vec3::new(-r, 0.0, -1.0), r, Material::lambertian(Vec3::Z)).into(),
            Sphere::new(Vec3::new(r, 0.0, -1.0), r, Material::lambertian(Vec3::X)).into(),
        ],
        vec![Light::grey(Vec3::new(-0.5, 0.5, 0.0), 0.2)],
    )
}

fn triforce() -> Scene {
    let v = Vec3::new;
    Scene::new(
        "triforce",
        vec![
            Triangle::new(v(-0.5, 0.0, -1.0), v(-1.0, -1.0, -1.0), v(0.0, -1.0, -1.0), TRIFORCE).into(),
            Triangle::new(v(0.5, 0.0, -1.0), v(0.0, -1.0, -1.0), v(1.0, -1.0, -1.0), TRIFORCE).into(),
            Triangle::new(v(0.0, 1.0, -1.0), v(-0.5, 0.0, -1.0), v(0.5, 0.0, -1.0), TRIFORCE).into(),
        ],
        vec![Light::grey(Vec3::new(0.0, 1.0, 0.0), 0.5)],
    )
}

/// A 3x3 grid of spheres above a brass floor.
fn spheres_and_planes() -> Scene {
    let orange = Material::lambertian(Vec3::new(1.0, 0.5, 0.0));
    let lime = Material::lambertian(Vec3::new(0.5, 1.0, 0.0));
    let blue = Material::lambertian(Vec3::new(0.0, 0.5, 1.0));

    let grid = [
        [orange, lime, blue],
        [orange, FBRASS, blue],
        [orange, lime, blue],
    ];

    let mut bodies: Vec<Body> = vec![Plane::new(Vec3::new(0.0, -2.0, 0.0), Vec3::Y, FBRASS).into()];
    for (row, materials) in grid.iter().enumerate() {
        for (col, material) in materials.iter().enumerate() {
            let center = Vec3::new(col as f32 - 1.0, row as f32 - 1.0, -2.0);
            bodies.push(Sphere::new(center, 0.4, *material).into());
        }
    }

    Scene::new("spheres-and-planes", bodies, vec![Light::grey(Vec3::new(0.0, 1.0, 0.0), 0.3)])
}

/// Three visible faces of a box: front, top and right, given as
/// `(v1, v2, v3)` corners in box-local space.
fn box_faces(height: f32) -> [[Vec3; 3]; 3] {
    let v = Vec3::new;
    [
        [v(0.0, 0.0, 0.15), v(0.0, height, 0.15), v(0.3, 0.0, 0.15)],
        [v(0.0, height, 0.15), v(0.0, height, -0.15), v(0.3, height, 0.15)],
        [v(0.3, 0.0, 0.15), v(0.3, height, 0.15), v(0.3, 0.0, -0.15)],
    ]
}

/// Quads for a box rotated `degrees` about the Y axis through `pivot`,
/// then moved by `offset`.
fn rotated_box(height: f32, pivot: Vec3, degrees: f32, offset: Vec3, material: Material) -> Vec<Body> {
    let rotation = Mat3::from_rotation_y(-degrees.to_radians());
    let place = |p: Vec3| rotation * (p - pivot) + pivot + offset;

    box_faces(height)
        .iter()
        .map(|[v1, v2, v3]| Quad::new(place(*v1), place(*v2), place(*v3), material).into())
        .collect()
}

/// A Cornell-style box with two blocks and an area light under the ceiling.
fn box_scene() -> Scene {
    let white = Material::lambertian(Vec3::splat(0.9));
    let block = Material::lambertian(Vec3::ONE);

    let mut bodies: Vec<Body> = vec![
        // Back wall
        Plane::new(Vec3::new(0.0, 0.0, -1.0), Vec3::Z, white).into(),
        // Left wall
        Plane::new(Vec3::new(-0.5, 0.0, 0.0), Vec3::X, Material::lambertian(Vec3::X)).into(),
        // Right wall
        Plane::new(Vec3::new(0.5, 0.0, 0.0), -Vec3::X, Material::lambertian(Vec3::Y)).into(),
        // Floor
        Plane::new(Vec3::new(0.0, -0.5, 0.0), Vec3::Y, white).into(),
        // Ceiling
        Plane::new(Vec3::new(0.0, 0.5, 0.0), -Vec3::Y, white).into(),
    ];

    bodies.extend(rotated_box(
        0.3,
        Vec3::new(0.15, 0.15, 0.0),
        10.0,
        Vec3::new(0.0, -0.5, -0.7),
        block,
    ));
    bodies.extend(rotated_box(
        0.6,
        Vec3::new(0.15, 0.3, 0.0),
        60.0,
        Vec3::new(-0.35, -0.5, -0.8),
        block,
    ));

    // Lamp panel
    bodies.push(
        Quad::new(
            Vec3::new(-0.1, 0.499, -0.64),
            Vec3::new(-0.1, 0.499, -0.60),
            Vec3::new(0.1, 0.499, -0.64),
            CORNELL_LIGHT,
        )
        .into(),
    );

    let lamp = Light::new(Vec3::new(0.0, 0.40, -0.62), Vec3::new(0.3, 0.25, 0.15));
    Scene::new("box-scene", bodies, lamp.area(64, 0.02))
}
