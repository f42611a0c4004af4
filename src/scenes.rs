//! Scenes that ship with the renderer.

use crate::{
    config::{CameraDescription, SceneDescription},
    error::{Error, Result},
    material::{Dielectric, Lambertian, Material, Metal},
    primitives::Sphere,
    scene::Scene,
    DefaultRng,
};
use glam::{vec3, Vec3};
use itertools::iproduct;
use log::debug;
use rand::prelude::*;
use std::{path::Path, sync::Arc};

pub const BUILTIN: &[&str] = &["random", "showcase", "diffuse"];

/// Resolves a built-in scene name or a path to a `.toml` scene file.
pub fn load(name: &str, rng: &mut DefaultRng) -> Result<(Scene, CameraDescription)> {
    match name {
        "random" => Ok(random(rng)),
        "showcase" => Ok(showcase()),
        "diffuse" => Ok(diffuse()),
        _ if name.ends_with(".toml") => {
            let description = SceneDescription::load(Path::new(name))?;
            Ok((description.build_scene()?, description.camera))
        }
        _ => Err(Error::UnknownScene(name.to_string())),
    }
}

fn material(material: impl Into<Material>) -> Arc<Material> {
    Arc::new(material.into())
}

// Generate a semi random scene
pub fn random(rng: &mut DefaultRng) -> (Scene, CameraDescription) {
    let mut scene = Scene::new();

    // The big sphere
    let ground = material(Lambertian::new(vec3(0.5, 0.5, 0.5)));
    scene.add(Sphere::new(vec3(0.0, -1000.0, 0.0), 1000.0, ground));

    // One glass material serves every small glass sphere
    let glass = material(Dielectric::new(1.5));

    for (a, b) in iproduct!(-11..11, -11..11) {
        let choice = rng.gen::<f32>();
        let center = vec3(
            a as f32 + 0.9 * rng.gen::<f32>(),
            0.2,
            b as f32 + 0.9 * rng.gen::<f32>(),
        );

        // Keep clear of the large metal sphere
        if (center - vec3(4.0, 0.2, 0.0)).length() <= 0.9 {
            continue;
        }

        let sphere_material = if choice < 0.8 {
            let albedo = random_color(rng) * random_color(rng);
            material(Lambertian::new(albedo))
        } else if choice < 0.95 {
            let albedo = Vec3::splat(0.5) + 0.5 * random_color(rng);
            material(Metal::new(albedo, rng.gen_range(0.0..0.5)))
        } else {
            glass.clone()
        };

        scene.add(Sphere::new(center, 0.2, sphere_material));
    }

    scene.add(Sphere::new(vec3(0.0, 1.0, 0.0), 1.0, glass));
    scene.add(Sphere::new(
        vec3(-4.0, 1.0, 0.0),
        1.0,
        material(Lambertian::new(vec3(0.4, 0.2, 0.1))),
    ));
    scene.add(Sphere::new(
        vec3(4.0, 1.0, 0.0),
        1.0,
        material(Metal::new(vec3(0.7, 0.6, 0.5), 0.0)),
    ));

    debug!("Generated random scene with {} spheres", scene.len());

    let camera = CameraDescription {
        eye: [13.0, 2.0, 3.0],
        target: [0.0, 0.0, 0.0],
        vfov: 20.0,
        aperture: 0.1,
        focus_distance: Some(10.0),
        ..CameraDescription::default()
    };

    (scene, camera)
}

/// Diffuse, hollow glass and fuzzy metal side by side.
pub fn showcase() -> (Scene, CameraDescription) {
    let mut scene = Scene::new();
    let glass = material(Dielectric::new(1.5));

    scene.add(Sphere::new(
        vec3(0.0, -100.5, -1.0),
        100.0,
        material(Lambertian::new(vec3(0.8, 0.8, 0.0))),
    ));
    scene.add(Sphere::new(
        vec3(0.0, 0.0, -1.0),
        0.5,
        material(Lambertian::new(vec3(0.1, 0.2, 0.5))),
    ));
    // The inner surface has a negative radius, which makes a bubble
    scene.add(Sphere::new(vec3(-1.0, 0.0, -1.0), 0.5, glass.clone()));
    scene.add(Sphere::new(vec3(-1.0, 0.0, -1.0), -0.4, glass));
    scene.add(Sphere::new(
        vec3(1.0, 0.0, -1.0),
        0.5,
        material(Metal::new(vec3(0.8, 0.6, 0.2), 0.3)),
    ));

    let camera = CameraDescription {
        eye: [-2.0, 2.0, 1.0],
        target: [0.0, 0.0, -1.0],
        vfov: 20.0,
        ..CameraDescription::default()
    };

    (scene, camera)
}

pub fn diffuse() -> (Scene, CameraDescription) {
    let grey = material(Lambertian::new(vec3(0.5, 0.5, 0.5)));
    let mut scene = Scene::new();
    scene.add(Sphere::new(vec3(0.0, 0.0, -1.0), 0.5, grey.clone()));
    scene.add(Sphere::new(vec3(0.0, -100.5, -1.0), 100.0, grey));

    (scene, CameraDescription::default())
}

fn random_color(rng: &mut DefaultRng) -> Vec3 {
    vec3(rng.gen(), rng.gen(), rng.gen())
}
