use crate::{
    material::Scatter,
    primitives::Intersect,
    ray::Ray,
    scene::Scene,
    DefaultRng,
};
use glam::{vec3, Vec3};

/// Hits closer than this to the ray origin are ignored to avoid shadow acne.
pub const T_MIN: f32 = 0.001;

/// Default bounce limit
pub const MAX_DEPTH: u32 = 50;

/// Largest bounce limit accepted in settings. Each bounce is a stack frame.
pub const MAX_DEPTH_LIMIT: u32 = 1_000;

const SKY_BLUE: Vec3 = Vec3::new(0.5, 0.7, 1.0);

// Computes the color carried back along a ray, following at most `depth` bounces
pub fn ray_color(ray: &Ray, scene: &Scene, depth: u32, rng: &mut DefaultRng) -> Vec3 {
    // Out of bounces, no more light is gathered
    if depth == 0 {
        return Vec3::ZERO;
    }

    match scene.intersection(ray, T_MIN, f32::INFINITY) {
        // The material of the object we hit decides how the ray scatters
        Some(hit) => match hit.material.scatter(ray, &hit, rng) {
            Some(scatter) => {
                scatter.attenuation * ray_color(&scatter.scattered, scene, depth - 1, rng)
            }
            None => Vec3::ZERO,
        },
        None => background(ray),
    }
}

/// Vertical gradient from white at the bottom to sky blue at the top.
pub fn background(ray: &Ray) -> Vec3 {
    let dir = ray.direction.normalize();
    let t = 0.5 * (dir.y + 1.0);
    (1.0 - t) * vec3(1.0, 1.0, 1.0) + t * SKY_BLUE
}
