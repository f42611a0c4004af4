use crate::{
    ray::{Hit, Ray},
    sampling::{near_zero, random_in_unit_sphere, random_unit_vector},
    DefaultRng,
};
use enum_dispatch::enum_dispatch;
use glam::Vec3;
use log::warn;

// Reflect vector v around normal n
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

// Refract the unit vector uv through a surface with normal n (Snell's law).
// Always bends, there is no total internal reflection branch.
pub fn refract(uv: Vec3, n: Vec3, ratio: f32) -> Vec3 {
    let cos_theta = f32::min((-uv).dot(n), 1.0);
    let perpendicular = ratio * (uv + cos_theta * n);
    let parallel = -f32::sqrt(f32::abs(1.0 - perpendicular.length_squared())) * n;

    perpendicular + parallel
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScatterResult {
    pub scattered: Ray,
    pub attenuation: Vec3,
}

#[enum_dispatch]
pub trait Scatter {
    /// Returns the bounced ray and its attenuation, or `None` if the ray is absorbed.
    fn scatter(&self, ray: &Ray, hit: &Hit, rng: &mut DefaultRng) -> Option<ScatterResult>;
}

#[enum_dispatch(Scatter)]
#[derive(Clone, Debug, PartialEq)]
pub enum Material {
    Lambertian,
    Metal,
    Dielectric,
}

/// Ideal diffuse reflector
#[derive(Clone, Debug, PartialEq)]
pub struct Lambertian {
    pub albedo: Vec3,
}

impl Lambertian {
    pub fn new(albedo: Vec3) -> Self {
        Self { albedo }
    }
}

// Offsets the normal by a unit sample, falling back to the normal itself
// when the sample lands opposite it
fn scatter_direction(normal: Vec3, sample: Vec3) -> Vec3 {
    let direction = normal + sample;
    if near_zero(direction) {
        normal
    } else {
        direction
    }
}

impl Scatter for Lambertian {
    fn scatter(&self, _ray: &Ray, hit: &Hit, rng: &mut DefaultRng) -> Option<ScatterResult> {
        let direction = scatter_direction(hit.normal, random_unit_vector(rng));

        Some(ScatterResult {
            scattered: Ray::new(hit.point, direction),
            attenuation: self.albedo,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Metal {
    pub albedo: Vec3,
    pub fuzz: f32,
}

impl Metal {
    /// `fuzz` is clamped to `[0, 1]`.
    pub fn new(albedo: Vec3, fuzz: f32) -> Self {
        let clamped = fuzz.clamp(0.0, 1.0);
        if clamped != fuzz {
            warn!("Metal fuzz {} clamped to {}", fuzz, clamped);
        }

        Self {
            albedo,
            fuzz: clamped,
        }
    }
}

impl Scatter for Metal {
    fn scatter(&self, ray: &Ray, hit: &Hit, rng: &mut DefaultRng) -> Option<ScatterResult> {
        let reflected = reflect(ray.direction.normalize(), hit.normal);
        let scattered = Ray::new(hit.point, reflected + self.fuzz * random_in_unit_sphere(rng));

        // Fuzz may push the reflection below the surface
        if scattered.direction.dot(hit.normal) > 0.0 {
            Some(ScatterResult {
                scattered,
                attenuation: self.albedo,
            })
        } else {
            None
        }
    }
}

/// Clear refractive material such as glass or water.
#[derive(Clone, Debug, PartialEq)]
pub struct Dielectric {
    pub refractive_index: f32,
}

impl Dielectric {
    pub fn new(refractive_index: f32) -> Self {
        Self { refractive_index }
    }
}

impl Scatter for Dielectric {
    fn scatter(&self, ray: &Ray, hit: &Hit, _rng: &mut DefaultRng) -> Option<ScatterResult> {
        let ratio = if hit.front_face {
            1.0 / self.refractive_index
        } else {
            self.refractive_index
        };

        let refracted = refract(ray.direction.normalize(), hit.normal, ratio);

        Some(ScatterResult {
            scattered: Ray::new(hit.point, refracted),
            attenuation: Vec3::ONE,
        })
    }
}
