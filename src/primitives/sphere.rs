use crate::{
    material::Material,
    primitives::Intersect,
    ray::{Hit, Ray},
};
use glam::Vec3;
use std::sync::Arc;

/// A sphere. A negative radius turns the surface normals inward, which is
/// used for hollow glass.
#[derive(Clone, Debug)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Arc<Material>,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32, material: Arc<Material>) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    #[cfg(test)]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    #[cfg(test)]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[cfg(test)]
    pub fn material(&self) -> &Arc<Material> {
        &self.material
    }
}

impl Intersect for Sphere {
    fn intersection(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<Hit> {
        let oc = ray.origin - self.center;
        let a = ray.direction.length_squared();
        let half_b = oc.dot(ray.direction);
        let c = oc.length_squared() - self.radius * self.radius;
        let discriminant = half_b * half_b - a * c;

        if discriminant < 0.0 {
            return None;
        }

        let sqrt_d = f32::sqrt(discriminant);
        let t_1 = (-half_b - sqrt_d) / a;
        let t_2 = (-half_b + sqrt_d) / a;

        // Prefer the nearer root
        for &t in &[t_1, t_2] {
            if t_min < t && t < t_max {
                let outward_normal = (ray.position(t) - self.center) / self.radius;
                return Some(Hit::new(ray, t, outward_normal, self.material.clone()));
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        material::{Dielectric, Lambertian, Scatter},
        DefaultRng,
    };
    use glam::vec3;
    use rand::{Rng, SeedableRng};

    fn material() -> Arc<Material> {
        Arc::new(Lambertian::new(vec3(0.5, 0.5, 0.5)).into())
    }

    #[test]
    fn ray_down_the_axis_hits_the_near_side() {
        let sphere = Sphere::new(vec3(0.0, 0.0, -1.0), 0.5, material());
        let ray = Ray::new(Vec3::ZERO, vec3(0.0, 0.0, -1.0));

        let hit = sphere.intersection(&ray, 0.0, f32::INFINITY).unwrap();
        assert!((hit.t - 0.5).abs() < 1e-6);
        assert!((hit.point - vec3(0.0, 0.0, -0.5)).length() < 1e-6);
        assert!((hit.normal - vec3(0.0, 0.0, 1.0)).length() < 1e-6);
        assert!(hit.front_face);
        assert!(Arc::ptr_eq(&hit.material, sphere.material()));
    }

    #[test]
    fn ray_pointing_away_misses() {
        let sphere = Sphere::new(vec3(0.0, 0.0, -1.0), 0.5, material());
        let ray = Ray::new(Vec3::ZERO, vec3(0.0, 1.0, 0.0));

        assert!(sphere.intersection(&ray, 0.0, f32::INFINITY).is_none());
    }

    #[test]
    fn far_root_used_when_near_root_is_out_of_range() {
        let sphere = Sphere::new(vec3(0.0, 0.0, -1.0), 0.5, material());
        let ray = Ray::new(Vec3::ZERO, vec3(0.0, 0.0, -1.0));

        let hit = sphere.intersection(&ray, 0.6, f32::INFINITY).unwrap();
        assert!((hit.t - 1.5).abs() < 1e-6);
        // Leaving the sphere, so the normal is flipped back toward the ray
        assert!(!hit.front_face);
        assert!((hit.normal - vec3(0.0, 0.0, 1.0)).length() < 1e-6);
    }

    #[test]
    fn both_roots_out_of_range_is_a_miss() {
        let sphere = Sphere::new(vec3(0.0, 0.0, -1.0), 0.5, material());
        let ray = Ray::new(Vec3::ZERO, vec3(0.0, 0.0, -1.0));

        assert!(sphere.intersection(&ray, 0.0, 0.4).is_none());
        assert!(sphere.intersection(&ray, 1.6, f32::INFINITY).is_none());
    }

    #[test]
    fn ray_starting_inside_sees_a_back_face() {
        let sphere = Sphere::new(vec3(0.0, 0.0, -1.0), 0.5, material());
        let ray = Ray::new(vec3(0.0, 0.0, -1.0), vec3(0.0, 0.0, -1.0));

        let hit = sphere.intersection(&ray, 0.001, f32::INFINITY).unwrap();
        assert!((hit.t - 0.5).abs() < 1e-6);
        assert!(!hit.front_face);
        assert!((hit.normal - vec3(0.0, 0.0, 1.0)).length() < 1e-6);
    }

    // Component of v lying in the surface plane
    fn tangential(v: Vec3, normal: Vec3) -> Vec3 {
        v - v.dot(normal) * normal
    }

    #[test]
    fn negative_radius_flips_the_outward_normal() {
        let glass: Arc<Material> = Arc::new(Dielectric::new(1.5).into());
        let shell = Sphere::new(vec3(0.0, 0.0, -1.0), -0.5, glass.clone());
        let solid = Sphere::new(vec3(0.0, 0.0, -1.0), 0.5, glass);
        // Off axis so the refraction ratio shows up in the bent direction
        let ray = Ray::new(vec3(0.2, 0.0, 0.0), vec3(0.0, 0.0, -1.0));
        let mut rng = DefaultRng::seed_from_u64(0);

        // Same point as the positive sphere, but the surface reads as a back face,
        // so the dielectric treats the crossing as glass to air
        let hit = shell.intersection(&ray, 0.0, f32::INFINITY).unwrap();
        let entry = solid.intersection(&ray, 0.0, f32::INFINITY).unwrap();
        assert!((hit.t - entry.t).abs() < 1e-6);
        assert!(!hit.front_face);
        assert!(entry.front_face);
        assert!((hit.normal - entry.normal).length() < 1e-6);
        assert!(hit.normal.dot(ray.direction) < 0.0);

        let incoming = tangential(ray.direction, hit.normal);
        let through_shell = hit.material.scatter(&ray, &hit, &mut rng).unwrap();
        let through_solid = entry.material.scatter(&ray, &entry, &mut rng).unwrap();

        let bent = tangential(through_shell.scattered.direction, hit.normal);
        assert!((bent - 1.5 * incoming).length() < 1e-5);
        let bent = tangential(through_solid.scattered.direction, entry.normal);
        assert!((bent - incoming / 1.5).length() < 1e-5);
        assert_eq!(through_shell.attenuation, Vec3::ONE);
    }

    #[test]
    fn hits_stay_in_range_and_face_the_ray() {
        let mut rng = DefaultRng::seed_from_u64(42);
        let spheres = [
            Sphere::new(vec3(0.0, 0.0, -1.0), 0.5, material()),
            Sphere::new(vec3(0.3, -0.2, -2.0), -0.8, material()),
            Sphere::new(vec3(0.0, -100.5, -1.0), 100.0, material()),
        ];

        let mut hits = 0;
        for _ in 0..2000 {
            let origin = vec3(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));
            let direction = vec3(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0));
            if direction.length_squared() < 1e-6 {
                continue;
            }
            let ray = Ray::new(origin, direction);

            for sphere in &spheres {
                if let Some(hit) = sphere.intersection(&ray, 0.001, 10.0) {
                    hits += 1;
                    assert!(hit.t > 0.001 && hit.t < 10.0);
                    assert!(ray.direction.dot(hit.normal) <= 0.0);
                }
            }
        }
        assert!(hits > 0);
    }
}
