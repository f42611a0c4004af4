//! Random sampling used by the materials and the camera lens.
//!
//! Every function takes the generator explicitly so renders can be seeded.

use crate::DefaultRng;
use glam::{vec3, Vec3};
use rand_distr::{Distribution, UnitBall, UnitDisc};

/// Components closer to zero than this count as zero.
pub const NEAR_ZERO: f32 = 1e-8;

// Uniform point inside the unit ball, rejection sampled from [-1, 1]^3
pub fn random_in_unit_sphere(rng: &mut DefaultRng) -> Vec3 {
    let p: [f32; 3] = UnitBall.sample(rng);
    Vec3::from(p)
}

// Uniform direction on the surface of the unit sphere
pub fn random_unit_vector(rng: &mut DefaultRng) -> Vec3 {
    loop {
        if let Some(v) = random_in_unit_sphere(rng).try_normalize() {
            return v;
        }
    }
}

// Uniform point inside the unit disk in the xy plane
pub fn random_in_unit_disk(rng: &mut DefaultRng) -> Vec3 {
    let [x, y]: [f32; 2] = UnitDisc.sample(rng);
    vec3(x, y, 0.0)
}

pub fn near_zero(v: Vec3) -> bool {
    v.abs().cmplt(Vec3::splat(NEAR_ZERO)).all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn unit_sphere_samples_stay_inside_the_ball() {
        let mut rng = DefaultRng::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(random_in_unit_sphere(&mut rng).length_squared() < 1.0);
        }
    }

    #[test]
    fn unit_vectors_have_unit_length() {
        let mut rng = DefaultRng::seed_from_u64(11);
        for _ in 0..1000 {
            let v = random_unit_vector(&mut rng);
            assert!((v.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn disk_samples_lie_in_the_xy_plane() {
        let mut rng = DefaultRng::seed_from_u64(13);
        for _ in 0..1000 {
            let p = random_in_unit_disk(&mut rng);
            assert_eq!(p.z, 0.0);
            assert!(p.length_squared() < 1.0);
        }
    }

    #[test]
    fn near_zero_requires_every_component() {
        assert!(near_zero(Vec3::ZERO));
        assert!(near_zero(vec3(1e-9, -1e-9, 0.0)));
        assert!(!near_zero(vec3(1e-9, 1e-3, 0.0)));
        assert!(!near_zero(vec3(0.0, 0.0, -1.0)));
    }
}
