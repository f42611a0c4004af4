use crate::material::Material;
use glam::Vec3;
use std::sync::Arc;

/// The ray data type
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    pub fn position(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }
}

/// Contains data to be used in the generation of a new ray as a result of an intersection.
///
/// `normal` always opposes the direction of the ray that produced the hit,
/// `front_face` records whether that meant keeping the outward normal.
#[derive(Clone, Debug)]
pub struct Hit {
    pub t: f32,
    pub point: Vec3,
    pub normal: Vec3,
    pub front_face: bool,
    pub material: Arc<Material>,
}

impl Hit {
    pub fn new(ray: &Ray, t: f32, outward_normal: Vec3, material: Arc<Material>) -> Self {
        let front_face = ray.direction.dot(outward_normal) < 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };

        Self {
            t,
            point: ray.position(t),
            normal,
            front_face,
            material,
        }
    }
}
