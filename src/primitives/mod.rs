//! This module is full of primitives that all impl Intersect

mod sphere;

pub use sphere::*;

use crate::ray::{Hit, Ray};
use enum_dispatch::enum_dispatch;

/// Computes whether a ray intersects the implementor
#[enum_dispatch]
pub trait Intersect {
    /// Computes the nearest intersection between the ray and the primitive with `t` in `(t_min, t_max)`
    fn intersection(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<Hit>;
}

/// Every shape a scene can hold
#[enum_dispatch(Intersect)]
#[derive(Clone, Debug)]
pub enum Primitive {
    Sphere,
}
