//! A recursive Monte Carlo path tracer.
//!
//! Rays are generated by a thin-lens [`Camera`], intersected against a
//! [`Scene`] of primitives and bounced off their materials until they escape
//! to the sky or run out of depth.

pub mod camera;
pub mod config;
pub mod error;
pub mod integrator;
pub mod material;
pub mod output;
pub mod primitives;
pub mod ray;
pub mod render;
pub mod sampling;
pub mod scene;
pub mod scenes;

pub use crate::{
    camera::Camera,
    config::{RenderSettings, SceneDescription},
    error::{Error, Result},
    integrator::ray_color,
    material::{Dielectric, Lambertian, Material, Metal, Scatter, ScatterResult},
    primitives::{Intersect, Primitive, Sphere},
    ray::{Hit, Ray},
    render::{render, Image},
    scene::Scene,
};

/// The generator threaded through every operation that draws random numbers.
pub type DefaultRng = rand_xoshiro::Xoshiro256Plus;
