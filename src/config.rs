//! Render settings and scene description files, both TOML.

use crate::{
    camera::Camera,
    error::{Error, Result},
    integrator::{MAX_DEPTH, MAX_DEPTH_LIMIT},
    material::{Dielectric, Lambertian, Material, Metal},
    primitives::Sphere,
    scene::Scene,
};
use glam::Vec3;
use log::debug;
use serde::Deserialize;
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
    /// Rays traced per pixel
    pub samples: u32,
    /// Bounce limit for each path
    pub max_depth: u32,
    /// Makes renders and random scenes reproducible
    pub seed: Option<u64>,
    pub output: PathBuf,
    /// Size of the worker pool, all cores when unset
    pub threads: Option<usize>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 400,
            height: 225,
            samples: 100,
            max_depth: MAX_DEPTH,
            seed: None,
            output: PathBuf::from("output.png"),
            threads: None,
        }
    }
}

impl RenderSettings {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidSettings(format!(
                "image must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        if self.samples == 0 {
            return Err(Error::InvalidSettings(
                "at least one sample per pixel is required".to_string(),
            ));
        }
        if self.max_depth > MAX_DEPTH_LIMIT {
            return Err(Error::InvalidSettings(format!(
                "max_depth {} exceeds the limit of {}",
                self.max_depth, MAX_DEPTH_LIMIT
            )));
        }
        if self.threads == Some(0) {
            return Err(Error::InvalidSettings("thread count must be positive".to_string()));
        }

        Ok(())
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

fn default_up() -> [f32; 3] {
    [0.0, 1.0, 0.0]
}

fn default_vfov() -> f32 {
    90.0
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CameraDescription {
    pub eye: [f32; 3],
    pub target: [f32; 3],
    #[serde(default = "default_up")]
    pub up: [f32; 3],
    /// Vertical field of view in degrees
    #[serde(default = "default_vfov")]
    pub vfov: f32,
    #[serde(default)]
    pub aperture: f32,
    /// Defaults to the distance between eye and target
    pub focus_distance: Option<f32>,
}

impl Default for CameraDescription {
    fn default() -> Self {
        Self {
            eye: [0.0, 0.0, 0.0],
            target: [0.0, 0.0, -1.0],
            up: default_up(),
            vfov: default_vfov(),
            aperture: 0.0,
            focus_distance: None,
        }
    }
}

impl CameraDescription {
    pub fn build(&self, aspect: f32) -> Camera {
        let eye = Vec3::from(self.eye);
        let target = Vec3::from(self.target);
        let focus_distance = self
            .focus_distance
            .unwrap_or_else(|| (eye - target).length());

        Camera::new(
            eye,
            target,
            Vec3::from(self.up),
            self.vfov,
            aspect,
            self.aperture,
            focus_distance,
        )
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MaterialDescription {
    Lambertian { albedo: [f32; 3] },
    Metal {
        albedo: [f32; 3],
        #[serde(default)]
        fuzz: f32,
    },
    Dielectric { refractive_index: f32 },
}

impl MaterialDescription {
    pub fn build(&self) -> Material {
        match *self {
            MaterialDescription::Lambertian { albedo } => Lambertian::new(albedo.into()).into(),
            MaterialDescription::Metal { albedo, fuzz } => Metal::new(albedo.into(), fuzz).into(),
            MaterialDescription::Dielectric { refractive_index } => {
                Dielectric::new(refractive_index).into()
            }
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SphereDescription {
    pub center: [f32; 3],
    pub radius: f32,
    pub material: String,
}

/// A scene file: one camera, named materials and the spheres that use them.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SceneDescription {
    #[serde(default)]
    pub camera: CameraDescription,
    #[serde(default)]
    pub materials: HashMap<String, MaterialDescription>,
    #[serde(default)]
    pub spheres: Vec<SphereDescription>,
}

impl SceneDescription {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Builds every named material once, so spheres naming the same material share it.
    pub fn build_scene(&self) -> Result<Scene> {
        let materials: HashMap<&str, Arc<Material>> = self
            .materials
            .iter()
            .map(|(name, description)| (name.as_str(), Arc::new(description.build())))
            .collect();

        let mut scene = Scene::new();
        for (index, sphere) in self.spheres.iter().enumerate() {
            let material = materials
                .get(sphere.material.as_str())
                .ok_or_else(|| Error::UnknownMaterial {
                    material: sphere.material.clone(),
                    sphere: index,
                })?;

            scene.add(Sphere::new(
                sphere.center.into(),
                sphere.radius,
                material.clone(),
            ));
        }

        debug!(
            "Built scene with {} spheres and {} materials",
            scene.len(),
            materials.len()
        );

        Ok(scene)
    }
}
