//! Drives the camera and integrator over every pixel of the image.

use crate::{
    camera::Camera, config::RenderSettings, error::Result, integrator::ray_color,
    output::encode_pixel, scene::Scene, DefaultRng,
};
use glam::Vec3;
use log::{debug, info};
use rand::prelude::*;
use rayon::prelude::*;
use std::{
    sync::atomic::{AtomicUsize, Ordering},
    time::Instant,
};

pub const COLOR_CHANNELS: usize = 3;

/// An 8 bit RGB image, rows stored top to bottom.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

// Each scanline owns its generator so seeded renders do not depend on scheduling
fn row_rng(seed: Option<u64>, row: usize) -> DefaultRng {
    match seed {
        Some(seed) => {
            DefaultRng::seed_from_u64(seed ^ (row as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
        }
        None => DefaultRng::from_entropy(),
    }
}

/// Sums `samples` jittered paths through pixel `(i, j)`, counted from the lower left.
pub fn sample_pixel(
    camera: &Camera,
    scene: &Scene,
    settings: &RenderSettings,
    i: usize,
    j: usize,
    rng: &mut DefaultRng,
) -> Vec3 {
    let mut sum = Vec3::ZERO;

    // Antialiasing via multisampling
    for _ in 0..settings.samples {
        let s = (i as f32 + rng.gen::<f32>()) / settings.width as f32;
        let t = (j as f32 + rng.gen::<f32>()) / settings.height as f32;

        let ray = camera.get_ray(s, t, rng);
        sum += ray_color(&ray, scene, settings.max_depth, rng);
    }

    sum
}

/// Renders the whole image. Settings are validated first, so a zero sized
/// image or an unbounded bounce limit is an error rather than a panic.
pub fn render(scene: &Scene, camera: &Camera, settings: &RenderSettings) -> Result<Image> {
    settings.validate()?;

    let width = settings.width as usize;
    let height = settings.height as usize;
    let mut pixels = vec![0u8; width * height * COLOR_CHANNELS];

    let rows_done = AtomicUsize::new(0);
    let report_every = (height / 10).max(1);
    let start = Instant::now();

    info!(
        "Rendering {}x{} at {} samples per pixel, {} bounces, on {} threads",
        width,
        height,
        settings.samples,
        settings.max_depth,
        rayon::current_num_threads()
    );
    debug!("Camera lens radius {}", camera.lens_radius());

    pixels
        .par_chunks_mut(width * COLOR_CHANNELS)
        .rev()
        .enumerate()
        .for_each(|(j, row)| {
            let mut rng = row_rng(settings.seed, j);
            row.chunks_mut(COLOR_CHANNELS)
                .enumerate()
                .for_each(|(i, pixel)| {
                    let sum = sample_pixel(camera, scene, settings, i, j, &mut rng);
                    pixel.copy_from_slice(&encode_pixel(sum, settings.samples));
                });

            let done = rows_done.fetch_add(1, Ordering::Relaxed) + 1;
            if done % report_every == 0 || done == height {
                info!("{}/{} scanlines ({}%)", done, height, done * 100 / height);
            }
        });

    let duration = start.elapsed();
    let total_samples = (width * height) as f64 * f64::from(settings.samples);
    info!(
        "Time elapsed: {:.2?}, {:.2}M samples per second",
        duration,
        total_samples / 1_000_000.0 / duration.as_secs_f64().max(f64::EPSILON)
    );

    Ok(Image {
        width: settings.width,
        height: settings.height,
        pixels,
    })
}
