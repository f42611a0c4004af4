mod cli;
mod logger;

use anyhow::Context;
use clap::Parser;
use log::info;
use rand::SeedableRng;
use raytracer::{output, render, scenes, DefaultRng, RenderSettings};

use crate::{cli::Args, logger::init_logger};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    let mut settings = match &args.config {
        Some(path) => RenderSettings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => RenderSettings::default(),
    };
    args.apply(&mut settings);
    settings.validate()?;

    if let Some(threads) = settings.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to build the render thread pool")?;
    }

    let mut rng = match settings.seed {
        Some(seed) => DefaultRng::seed_from_u64(seed),
        None => DefaultRng::from_entropy(),
    };
    let (scene, camera) = scenes::load(&args.scene, &mut rng)
        .with_context(|| format!("Failed to load scene '{}'", args.scene))?;
    info!("Loaded scene '{}' with {} primitives", args.scene, scene.len());

    let camera = camera.build(settings.aspect_ratio());
    let image = render(&scene, &camera, &settings)?;

    output::save(&image, &settings.output)
        .with_context(|| format!("Failed to save {}", settings.output.display()))?;

    Ok(())
}
