use clap::{Parser, ValueEnum};
use log::LevelFilter;
use raytracer::RenderSettings;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments. Anything given here overrides the config file.
#[derive(Debug, Parser)]
#[command(name = "raytracer")]
#[command(about = "A Monte Carlo path tracer")]
pub struct Args {
    /// TOML file with render settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Built-in scene (random, showcase, diffuse) or a .toml scene file
    #[arg(long, default_value = "random")]
    pub scene: String,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Number of samples per pixel
    #[arg(short, long)]
    pub samples: Option<u32>,

    /// Maximum number of bounces per path
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Seed for reproducible renders
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output file, .png or .ppm
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of render threads
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    pub fn apply(&self, settings: &mut RenderSettings) {
        if let Some(width) = self.width {
            settings.width = width;
        }
        if let Some(height) = self.height {
            settings.height = height;
        }
        if let Some(samples) = self.samples {
            settings.samples = samples;
        }
        if let Some(max_depth) = self.max_depth {
            settings.max_depth = max_depth;
        }
        if let Some(seed) = self.seed {
            settings.seed = Some(seed);
        }
        if let Some(output) = &self.output {
            settings.output = output.clone();
        }
        if let Some(threads) = self.threads {
            settings.threads = Some(threads);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arguments_override_settings() {
        let args = Args::parse_from([
            "raytracer",
            "--width",
            "64",
            "--samples",
            "8",
            "--seed",
            "99",
            "--output",
            "out.ppm",
        ]);
        let mut settings = RenderSettings::default();
        args.apply(&mut settings);

        assert_eq!(settings.width, 64);
        assert_eq!(settings.height, 225);
        assert_eq!(settings.samples, 8);
        assert_eq!(settings.seed, Some(99));
        assert_eq!(settings.output, PathBuf::from("out.ppm"));
        assert_eq!(args.scene, "random");
    }

    #[test]
    fn log_level_maps_to_filter() {
        let args = Args::parse_from(["raytracer", "--log-level", "debug"]);
        assert_eq!(LevelFilter::from(args.log_level), LevelFilter::Debug);
    }
}
