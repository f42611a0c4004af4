use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Sphere {sphere} uses undefined material '{material}'")]
    UnknownMaterial { material: String, sphere: usize },

    #[error(
        "Unknown scene '{0}', expected one of {} or a .toml file",
        crate::scenes::BUILTIN.join(", ")
    )]
    UnknownScene(String),

    #[error("Unsupported output format for {0:?}, use .png or .ppm")]
    UnsupportedFormat(PathBuf),

    #[error("Invalid render settings: {0}")]
    InvalidSettings(String),
}
