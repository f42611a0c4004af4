//! Turns accumulated radiance into bytes and bytes into image files.

use crate::{
    error::{Error, Result},
    render::Image,
};
use glam::Vec3;
use log::info;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Gamma 2 encoding, applied as a square root.
pub fn linear_to_gamma(linear: f32) -> f32 {
    linear.clamp(0.0, 1.0).sqrt()
}

/// Averages `samples` summed colors, gamma corrects and quantizes to 8 bits per channel.
pub fn encode_pixel(sum: Vec3, samples: u32) -> [u8; 3] {
    let color = sum / samples as f32;

    // Convert from [0, 1] to [0, 256)
    let quantize = |c: f32| (255.99 * linear_to_gamma(c)) as u8;

    [quantize(color.x), quantize(color.y), quantize(color.z)]
}

/// Writes the image, picking the format from the file extension.
pub fn save(image: &Image, path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("png") => image::save_buffer(
            path,
            &image.pixels,
            image.width,
            image.height,
            image::ColorType::Rgb8,
        )?,
        Some("ppm") => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_ppm(image, &mut writer)?;
            writer.flush()?;
        }
        _ => return Err(Error::UnsupportedFormat(path.to_path_buf())),
    }

    info!("Saved {}x{} image to {}", image.width, image.height, path.display());
    Ok(())
}

/// Plain text P3 pixmap, top row first.
pub fn write_ppm(image: &Image, writer: &mut impl Write) -> Result<()> {
    writeln!(writer, "P3\n{} {}\n255", image.width, image.height)?;
    for pixel in image.pixels.chunks_exact(3) {
        writeln!(writer, "{} {} {}", pixel[0], pixel[1], pixel[2])?;
    }

    Ok(())
}
