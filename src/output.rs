use std::error::Error;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use image::{ImageBuffer, Rgb};
use log::info;

use crate::film::Film;
use crate::math::Color;

// clamp high only, no gamma; negative channels saturate to 0 through the cast
fn to_byte(channel: f32) -> u8 {
    (channel.min(1.0) * 255.0) as u8
}

/// Binary P6 with a 255 max value.
pub fn encode_ppm(film: &Film<Color>) -> Vec<u8> {
    let header = format!("P6\n{} {}\n255\n", film.width, film.height);
    let mut out = Vec::with_capacity(header.len() + film.buffer.len() * 3);
    out.extend_from_slice(header.as_bytes());
    for pixel in film.buffer.iter() {
        out.push(to_byte(pixel.x));
        out.push(to_byte(pixel.y));
        out.push(to_byte(pixel.z));
    }
    out
}

pub fn save_ppm(film: &Film<Color>, path: &Path) -> Result<(), Box<dyn Error>> {
    let mut file = File::create(path)?;
    file.write_all(&encode_ppm(film))?;
    Ok(())
}

pub fn save_png(film: &Film<Color>, path: &Path) -> Result<(), Box<dyn Error>> {
    let buffer: ImageBuffer<Rgb<u8>, Vec<u8>> =
        ImageBuffer::from_fn(film.width as u32, film.height as u32, |x, y| {
            let pixel = film.at(x as usize, y as usize);
            Rgb([to_byte(pixel.x), to_byte(pixel.y), to_byte(pixel.z)])
        });
    buffer.save(path)?;
    Ok(())
}

/// Picks the encoder from the file extension: `.png` goes through the image
/// crate, anything else is written as PPM.
pub fn output_film(film: &Film<Color>, path: &Path) -> Result<(), Box<dyn Error>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("png") => save_png(film, path)?,
        _ => save_ppm(film, path)?,
    }
    info!("wrote {}x{} image to {}", film.width, film.height, path.display());
    Ok(())
}
