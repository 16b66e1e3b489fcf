//! Near-black background removal
//!
//! Icons exported on a black canvas carry their background as opaque
//! near-black pixels. This module reclassifies those pixels as fully
//! transparent and writes the result as PNG, the only output format.

use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType, PngEncoder},
    io::Reader as ImageReader,
    ColorType, ImageEncoder, Rgba, RgbaImage,
};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Exclusive upper bound for each of the red, green and blue channels of a
/// pixel that counts as background.
pub const DARK_THRESHOLD: u8 = 10;

/// Replacement for every background pixel.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Summary of a single stripping run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripStats {
    pub width: u32,
    pub height: u32,
    /// Number of pixels replaced with [`TRANSPARENT`]
    pub cleared: usize,
}

impl StripStats {
    pub fn total(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Whether a pixel is dark enough to be treated as background.
///
/// Alpha is not consulted: a dark pixel is cleared whatever its opacity.
pub fn is_near_black(pixel: &Rgba<u8>) -> bool {
    let [r, g, b, _] = pixel.0;
    r < DARK_THRESHOLD && g < DARK_THRESHOLD && b < DARK_THRESHOLD
}

/// Replace every near-black pixel with [`TRANSPARENT`] in place.
///
/// Other pixels, including their alpha, are left untouched. Returns the
/// number of pixels that were replaced.
pub fn strip_black_background(img: &mut RgbaImage) -> usize {
    let mut cleared = 0;
    for pixel in img.pixels_mut() {
        if is_near_black(pixel) {
            *pixel = TRANSPARENT;
            cleared += 1;
        }
    }
    cleared
}

/// Decode an image in any supported format and normalize it to RGBA8.
///
/// The format is detected from the file's leading bytes, falling back to the
/// extension, so a PNG saved under another name still decodes.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let source = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .with_context(|| format!("Failed to load image {}", path.display()))?
        .decode()
        .with_context(|| format!("Failed to load image {}", path.display()))?;

    Ok(source.to_rgba8())
}

/// Encode an RGBA image as PNG, whatever extension `path` carries
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_png(img, &mut writer)?;
    writer.flush().context("Failed to write PNG")?;
    Ok(())
}

fn write_png<W: Write>(img: &RgbaImage, w: W) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, FilterType::Adaptive);
    encoder
        .write_image(img.as_raw(), img.width(), img.height(), ColorType::Rgba8)
        .context("Failed to write PNG")?;
    Ok(())
}

/// Load `input`, make its near-black background transparent and save the
/// result to `output` as PNG.
///
/// The input is fully decoded before `output` is created, so a missing or
/// unreadable input never leaves an output file behind.
pub fn remove_black_background(input: &Path, output: &Path) -> Result<StripStats> {
    println!("Processing {}...", input.display());

    let mut img = load_rgba(input)?;
    let cleared = strip_black_background(&mut img);
    save_png(&img, output)?;

    let stats = StripStats {
        width: img.width(),
        height: img.height(),
        cleared,
    };

    println!(
        "✓ Successfully processed image: {} ({}x{}, {} of {} pixels made transparent)",
        output.display(),
        stats.width,
        stats.height,
        stats.cleared,
        stats.total()
    );

    Ok(stats)
}
