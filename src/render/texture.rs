//! Source texture loading.
//!
//! Decodes the texture, forces it opaque and resamples it to the source
//! block size before it is fed to the pipeline row by row.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbaImage};

use crate::error::{Result, TilifyError};
use crate::types::{Colour, Dimensions};

/// Decode a texture file.
pub fn read_texture(path: &Path) -> Result<DynamicImage> {
    if !path.exists() {
        return Err(TilifyError::Io {
            path: path.to_path_buf(),
            message: "File not found".to_string(),
        });
    }

    image::open(path).map_err(|e| TilifyError::Image {
        path: path.to_path_buf(),
        message: format!("Failed to decode texture: {}", e),
    })
}

/// Resample a texture to `source_width × source_height`, fully opaque.
///
/// Uses a Lanczos filter so shrinking large textures does not alias.
pub fn prepare_block(texture: &DynamicImage, dimensions: &Dimensions) -> RgbaImage {
    let mut opaque = texture.to_rgba8();
    for pixel in opaque.pixels_mut() {
        pixel.0[3] = 255;
    }

    let (width, height) = (dimensions.source_width(), dimensions.source_height());
    if opaque.dimensions() == (width, height) {
        return opaque;
    }
    imageops::resize(&opaque, width, height, FilterType::Lanczos3)
}

/// Pixel rows of a prepared block.
pub fn block_rows(block: &RgbaImage) -> impl Iterator<Item = Vec<Colour>> + '_ {
    block
        .rows()
        .map(|row| row.map(|pixel| Colour::from_rgba(pixel.0)).collect())
}

/// A synthetic block of diagonal red/purple/blue stripes.
///
/// Handy for checking tilesets without a texture on hand.
pub fn test_block(dimensions: &Dimensions) -> impl Iterator<Item = Vec<Colour>> {
    const STRIPES: [Colour; 4] = [
        Colour::rgb(255, 0, 0),
        Colour::rgb(127, 0, 127),
        Colour::rgb(0, 0, 255),
        Colour::rgb(127, 0, 127),
    ];

    let (width, height) = (dimensions.source_width(), dimensions.source_height());
    (0..height).map(move |y| {
        (0..width)
            .map(|x| STRIPES[((x + y) % 4) as usize])
            .collect()
    })
}
