//! Tileset output.
//!
//! Writes finished tilesets as PNG files, or dumps raw rows for debugging.

use std::io::Write;
use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::error::{Result, TilifyError};
use crate::tileset::Tileset;

/// Suffix added to the input stem when no output path is given.
pub const OUTPUT_SUFFIX: &str = "_tileset";

/// Resolve where a tileset for `input` is written.
///
/// An explicit output keeps its stem and always gets a `.png` extension.
/// Otherwise the name is derived from the input (`wall.jpg` becomes
/// `wall_tileset.png`) inside `directory`, or next to the input.
pub fn output_path(input: &Path, output: Option<&Path>, directory: Option<&Path>) -> PathBuf {
    if let Some(output) = output {
        return output.with_extension("png");
    }

    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let name = format!("{}{}.png", stem, OUTPUT_SUFFIX);

    match directory.or_else(|| input.parent()) {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}

/// Write a tileset to a PNG file, handing its pixel buffer to the encoder.
pub fn write_png(tileset: Tileset, path: &Path) -> Result<()> {
    let (width, height) = (tileset.width(), tileset.height());
    let img = RgbaImage::from_raw(width, height, tileset.into_raw()).ok_or_else(|| {
        TilifyError::Image {
            path: path.to_path_buf(),
            message: format!("Pixel buffer does not match {}x{} tileset", width, height),
        }
    })?;

    img.save(path).map_err(|e| TilifyError::Image {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}

/// Print every row of a tileset as a list of channel bytes.
pub fn write_debug(tileset: &Tileset, out: &mut impl Write) -> Result<()> {
    for row in tileset.rows() {
        writeln!(out, "{:?}", row)?;
    }
    Ok(())
}
