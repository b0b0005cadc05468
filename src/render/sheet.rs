//! Atlas metadata.
//!
//! Describes where each variant sits in the tileset using the
//! TexturePacker JSON Hash format, so game engines can slice it directly.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{Result, TilifyError};
use crate::tileset::TilesetStitcher;
use crate::types::{Dimensions, VARIANTS};

/// A variant frame in the tileset.
#[derive(Debug, Clone)]
pub struct Frame {
    pub name: String,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

/// Tileset metadata.
pub struct SheetMeta {
    pub frames: Vec<Frame>,
    pub image: String,
    pub size: (u32, u32),
}

impl SheetMeta {
    /// Frames for every variant of a tileset with the given dimensions.
    pub fn for_tileset(dimensions: &Dimensions, image: &str) -> Self {
        let (w, h) = (dimensions.source_width(), dimensions.source_height());
        let frames = VARIANTS
            .iter()
            .filter_map(|variant| {
                let (column, row) = TilesetStitcher::cell_of(variant.index)?;
                Some(Frame {
                    name: variant.name.to_string(),
                    x: column * w,
                    y: row * h,
                    w,
                    h,
                })
            })
            .collect();

        Self {
            frames,
            image: image.to_string(),
            size: (dimensions.output_width(), dimensions.output_height()),
        }
    }
}

/// Write tileset metadata as TexturePacker-compatible JSON Hash format.
pub fn write_sheet_json(meta: &SheetMeta, path: &Path) -> Result<()> {
    let output = TexturePackerJson::from_meta(meta);
    let json = serde_json::to_string_pretty(&output).map_err(|e| TilifyError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to serialize tileset metadata: {}", e),
    })?;
    fs::write(path, json).map_err(|e| TilifyError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write tileset metadata: {}", e),
    })?;
    Ok(())
}

// --- TexturePacker JSON serialization types ---

#[derive(Serialize)]
struct TexturePackerJson {
    frames: BTreeMap<String, TPFrame>,
    meta: TPMeta,
}

#[derive(Serialize)]
struct TPFrame {
    frame: TPRect,
    rotated: bool,
    trimmed: bool,
    #[serde(rename = "spriteSourceSize")]
    sprite_source_size: TPRect,
    #[serde(rename = "sourceSize")]
    source_size: TPSize,
}

#[derive(Serialize)]
struct TPRect {
    x: u32,
    y: u32,
    w: u32,
    h: u32,
}

#[derive(Serialize)]
struct TPSize {
    w: u32,
    h: u32,
}

#[derive(Serialize)]
struct TPMeta {
    app: String,
    version: String,
    image: String,
    size: TPSize,
    scale: String,
}

impl TexturePackerJson {
    fn from_meta(meta: &SheetMeta) -> Self {
        let frames = meta
            .frames
            .iter()
            .map(|f| {
                let frame = TPFrame {
                    frame: TPRect {
                        x: f.x,
                        y: f.y,
                        w: f.w,
                        h: f.h,
                    },
                    rotated: false,
                    trimmed: false,
                    sprite_source_size: TPRect {
                        x: 0,
                        y: 0,
                        w: f.w,
                        h: f.h,
                    },
                    source_size: TPSize { w: f.w, h: f.h },
                };
                (f.name.clone(), frame)
            })
            .collect();

        TexturePackerJson {
            frames,
            meta: TPMeta {
                app: "tilify".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                image: meta.image.clone(),
                size: TPSize {
                    w: meta.size.0,
                    h: meta.size.1,
                },
                scale: "1".to_string(),
            },
        }
    }
}
