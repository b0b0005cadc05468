//! Option resolution.
//!
//! Command line values win over the manifest, which wins over the built-in
//! defaults. The result is validated once and never changes afterwards.

use std::path::PathBuf;

use crate::error::Result;
use crate::types::{
    Colour, Dimensions, Pattern, ShadowOptions, WallOptions, DEFAULT_SHADOW_INTENSITY,
    DEFAULT_SHADOW_THICKNESS, DEFAULT_WALL_THICKNESS,
};

use super::Manifest;

/// Option values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub pattern: Option<Pattern>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub columns: Option<u32>,
    pub rows: Option<u32>,
    pub thickness: Option<f64>,
    pub natural: Option<f64>,
    pub shadow_thickness: Option<f64>,
    pub shadow_intensity: Option<f64>,
    pub shadow_color: Option<Colour>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub pattern: Pattern,
    pub dimensions: Dimensions,
    pub walls: WallOptions,
    pub shadows: ShadowOptions,
    /// Directory derived output paths are placed in.
    pub output_dir: Option<PathBuf>,
}

/// Merge command line values over a manifest and validate the result.
pub fn resolve(manifest: &Manifest, overrides: &Overrides) -> Result<Settings> {
    let pattern = overrides.pattern.or(manifest.pattern).unwrap_or_default();
    pattern.ensure_supported()?;

    let dimensions = Dimensions::survey(
        pattern,
        overrides.width.or(manifest.width),
        overrides.height.or(manifest.height),
        overrides.columns.or(manifest.columns),
        overrides.rows.or(manifest.rows),
    )?;

    let walls = WallOptions::new(
        overrides
            .thickness
            .or(manifest.thickness)
            .unwrap_or(DEFAULT_WALL_THICKNESS),
        overrides.natural.or(manifest.natural).unwrap_or(0.0),
    )?;

    let shadow = &manifest.shadow;
    let shadows = ShadowOptions::new(
        overrides
            .shadow_thickness
            .or(shadow.thickness)
            .unwrap_or(DEFAULT_SHADOW_THICKNESS),
        overrides
            .shadow_intensity
            .or(shadow.intensity)
            .unwrap_or(DEFAULT_SHADOW_INTENSITY),
        overrides
            .shadow_color
            .or(shadow.color)
            .unwrap_or(Colour::BLACK),
    )?;

    Ok(Settings {
        pattern,
        dimensions,
        walls,
        shadows,
        output_dir: manifest.output.clone(),
    })
}
