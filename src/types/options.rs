//! Wall and undershadow options.

use crate::error::{Result, TilifyError};

use super::Colour;

/// Default wall thickness ratio.
pub const DEFAULT_WALL_THICKNESS: f64 = 0.5;

/// Default undershadow thickness ratio.
pub const DEFAULT_SHADOW_THICKNESS: f64 = 0.1;

/// Default undershadow intensity.
pub const DEFAULT_SHADOW_INTENSITY: f64 = 1.0;

/// Wall geometry options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallOptions {
    thickness: f64,
    natural: f64,
}

impl WallOptions {
    /// Create wall options.
    ///
    /// `thickness` is the fraction of the tile half-extent covered by wall,
    /// `natural` the roughness of wall surfaces. Both must lie in [0, 1].
    pub fn new(thickness: f64, natural: f64) -> Result<Self> {
        Ok(Self {
            thickness: unit_ratio("thickness", thickness)?,
            natural: unit_ratio("natural", natural)?,
        })
    }

    pub const fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Roughness of wall surfaces. Carried for configuration; the
    /// orthogonal geometry draws straight walls.
    pub const fn natural(&self) -> f64 {
        self.natural
    }
}

impl Default for WallOptions {
    fn default() -> Self {
        Self {
            thickness: DEFAULT_WALL_THICKNESS,
            natural: 0.0,
        }
    }
}

/// Undershadow options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowOptions {
    thickness: f64,
    intensity: f64,
    colour: Colour,
}

impl ShadowOptions {
    /// Create undershadow options. Ratios must lie in [0, 1].
    pub fn new(thickness: f64, intensity: f64, colour: Colour) -> Result<Self> {
        Ok(Self {
            thickness: unit_ratio("shadow thickness", thickness)?,
            intensity: unit_ratio("shadow intensity", intensity)?,
            colour: colour.with_alpha(255),
        })
    }

    pub const fn thickness(&self) -> f64 {
        self.thickness
    }

    pub const fn intensity(&self) -> f64 {
        self.intensity
    }

    pub const fn colour(&self) -> Colour {
        self.colour
    }
}

impl Default for ShadowOptions {
    fn default() -> Self {
        Self {
            thickness: DEFAULT_SHADOW_THICKNESS,
            intensity: DEFAULT_SHADOW_INTENSITY,
            colour: Colour::BLACK,
        }
    }
}

/// Check that a ratio lies in [0, 1]. NaN is rejected.
fn unit_ratio(name: &str, value: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(TilifyError::config(
            format!("{} must be between 0 and 1, got {}", name, value),
            Some("Ratios run from none (0) to all (1)"),
        ))
    }
}
