//! Tessellation patterns.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TilifyError};

/// The tessellation a tileset is generated for.
///
/// Only the orthogonal grid has variant geometry. The hex patterns parse
/// and carry their default tile sizes, but are rejected when resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pattern {
    #[default]
    Orthogonal,
    /// Hexagons with vertical columns.
    #[value(name = "hexv")]
    #[serde(rename = "hexv")]
    HexVertical,
    /// Hexagons with horizontal rows.
    #[value(name = "hexh")]
    #[serde(rename = "hexh")]
    HexHorizontal,
}

impl Pattern {
    /// Tile size used when none is configured, as (width, height).
    pub const fn default_tile_size(self) -> (u32, u32) {
        match self {
            Pattern::Orthogonal => (100, 100),
            Pattern::HexVertical => (97, 112),
            Pattern::HexHorizontal => (112, 97),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Pattern::Orthogonal => "orthogonal",
            Pattern::HexVertical => "hexv",
            Pattern::HexHorizontal => "hexh",
        }
    }

    /// Fail unless the pattern has implemented geometry.
    pub fn ensure_supported(self) -> Result<()> {
        match self {
            Pattern::Orthogonal => Ok(()),
            other => Err(TilifyError::config(
                format!("Pattern '{}' is not implemented", other),
                Some("Only the orthogonal pattern can be tilified"),
            )),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
