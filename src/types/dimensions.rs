//! Pixel geometry of a tileset run.

use crate::error::{Result, TilifyError};

use super::Pattern;

/// Tile, source block and atlas sizes for one run.
///
/// All pixel sizes are strictly positive and the whole atlas fits in
/// memory addressable as RGBA bytes. A `Dimensions` is created once from
/// configuration and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    tile_width: u32,
    tile_height: u32,
    source_columns: u32,
    source_rows: u32,
    source_width: u32,
    source_height: u32,
    output_width: u32,
    output_height: u32,
}

impl Dimensions {
    /// Number of variants in the orthogonal pattern.
    pub const VARIANT_COUNT: usize = 18;

    /// Atlas grid columns.
    pub const ATLAS_COLUMNS: u32 = 4;

    /// Atlas grid rows.
    pub const ATLAS_ROWS: u32 = 5;

    /// Build dimensions, substituting defaults for unset or zero values.
    ///
    /// Missing tile sizes fall back to the pattern's default; missing
    /// source multiplicities fall back to 1. Fails when the derived source
    /// block or atlas size does not fit.
    pub fn survey(
        pattern: Pattern,
        width: Option<u32>,
        height: Option<u32>,
        columns: Option<u32>,
        rows: Option<u32>,
    ) -> Result<Self> {
        let (default_width, default_height) = pattern.default_tile_size();
        let positive_or = |value: Option<u32>, default: u32| {
            value.filter(|&v| v > 0).unwrap_or(default)
        };

        let tile_width = positive_or(width, default_width);
        let tile_height = positive_or(height, default_height);
        let source_columns = positive_or(columns, 1);
        let source_rows = positive_or(rows, 1);

        let too_large = || {
            TilifyError::config(
                format!(
                    "Tileset for {}x{} tiles in {}x{} blocks is too large",
                    tile_width, tile_height, source_columns, source_rows
                ),
                Some("Reduce the tile size or the number of tiles per block"),
            )
        };

        let source_width = tile_width.checked_mul(source_columns).ok_or_else(too_large)?;
        let source_height = tile_height.checked_mul(source_rows).ok_or_else(too_large)?;
        let output_width = source_width
            .checked_mul(Self::ATLAS_COLUMNS)
            .ok_or_else(too_large)?;
        let output_height = source_height
            .checked_mul(Self::ATLAS_ROWS)
            .ok_or_else(too_large)?;

        // RGBA byte count of the stitched atlas
        (output_width as usize)
            .checked_mul(output_height as usize)
            .and_then(|pixels| pixels.checked_mul(4))
            .ok_or_else(too_large)?;

        Ok(Self {
            tile_width,
            tile_height,
            source_columns,
            source_rows,
            source_width,
            source_height,
            output_width,
            output_height,
        })
    }

    /// Dimensions for a single-block source of the given tile size.
    pub fn tile(width: u32, height: u32) -> Result<Self> {
        Self::survey(Pattern::Orthogonal, Some(width), Some(height), None, None)
    }

    pub const fn tile_width(&self) -> u32 {
        self.tile_width
    }

    pub const fn tile_height(&self) -> u32 {
        self.tile_height
    }

    pub const fn source_columns(&self) -> u32 {
        self.source_columns
    }

    pub const fn source_rows(&self) -> u32 {
        self.source_rows
    }

    /// Width of the source block, and of one atlas cell.
    pub const fn source_width(&self) -> u32 {
        self.source_width
    }

    /// Height of the source block, and of one atlas cell.
    pub const fn source_height(&self) -> u32 {
        self.source_height
    }

    pub const fn output_width(&self) -> u32 {
        self.output_width
    }

    pub const fn output_height(&self) -> u32 {
        self.output_height
    }

    /// Number of tiles in one source block.
    pub const fn tiles_per_block(&self) -> u64 {
        self.source_columns as u64 * self.source_rows as u64
    }

    /// Number of blank cells padding the atlas.
    pub const fn blank_count() -> usize {
        (Self::ATLAS_COLUMNS * Self::ATLAS_ROWS) as usize - Self::VARIANT_COUNT
    }
}
