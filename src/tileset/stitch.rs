//! Stitching variant streams into the atlas grid.

use crate::error::{Result, TilifyError};
use crate::types::{Colour, Dimensions};

/// A finished tileset: RGBA pixels, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tileset {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Tileset {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw channel-interleaved RGBA bytes.
    pub fn as_raw(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the tileset, returning its raw bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }

    /// Iterate over the rows as channel bytes.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.pixels.chunks_exact(self.width as usize * 4)
    }

    /// Get a pixel at the given position.
    pub fn get(&self, x: u32, y: u32) -> Option<Colour> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        let bytes = self.pixels.get(offset..offset + 4)?;
        Some(Colour::new(bytes[0], bytes[1], bytes[2], bytes[3]))
    }
}

/// One atlas cell: a variant index, or `None` for a blank.
pub type Cell = Option<usize>;

/// Arranges variant streams and blanks into the atlas grid.
pub struct TilesetStitcher;

impl TilesetStitcher {
    /// Row-major atlas cells.
    ///
    /// The first atlas row holds the first variants followed by the blanks;
    /// every later row holds variants only, in index order.
    pub fn placement() -> Vec<Cell> {
        let columns = Dimensions::ATLAS_COLUMNS as usize;
        let blanks = Dimensions::blank_count();
        let mut variants = 0..Dimensions::VARIANT_COUNT;

        let mut cells = Vec::with_capacity(columns * Dimensions::ATLAS_ROWS as usize);
        cells.extend(variants.by_ref().take(columns - blanks).map(Some));
        cells.extend(std::iter::repeat(None).take(blanks));
        cells.extend(variants.map(Some));
        cells
    }

    /// Atlas (column, row) of a variant.
    pub fn cell_of(variant: usize) -> Option<(u32, u32)> {
        let columns = Dimensions::ATLAS_COLUMNS as usize;
        Self::placement()
            .iter()
            .position(|&cell| cell == Some(variant))
            .map(|i| ((i % columns) as u32, (i / columns) as u32))
    }

    /// Stitch the variant streams, in variant order, into one tileset.
    ///
    /// Each stream must yield `source_height` rows of `source_width`
    /// pixels. A stream that ends early aborts the stitch.
    pub fn stitch<I, S>(streams: I, dimensions: &Dimensions) -> Result<Tileset>
    where
        I: IntoIterator<Item = S>,
        S: Iterator<Item = Vec<Colour>>,
    {
        let mut streams: Vec<S> = streams.into_iter().collect();
        let cell_width = dimensions.source_width() as usize;
        let cell_height = dimensions.source_height() as usize;
        let width = dimensions.output_width();
        let height = dimensions.output_height();

        let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
        let blank_row = vec![0u8; cell_width * 4];
        let placement = Self::placement();

        for atlas_row in placement.chunks(Dimensions::ATLAS_COLUMNS as usize) {
            for y in 0..cell_height {
                for cell in atlas_row {
                    let Some(variant) = *cell else {
                        pixels.extend_from_slice(&blank_row);
                        continue;
                    };

                    let row = streams
                        .get_mut(variant)
                        .and_then(|stream| stream.next())
                        .filter(|row| row.len() >= cell_width)
                        .ok_or_else(|| TilifyError::Exhausted {
                            stream: format!("variant {}", variant),
                            row: y,
                        })?;
                    for colour in &row[..cell_width] {
                        pixels.extend_from_slice(&colour.to_rgba());
                    }
                }
            }
        }

        Ok(Tileset {
            width,
            height,
            pixels,
        })
    }
}
