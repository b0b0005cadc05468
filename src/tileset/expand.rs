//! Expanding one source block into the 18 variant pixel streams.

use crate::types::{Colour, Dimensions, Variant};

use super::mask::WallMask;
use super::replicate::{Replica, TileReplicator};
use super::shadow::Undershadow;

/// Lazy pixel rows of one variant.
///
/// Wall pixels keep the source colour at full opacity; floor pixels take
/// the shadow colour with the variant's undershadow alpha. Masks and
/// shadows are evaluated in tile-local coordinates, so a block spanning
/// several tiles repeats the variant once per tile.
pub struct VariantStream<I: Iterator<Item = Vec<Colour>>> {
    rows: Replica<I>,
    mask: WallMask,
    shadow: Undershadow,
    shadow_colour: Colour,
    tile_width: u32,
    tile_height: u32,
    y: u32,
}

impl<I: Iterator<Item = Vec<Colour>>> VariantStream<I> {
    pub fn variant(&self) -> &Variant {
        self.mask.variant()
    }

    fn pixel(&self, source: Colour, x: u32, y: u32) -> Colour {
        if self.mask.is_wall(x, y) {
            source.with_alpha(255)
        } else {
            self.shadow_colour.with_alpha(self.shadow.alpha(x, y))
        }
    }
}

impl<I: Iterator<Item = Vec<Colour>>> Iterator for VariantStream<I> {
    type Item = Vec<Colour>;

    fn next(&mut self) -> Option<Vec<Colour>> {
        let row = self.rows.next()?;
        let local_y = self.y % self.tile_height;
        self.y += 1;

        let pixels = row
            .iter()
            .zip((0..self.tile_width).cycle())
            .map(|(&source, local_x)| self.pixel(source, local_x, local_y))
            .collect();
        Some(pixels)
    }
}

/// Applies the variant masks and shadows to a source block.
pub struct TileExpander;

impl TileExpander {
    /// Produce one stream per variant from a block of source rows.
    ///
    /// The block is read once, however unevenly the streams are consumed.
    pub fn expand<I>(
        block: I,
        dimensions: &Dimensions,
        masks: &[WallMask; 18],
        shadows: &[Undershadow; 18],
        shadow_colour: Colour,
    ) -> Vec<VariantStream<I>>
    where
        I: Iterator<Item = Vec<Colour>>,
    {
        TileReplicator::replicate(block, masks.len())
            .into_iter()
            .zip(masks.iter().zip(shadows))
            .map(|(rows, (&mask, &shadow))| VariantStream {
                rows,
                mask,
                shadow,
                shadow_colour,
                tile_width: dimensions.tile_width(),
                tile_height: dimensions.tile_height(),
                y: 0,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tileset::mask::MaskGenerator;
    use crate::tileset::shadow::ShadowGenerator;
    use crate::types::{Pattern, ShadowOptions, WallOptions};
    use std::cell::Cell;

    const SOURCE: Colour = Colour::rgb(10, 20, 30);

    fn expand_uniform(
        dims: &Dimensions,
        thickness: f64,
        shadow_colour: Colour,
    ) -> Vec<VariantStream<impl Iterator<Item = Vec<Colour>>>> {
        let walls = WallOptions::new(thickness, 0.0).unwrap();
        let shadows = ShadowOptions::new(0.0, 1.0, shadow_colour).unwrap();
        let masks = MaskGenerator::build(dims, &walls);
        let undershadows = ShadowGenerator::build(dims, &walls, &shadows);
        let (w, h) = (dims.source_width() as usize, dims.source_height() as usize);
        let block = (0..h).map(move |_| vec![SOURCE.with_alpha(17); w]);
        TileExpander::expand(block, dims, &masks, &undershadows, shadows.colour())
    }

    #[test]
    fn test_eighteen_streams_in_order() {
        let dims = Dimensions::tile(4, 4).unwrap();
        let streams = expand_uniform(&dims, 0.5, Colour::BLACK);
        assert_eq!(streams.len(), 18);
        for (i, s) in streams.iter().enumerate() {
            assert_eq!(s.variant().index, i);
        }
    }

    #[test]
    fn test_full_keeps_source_opaque() {
        let dims = Dimensions::tile(4, 4).unwrap();
        let mut streams = expand_uniform(&dims, 0.5, Colour::BLACK);
        let rows: Vec<Vec<Colour>> = streams.remove(0).collect();
        assert_eq!(rows.len(), 4);
        for row in rows {
            assert_eq!(row, vec![SOURCE; 4]);
        }
    }

    #[test]
    fn test_hollow_small_tile() {
        let dims = Dimensions::tile(4, 4).unwrap();
        let red = Colour::rgb(255, 0, 0);
        let mut streams = expand_uniform(&dims, 0.5, red);
        let rows: Vec<Vec<Colour>> = streams.remove(1).collect();

        let mut walls = 0;
        for (y, row) in rows.iter().enumerate() {
            for (x, &pixel) in row.iter().enumerate() {
                let border = x == 0 || y == 0 || x == 3 || y == 3;
                if border {
                    assert_eq!(pixel, SOURCE);
                    walls += 1;
                } else {
                    assert_eq!(pixel, red.with_alpha(191));
                }
            }
        }
        assert_eq!(walls, 12);
    }

    #[test]
    fn test_multi_tile_block_repeats_variant() {
        let dims = Dimensions::survey(Pattern::Orthogonal, Some(4), Some(4), Some(2), Some(2))
            .unwrap();
        let mut streams = expand_uniform(&dims, 0.5, Colour::BLACK);
        let rows: Vec<Vec<Colour>> = streams.remove(3).collect();
        assert_eq!(rows.len(), 8);
        assert!(rows.iter().all(|r| r.len() == 8));
        // Top edge variant: row 0 of each tile is wall
        assert!(rows[0].iter().all(|&p| p == SOURCE));
        assert!(rows[4].iter().all(|&p| p == SOURCE));
        assert!(rows[2].iter().all(|&p| p.a == 0));
    }

    #[test]
    fn test_block_read_once() {
        let dims = Dimensions::tile(3, 5).unwrap();
        let walls = WallOptions::default();
        let shadows = ShadowOptions::default();
        let masks = MaskGenerator::build(&dims, &walls);
        let undershadows = ShadowGenerator::build(&dims, &walls, &shadows);

        let reads = Cell::new(0);
        let block = (0..5).map(|_| {
            reads.set(reads.get() + 1);
            vec![SOURCE; 3]
        });
        let streams = TileExpander::expand(block, &dims, &masks, &undershadows, Colour::BLACK);
        let total: usize = streams.into_iter().map(|s| s.count()).sum();

        assert_eq!(total, 18 * 5);
        assert_eq!(reads.get(), 5);
    }
}
