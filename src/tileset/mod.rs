//! Tileset generation.
//!
//! The pipeline runs configuration → masks and undershadows → expansion of
//! the source block into 18 variant streams → stitching into the atlas.
//! Everything is pulled lazily; the source block is read once.

mod expand;
mod mask;
mod replicate;
mod shadow;
mod stitch;

pub use expand::{TileExpander, VariantStream};
pub use mask::{MaskGenerator, WallBounds, WallMask};
pub use replicate::{Replica, TileReplicator};
pub use shadow::{darken, lighten, EdgeRamps, Ramp, ShadowGenerator, Undershadow};
pub use stitch::{Cell, Tileset, TilesetStitcher};

use crate::error::Result;
use crate::types::{Colour, Dimensions, ShadowOptions, WallOptions};

/// Turns source blocks into tilesets for one configuration.
#[derive(Debug, Clone)]
pub struct Tilifier {
    dimensions: Dimensions,
    masks: [WallMask; 18],
    shadows: [Undershadow; 18],
    shadow_colour: Colour,
}

impl Tilifier {
    /// Precompute the masks and undershadows of every variant.
    pub fn new(dimensions: Dimensions, walls: &WallOptions, shadows: &ShadowOptions) -> Self {
        Self {
            dimensions,
            masks: MaskGenerator::build(&dimensions, walls),
            shadows: ShadowGenerator::build(&dimensions, walls, shadows),
            shadow_colour: shadows.colour(),
        }
    }

    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    /// Build the tileset for a block of `source_height` rows of
    /// `source_width` pixels.
    pub fn tilify<I>(&self, block: I) -> Result<Tileset>
    where
        I: Iterator<Item = Vec<Colour>>,
    {
        let streams = TileExpander::expand(
            block,
            &self.dimensions,
            &self.masks,
            &self.shadows,
            self.shadow_colour,
        );
        TilesetStitcher::stitch(streams, &self.dimensions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Pattern;

    fn checker(dims: &Dimensions) -> impl Iterator<Item = Vec<Colour>> {
        let (w, h) = (dims.source_width(), dims.source_height());
        (0..h).map(move |y| {
            (0..w)
                .map(|x| Colour::rgb((x * 16) as u8, (y * 16) as u8, 200))
                .collect()
        })
    }

    #[test]
    fn test_small_tile_end_to_end() {
        let dims = Dimensions::tile(4, 4).unwrap();
        let walls = WallOptions::new(0.5, 0.0).unwrap();
        let shadows = ShadowOptions::new(0.0, 1.0, Colour::from_hex("FF0000").unwrap()).unwrap();
        let tilifier = Tilifier::new(dims, &walls, &shadows);

        let tileset = tilifier.tilify(checker(&dims)).unwrap();
        assert_eq!((tileset.width(), tileset.height()), (16, 20));

        // Hollow variant sits in cell (1, 0)
        let hollow = |x: u32, y: u32| tileset.get(4 + x, y).unwrap();
        let mut ring = 0;
        for y in 0..4 {
            for x in 0..4 {
                let pixel = hollow(x, y);
                if x == 0 || y == 0 || x == 3 || y == 3 {
                    assert_eq!(pixel, Colour::rgb((x * 16) as u8, (y * 16) as u8, 200));
                    ring += 1;
                } else {
                    assert_eq!(pixel, Colour::new(255, 0, 0, 191));
                }
            }
        }
        assert_eq!(ring, 12);

        // Blank cells are transparent black
        for y in 0..4 {
            for x in 8..16 {
                assert_eq!(tileset.get(x, y), Some(Colour::TRANSPARENT));
            }
        }
    }

    #[test]
    fn test_full_variant_copies_source() {
        let dims = Dimensions::tile(5, 3).unwrap();
        let tilifier = Tilifier::new(dims, &WallOptions::default(), &ShadowOptions::default());
        let tileset = tilifier.tilify(checker(&dims)).unwrap();
        for (y, row) in checker(&dims).enumerate() {
            for (x, colour) in row.into_iter().enumerate() {
                assert_eq!(tileset.get(x as u32, y as u32), Some(colour));
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let dims = Dimensions::survey(Pattern::Orthogonal, Some(7), Some(6), Some(2), Some(1))
            .unwrap();
        let walls = WallOptions::new(0.3, 0.0).unwrap();
        let shadows = ShadowOptions::new(0.2, 0.8, Colour::rgb(0, 0, 40)).unwrap();
        let tilifier = Tilifier::new(dims, &walls, &shadows);

        let first = tilifier.tilify(checker(&dims)).unwrap();
        let second = tilifier.tilify(checker(&dims)).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.width(), 7 * 2 * 4);
        assert_eq!(first.height(), 6 * 5);
    }

    #[test]
    fn test_short_block_fails() {
        let dims = Dimensions::tile(4, 4).unwrap();
        let tilifier = Tilifier::new(dims, &WallOptions::default(), &ShadowOptions::default());
        let block = checker(&dims).take(3);
        assert!(tilifier.tilify(block).is_err());
    }
}
