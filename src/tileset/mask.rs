//! Wall masks: which pixels of a variant are wall material.

use crate::types::{Coverage, Dimensions, Edge, Variant, WallOptions, VARIANTS};

/// Wall band limits of a tile.
///
/// A pixel is in the left band when `x < xmax`, the top band when
/// `y < ymax`, the right band when `x > xmin` and the bottom band when
/// `y > ymin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallBounds {
    pub xmax: i64,
    pub ymax: i64,
    pub xmin: i64,
    pub ymin: i64,
}

impl WallBounds {
    /// Band limits for the configured wall thickness.
    pub fn new(dimensions: &Dimensions, walls: &WallOptions) -> Self {
        let width = i64::from(dimensions.tile_width());
        let height = i64::from(dimensions.tile_height());
        let xmax = half_extent(width, walls.thickness());
        let ymax = half_extent(height, walls.thickness());

        Self {
            xmax,
            ymax,
            xmin: width - xmax - 1,
            ymin: height - ymax - 1,
        }
    }

    /// Whether a tile-local pixel lies in the given edge band.
    pub fn in_band(&self, edge: Edge, x: i64, y: i64) -> bool {
        match edge {
            Edge::Left => x < self.xmax,
            Edge::Top => y < self.ymax,
            Edge::Right => x > self.xmin,
            Edge::Bottom => y > self.ymin,
        }
    }
}

/// `floor(extent * 0.5 * ratio)`
pub(crate) fn half_extent(extent: i64, ratio: f64) -> i64 {
    (extent as f64 * 0.5 * ratio).floor() as i64
}

/// Wall/floor classification for one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallMask {
    variant: Variant,
    bounds: WallBounds,
}

impl WallMask {
    pub fn variant(&self) -> &Variant {
        &self.variant
    }

    /// True when the tile-local pixel `(x, y)` is wall.
    pub fn is_wall(&self, x: u32, y: u32) -> bool {
        let (x, y) = (i64::from(x), i64::from(y));
        match self.variant.coverage {
            Coverage::Full => true,
            Coverage::Bands(edges) => edges.iter().any(|&e| self.bounds.in_band(e, x, y)),
            Coverage::Corner(a, b) => self.bounds.in_band(a, x, y) && self.bounds.in_band(b, x, y),
        }
    }
}

/// Builds the wall masks of all variants.
pub struct MaskGenerator;

impl MaskGenerator {
    /// One mask per variant, in variant order.
    pub fn build(dimensions: &Dimensions, walls: &WallOptions) -> [WallMask; 18] {
        let bounds = WallBounds::new(dimensions, walls);
        VARIANTS.map(|variant| WallMask { variant, bounds })
    }
}
