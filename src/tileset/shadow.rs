//! Undershadows: soft alpha gradients cast by walls onto the floor.
//!
//! Each tile edge gets a one-dimensional linear ramp that is 1 at the wall
//! boundary and falls to 0 over the shadow margin. A variant's shadow
//! combines the ramps of its wall edges with [`darken`] (soft union) or,
//! for true corners, [`lighten`] (soft intersection).

use crate::types::{Coverage, Dimensions, Edge, ShadowOptions, Variant, WallOptions, VARIANTS};

use super::mask::half_extent;

/// A linear ramp between two positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ramp {
    start: f64,
    end: f64,
    rising: bool,
}

impl Ramp {
    /// 1 before `start`, 0 after `end`, linear in between.
    pub const fn low(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            rising: false,
        }
    }

    /// 0 before `start`, 1 after `end`, linear in between.
    pub const fn high(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            rising: true,
        }
    }

    /// Evaluate the ramp at position `p`.
    pub fn at(&self, p: f64) -> f64 {
        let (before, after) = if self.rising { (0.0, 1.0) } else { (1.0, 0.0) };
        if p < self.start {
            return before;
        }
        if p > self.end {
            return after;
        }

        let span = self.end - self.start;
        if span <= 0.0 {
            return before.max(after);
        }
        if self.rising {
            (p - self.start) / span
        } else {
            (self.end - p) / span
        }
    }
}

/// Soft union: `1 - Π(1 - t)`. Zero only if every input is zero.
pub fn darken(ts: impl IntoIterator<Item = f64>) -> f64 {
    1.0 - ts.into_iter().fold(1.0, |acc, t| acc * (1.0 - t))
}

/// Soft intersection: `Π(t)`. One only if every input is one.
pub fn lighten(ts: impl IntoIterator<Item = f64>) -> f64 {
    ts.into_iter().fold(1.0, |acc, t| acc * t)
}

/// The four edge ramps of a tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeRamps {
    left: Ramp,
    top: Ramp,
    right: Ramp,
    bottom: Ramp,
}

impl EdgeRamps {
    /// Ramps starting on the last wall pixel and spanning the shadow margin.
    pub fn new(dimensions: &Dimensions, walls: &WallOptions, shadows: &ShadowOptions) -> Self {
        let width = i64::from(dimensions.tile_width());
        let height = i64::from(dimensions.tile_height());

        let xmax = half_extent(width, walls.thickness()) - 1;
        let ymax = half_extent(height, walls.thickness()) - 1;
        let xmin = (width - xmax - 1) as f64;
        let ymin = (height - ymax - 1) as f64;
        let (xmax, ymax) = (xmax as f64, ymax as f64);

        let margin_x = width as f64 * 0.5 * shadows.thickness() + 2.0;
        let margin_y = height as f64 * 0.5 * shadows.thickness() + 2.0;

        Self {
            left: Ramp::low(xmax, xmax + margin_x),
            top: Ramp::low(ymax, ymax + margin_y),
            right: Ramp::high(xmin - margin_x, xmin),
            bottom: Ramp::high(ymin - margin_y, ymin),
        }
    }

    /// Shadow strength from one edge at a tile-local pixel.
    pub fn at(&self, edge: Edge, x: f64, y: f64) -> f64 {
        match edge {
            Edge::Left => self.left.at(x),
            Edge::Top => self.top.at(y),
            Edge::Right => self.right.at(x),
            Edge::Bottom => self.bottom.at(y),
        }
    }
}

/// Undershadow alpha for one variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Undershadow {
    variant: Variant,
    ramps: EdgeRamps,
    intensity: f64,
}

impl Undershadow {
    pub fn variant(&self) -> &Variant {
        &self.variant
    }

    /// Shadow strength in [0, 1] before intensity scaling.
    pub fn strength(&self, x: u32, y: u32) -> f64 {
        let (x, y) = (f64::from(x), f64::from(y));
        match self.variant.coverage {
            Coverage::Full => 0.0,
            Coverage::Bands(edges) => darken(edges.iter().map(|&e| self.ramps.at(e, x, y))),
            Coverage::Corner(a, b) => lighten([self.ramps.at(a, x, y), self.ramps.at(b, x, y)]),
        }
    }

    /// Alpha of the shadow colour at a tile-local pixel.
    pub fn alpha(&self, x: u32, y: u32) -> u8 {
        (255.0 * self.strength(x, y) * self.intensity) as u8
    }
}

/// Builds the undershadows of all variants.
pub struct ShadowGenerator;

impl ShadowGenerator {
    /// One undershadow per variant, in variant order.
    pub fn build(
        dimensions: &Dimensions,
        walls: &WallOptions,
        shadows: &ShadowOptions,
    ) -> [Undershadow; 18] {
        let ramps = EdgeRamps::new(dimensions, walls, shadows);
        let intensity = shadows.intensity();
        VARIANTS.map(|variant| Undershadow {
            variant,
            ramps,
            intensity,
        })
    }
}
