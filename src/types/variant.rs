//! The fixed variant table of the orthogonal pattern.
//!
//! Each of the 18 variants is described by which tile edges carry wall
//! material. Masks and undershadows are both derived from this table, so
//! the two always agree on a variant's geometry.

use std::fmt;

/// One edge band of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Left,
    Top,
    Right,
    Bottom,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Top, Edge::Right, Edge::Bottom];

    pub const fn name(self) -> &'static str {
        match self {
            Edge::Left => "left",
            Edge::Top => "top",
            Edge::Right => "right",
            Edge::Bottom => "bottom",
        }
    }
}

/// Wall coverage of a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coverage {
    /// The whole tile is wall.
    Full,
    /// Wall wherever any of the listed edge bands is.
    Bands(&'static [Edge]),
    /// Wall only where both edge bands overlap.
    Corner(Edge, Edge),
}

/// One entry of the variant table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variant {
    pub index: usize,
    pub name: &'static str,
    pub coverage: Coverage,
}

use Edge::{Bottom, Left, Right, Top};

const fn variant(index: usize, name: &'static str, coverage: Coverage) -> Variant {
    Variant {
        index,
        name,
        coverage,
    }
}

/// All variants in atlas order.
///
/// After the full and hollow tiles come four runs of corner, edge,
/// edge plus next corner, and three sides, moving clockwise from the
/// top-left, top-right, bottom-right and bottom-left corners.
pub const VARIANTS: [Variant; 18] = [
    variant(0, "full", Coverage::Full),
    variant(1, "hollow", Coverage::Bands(&[Left, Top, Right, Bottom])),
    // clockwise from top-left
    variant(2, "corner-top-left", Coverage::Corner(Top, Left)),
    variant(3, "edge-top", Coverage::Bands(&[Top])),
    variant(4, "elbow-top-right", Coverage::Bands(&[Top, Right])),
    variant(5, "open-left", Coverage::Bands(&[Top, Right, Bottom])),
    // clockwise from top-right
    variant(6, "corner-top-right", Coverage::Corner(Right, Top)),
    variant(7, "edge-right", Coverage::Bands(&[Right])),
    variant(8, "elbow-bottom-right", Coverage::Bands(&[Right, Bottom])),
    variant(9, "open-top", Coverage::Bands(&[Right, Bottom, Left])),
    // clockwise from bottom-right
    variant(10, "corner-bottom-right", Coverage::Corner(Bottom, Right)),
    variant(11, "edge-bottom", Coverage::Bands(&[Bottom])),
    variant(12, "elbow-bottom-left", Coverage::Bands(&[Bottom, Left])),
    variant(13, "open-right", Coverage::Bands(&[Bottom, Left, Top])),
    // clockwise from bottom-left
    variant(14, "corner-bottom-left", Coverage::Corner(Left, Bottom)),
    variant(15, "edge-left", Coverage::Bands(&[Left])),
    variant(16, "elbow-top-left", Coverage::Bands(&[Left, Top])),
    variant(17, "open-bottom", Coverage::Bands(&[Left, Top, Right])),
];

impl fmt::Display for Coverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coverage::Full => f.write_str("all"),
            Coverage::Bands(edges) => {
                let names: Vec<&str> = edges.iter().map(|e| e.name()).collect();
                f.write_str(&names.join(" | "))
            }
            Coverage::Corner(a, b) => write!(f, "{} & {}", a.name(), b.name()),
        }
    }
}
