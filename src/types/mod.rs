//! Core types for tilify.

mod colour;
mod dimensions;
mod options;
mod pattern;
mod variant;

pub use colour::Colour;
pub use dimensions::Dimensions;
pub use options::{
    ShadowOptions, WallOptions, DEFAULT_SHADOW_INTENSITY, DEFAULT_SHADOW_THICKNESS,
    DEFAULT_WALL_THICKNESS,
};
pub use pattern::Pattern;
pub use variant::{Coverage, Edge, Variant, VARIANTS};
