//! tilifier - Autotile tileset generator
//!
//! A library for deriving an 18-variant wall tileset from a single source
//! texture: wall masks, soft undershadows, and a fixed atlas layout.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod render;
pub mod tileset;
pub mod types;

pub use config::{load_manifest, resolve, Manifest, Overrides, Settings, MANIFEST_FILENAME};
pub use error::{Result, TilifyError};
pub use render::{
    block_rows, output_path, prepare_block, read_texture, test_block, write_debug, write_png,
    write_sheet_json, SheetMeta,
};
pub use tileset::{
    MaskGenerator, ShadowGenerator, TileExpander, TileReplicator, Tilifier, Tileset,
    TilesetStitcher,
};
pub use types::{
    Colour, Coverage, Dimensions, Edge, Pattern, ShadowOptions, Variant, WallOptions, VARIANTS,
};
