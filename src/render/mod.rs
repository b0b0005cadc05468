//! Reading textures and writing tilesets.
//!
//! This module handles the image files on either side of the pipeline.

mod png;
mod sheet;
mod texture;

pub use png::{output_path, write_debug, write_png, OUTPUT_SUFFIX};
pub use sheet::{write_sheet_json, Frame, SheetMeta};
pub use texture::{block_rows, prepare_block, read_texture, test_block};
