//! Build command implementation.
//!
//! Turns one texture into an 18-variant autotile tileset PNG.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::{load_manifest, resolve, Overrides, Settings};
use crate::error::{Result, TilifyError};
use crate::output::{display_path, plural, Printer};
use crate::render::{
    block_rows, output_path, prepare_block, read_texture, test_block, write_debug,
    write_png, write_sheet_json, SheetMeta,
};
use crate::tileset::{Tileset, Tilifier};
use crate::types::{Colour, Dimensions, Pattern};

/// Stand-in input name used to derive outputs for the test block.
const TEST_BLOCK_NAME: &str = "test.png";

/// Build a tileset from a texture
#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Texture to tilify
    #[arg(required_unless_present = "test_block")]
    pub file: Option<PathBuf>,

    /// Output PNG path (default: <input>_tileset.png)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Tessellation pattern
    #[arg(long, short, value_enum)]
    pub pattern: Option<Pattern>,

    /// Tile width in pixels
    #[arg(long, short)]
    pub width: Option<u32>,

    /// Tile height in pixels
    #[arg(long, short = 'H')]
    pub height: Option<u32>,

    /// Tiles per source block, horizontally
    #[arg(long, short)]
    pub columns: Option<u32>,

    /// Tiles per source block, vertically
    #[arg(long, short)]
    pub rows: Option<u32>,

    /// Wall thickness, 0 to 1
    #[arg(long, short)]
    pub thickness: Option<f64>,

    /// Wall roughness, 0 to 1
    #[arg(long, short)]
    pub natural: Option<f64>,

    /// Undershadow thickness, 0 to 1
    #[arg(long)]
    pub shadow_thickness: Option<f64>,

    /// Undershadow intensity, 0 to 1
    #[arg(long)]
    pub shadow_intensity: Option<f64>,

    /// Undershadow colour as 6 hex digits
    #[arg(long)]
    pub shadow_color: Option<Colour>,

    /// Manifest to use instead of ./tilify.yaml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Also write TexturePacker JSON next to the PNG
    #[arg(long)]
    pub json: bool,

    /// Print raw pixel rows to stdout instead of writing a PNG
    #[arg(long)]
    pub debug: bool,

    /// Use a striped test block instead of a texture
    #[arg(long, conflicts_with = "file")]
    pub test_block: bool,
}

impl BuildArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            pattern: self.pattern,
            width: self.width,
            height: self.height,
            columns: self.columns,
            rows: self.rows,
            thickness: self.thickness,
            natural: self.natural,
            shadow_thickness: self.shadow_thickness,
            shadow_intensity: self.shadow_intensity,
            shadow_color: self.shadow_color,
        }
    }
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let cwd = std::env::current_dir()?;
    build(&args, &cwd, printer, &mut io::stdout().lock())
}

/// Run a build with manifest lookup and output directories relative to `dir`.
fn build(args: &BuildArgs, dir: &Path, printer: &Printer, stdout: &mut impl Write) -> Result<()> {
    let manifest = load_manifest(args.config.as_deref(), dir)?;
    let settings = resolve(&manifest, &args.overrides())?;
    let dims = settings.dimensions;

    let tileset = tilify(args, &settings, printer)?;

    if args.debug {
        write_debug(&tileset, stdout)?;
        printer.success(
            "Finished",
            &format!("{} ({}x{})", printer.dim("debug rows"), tileset.width(), tileset.height()),
        );
        return Ok(());
    }

    let input = args.file.as_deref().unwrap_or(Path::new(TEST_BLOCK_NAME));
    let output_dir = settings.output_dir.as_ref().map(|d| dir.join(d));
    let output = output_path(input, args.output.as_deref(), output_dir.as_deref());

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| TilifyError::Io {
                path: parent.to_path_buf(),
                message: format!("Failed to create output directory: {}", e),
            })?;
        }
    }

    let (width, height) = (tileset.width(), tileset.height());
    printer.status("Writing", &display_path(&output));
    write_png(tileset, &output)?;

    if args.json {
        let json_path = output.with_extension("json");
        let image = output
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        printer.status("Writing", &display_path(&json_path));
        write_sheet_json(&SheetMeta::for_tileset(&dims, &image), &json_path)?;
    }

    printer.success(
        "Finished",
        &format!(
            "{} ({}x{})",
            printer.cyan(&display_path(&output)),
            width,
            height
        ),
    );

    Ok(())
}

/// Read the source block and run the pipeline.
fn tilify(args: &BuildArgs, settings: &Settings, printer: &Printer) -> Result<Tileset> {
    let dims = &settings.dimensions;

    let block = match &args.file {
        Some(file) => {
            printer.status("Reading", &display_path(file));
            let texture = read_texture(file)?;
            Some(prepare_block(&texture, dims))
        }
        None => {
            printer.status("Reading", &printer.dim("test block"));
            None
        }
    };

    printer.info("Surveyed", &describe(dims));

    let tilifier = Tilifier::new(*dims, &settings.walls, &settings.shadows);
    printer.status(
        "Tilifying",
        &plural(Dimensions::VARIANT_COUNT, "variant", "variants"),
    );

    match block {
        Some(block) => tilifier.tilify(block_rows(&block)),
        None => tilifier.tilify(test_block(dims)),
    }
}

fn describe(dims: &Dimensions) -> String {
    let tiles = dims.tiles_per_block() as usize;
    format!(
        "{}x{} {} per block, {}x{} source, {}x{} tileset",
        dims.tile_width(),
        dims.tile_height(),
        plural(tiles, "tile", "tiles"),
        dims.source_width(),
        dims.source_height(),
        dims.output_width(),
        dims.output_height()
    )
}
