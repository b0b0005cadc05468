//! Variants command implementation.
//!
//! Prints the variant table with each variant's atlas cell.

use std::io::{self, Write};

use clap::Args;
use serde::Serialize;

use crate::error::Result;
use crate::tileset::TilesetStitcher;
use crate::types::VARIANTS;

/// List the tileset variants and their atlas cells
#[derive(Args, Debug)]
pub struct VariantsArgs {
    /// Print the table as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct VariantEntry {
    index: usize,
    name: &'static str,
    column: u32,
    row: u32,
    walls: String,
}

fn entries() -> Vec<VariantEntry> {
    VARIANTS
        .iter()
        .filter_map(|v| {
            let (column, row) = TilesetStitcher::cell_of(v.index)?;
            Some(VariantEntry {
                index: v.index,
                name: v.name,
                column,
                row,
                walls: v.coverage.to_string(),
            })
        })
        .collect()
}

/// One line per variant: index, name, atlas column and row, wall coverage.
pub fn variant_lines() -> Vec<String> {
    entries()
        .iter()
        .map(|e| {
            format!(
                "{:02}  {:<20}  {},{}  {}",
                e.index, e.name, e.column, e.row, e.walls
            )
        })
        .collect()
}

pub fn run(args: VariantsArgs) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if args.json {
        let json = serde_json::to_string_pretty(&entries()).map_err(io::Error::from)?;
        writeln!(stdout, "{}", json)?;
    } else {
        for line in variant_lines() {
            writeln!(stdout, "{}", line)?;
        }
    }
    Ok(())
}
