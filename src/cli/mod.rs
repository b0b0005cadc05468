pub mod build;
pub mod completions;
pub mod init;
pub mod variants;

use clap::{Parser, Subcommand};

/// tilify - Autotile tileset generator
#[derive(Parser, Debug)]
#[command(name = "tilify")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a tileset from a texture
    Build(build::BuildArgs),

    /// Initialize a tilify project (generates tilify.yaml)
    Init(init::InitArgs),

    /// List the tileset variants and their atlas cells
    Variants(variants::VariantsArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
