use clap::Parser;
use miette::Result;
use tilifier::cli::{Cli, Commands};
use tilifier::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => tilifier::cli::build::run(args, &printer)?,
        Commands::Init(args) => tilifier::cli::init::run(args, &printer)?,
        Commands::Variants(args) => tilifier::cli::variants::run(args)?,
        Commands::Completions(args) => tilifier::cli::completions::run(args)?,
    }

    Ok(())
}
