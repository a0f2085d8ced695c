//! genderstern command-line entry point

use clap::{Parser, Subcommand};
use genderstern_cli::commands::{ProcessArgs, ValidateArgs};

/// Gender-inclusive rewriting for German text
#[derive(Debug, Parser)]
#[command(name = "genderstern", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Rewrite text from files or stdin
    Process(ProcessArgs),
    /// Validate a lexicon file and print statistics
    Validate(ValidateArgs),
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Process(args) => args.execute(),
        Commands::Validate(args) => args.execute(),
    };
    if let Err(err) = result {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
