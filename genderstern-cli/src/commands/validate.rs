//! Validate command implementation

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use genderstern_core::{lexicon, Lexicon};

use crate::error::CliError;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Lexicon TOML file (default: the embedded German lexicon)
    #[arg(short, long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        match &self.lexicon {
            Some(path) => {
                let source = crate::input::read_file(path)?;
                let lexicon = Lexicon::from_toml_str(&source)
                    .map_err(|e| CliError::InvalidLexicon(e.to_string()))?;
                println!("{}: OK", path.display());
                print_stats(&lexicon);
            }
            None => {
                let lexicon =
                    lexicon::embedded().map_err(|e| CliError::InvalidLexicon(e.to_string()))?;
                println!("embedded lexicon: OK");
                print_stats(&lexicon);
            }
        }
        Ok(())
    }
}

fn print_stats(lexicon: &Lexicon) {
    println!("  nouns:          {}", lexicon.len());
    println!("  surface forms:  {}", lexicon.surface_form_count());
    println!("  gendered stems: {}", lexicon.gendered_stem_count());
}
