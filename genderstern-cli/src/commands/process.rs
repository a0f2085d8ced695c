//! Process command implementation
//!
//! Reads input files (or stdin), feeds each line to the core as one text
//! segment, and writes the results in the selected format. Files are
//! processed in parallel; the aggregate certain-replacement counter is
//! accumulated atomically and reported once at the end.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Context, Result};
use clap::Args;
use genderstern_core::{GenderProcessor, Output};
use rayon::prelude::*;

use crate::input;
use crate::output::{JsonFormatter, OutputFormatter, PlainFormatter, TextFormatter};

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or glob patterns (stdin when omitted)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Custom lexicon TOML (default: the embedded German lexicon)
    #[arg(short, long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// Suppress the summary line
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Rewritten text with inline replacement marks
    Text,
    /// Rewritten text only
    Plain,
    /// JSON report with spans and offsets
    Json,
}

struct ProcessedSegment {
    source: String,
    line: usize,
    text: String,
    output: Output,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        let processor = self.build_processor()?;

        let documents: Vec<(String, String)> = if self.input.is_empty() {
            vec![("-".to_string(), input::read_stdin()?)]
        } else {
            let files = input::resolve_patterns(&self.input)?;
            log::info!("processing {} file(s)", files.len());
            files
                .iter()
                .map(|path| {
                    input::read_file(path)
                        .map(|content| (path.display().to_string(), content))
                })
                .collect::<Result<_>>()?
        };

        // Segments are independent; only the counter is shared
        let counter = AtomicUsize::new(0);
        let processed: Vec<Vec<ProcessedSegment>> = documents
            .par_iter()
            .map(|(source, content)| {
                content
                    .lines()
                    .enumerate()
                    .map(|(index, line)| {
                        let output = processor.process(line);
                        counter.fetch_add(output.certain_count, Ordering::Relaxed);
                        ProcessedSegment {
                            source: source.clone(),
                            line: index + 1,
                            text: line.to_string(),
                            output,
                        }
                    })
                    .collect()
            })
            .collect();
        let certain_total = counter.load(Ordering::Relaxed);
        log::info!("{certain_total} certain replacement(s)");

        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(
                File::create(path).with_context(|| format!("creating {}", path.display()))?,
            )),
            None => Box::new(io::stdout().lock()),
        };
        let mut formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer, !self.quiet)),
            OutputFormat::Plain => Box::new(PlainFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        };
        for segment in processed.iter().flatten() {
            formatter.segment(&segment.source, segment.line, &segment.text, &segment.output)?;
        }
        formatter.finish(certain_total)?;

        Ok(())
    }

    fn build_processor(&self) -> Result<GenderProcessor> {
        let builder = GenderProcessor::builder();
        let builder = match &self.lexicon {
            Some(path) => builder.lexicon_path(path),
            None => builder,
        };
        builder.build().context("loading lexicon")
    }

    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}
