//! Annotated text formatter
//!
//! Replacements are shown inline in brackets: `[die Schüler*innen]` for a
//! certain replacement, a trailing `?` for an uncertain one and `??` for
//! an ambiguous candidate list.

use std::io::Write;

use anyhow::Result;
use genderstern_core::{Output, SpanConfidence};

use super::OutputFormatter;

/// Inline-annotation formatter
pub struct TextFormatter<W: Write> {
    writer: W,
    summary: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a text formatter; `summary` controls the trailing counter line
    pub fn new(writer: W, summary: bool) -> Self {
        Self { writer, summary }
    }
}

fn sigil(confidence: SpanConfidence) -> &'static str {
    match confidence {
        SpanConfidence::Certain => "",
        SpanConfidence::Uncertain => " ?",
        SpanConfidence::Ambiguous => " ??",
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn segment(&mut self, _source: &str, _line: usize, text: &str, output: &Output) -> Result<()> {
        let mut annotated = String::with_capacity(text.len());
        let mut last = 0;
        for span in &output.spans {
            annotated.push_str(&text[last..span.start]);
            annotated.push('[');
            annotated.push_str(&span.display);
            annotated.push_str(sigil(span.confidence));
            annotated.push(']');
            last = span.end;
        }
        annotated.push_str(&text[last..]);
        writeln!(self.writer, "{annotated}")?;
        Ok(())
    }

    fn finish(&mut self, certain_total: usize) -> Result<()> {
        if self.summary {
            writeln!(self.writer, "certain replacements: {certain_total}")?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
