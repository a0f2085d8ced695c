//! Plain text formatter: the rewritten text only

use std::io::Write;

use anyhow::Result;
use genderstern_core::Output;

use super::OutputFormatter;

/// Rewritten-text formatter
pub struct PlainFormatter<W: Write> {
    writer: W,
}

impl<W: Write> PlainFormatter<W> {
    /// Create a plain formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for PlainFormatter<W> {
    fn segment(&mut self, _source: &str, _line: usize, text: &str, output: &Output) -> Result<()> {
        writeln!(self.writer, "{}", output.apply(text))?;
        Ok(())
    }

    fn finish(&mut self, _certain_total: usize) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
