//! Output formatting

pub mod json;
pub mod plain;
pub mod text;

pub use json::JsonFormatter;
pub use plain::PlainFormatter;
pub use text::TextFormatter;

use anyhow::Result;
use genderstern_core::Output;

/// Streamed formatter over processed segments
///
/// One segment corresponds to one input line. `finish` is called once
/// after the last segment with the aggregate certain-replacement counter
/// (the badge value of the original extension).
pub trait OutputFormatter {
    /// Handle one processed segment
    fn segment(&mut self, source: &str, line: usize, text: &str, output: &Output) -> Result<()>;

    /// Finish after all segments
    fn finish(&mut self, certain_total: usize) -> Result<()>;
}
