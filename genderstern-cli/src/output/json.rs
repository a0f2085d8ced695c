//! JSON output formatter

use std::io::Write;

use anyhow::Result;
use genderstern_core::Output;
use serde::{Deserialize, Serialize};

use super::OutputFormatter;

/// One replacement span for serialization
#[derive(Debug, Serialize, Deserialize)]
pub struct SpanData {
    /// Byte offset of the replaced text within the segment
    pub start: usize,
    /// Byte offset one past the replaced text
    pub end: usize,
    /// The text being replaced
    pub original: String,
    /// The replacement text
    pub display: String,
    /// "certain", "uncertain" or "ambiguous"
    pub confidence: String,
    /// Matched (number, case) readings, e.g. "pn,pa"
    pub cases: String,
}

/// One processed segment for serialization
#[derive(Debug, Serialize, Deserialize)]
pub struct SegmentData {
    /// Input source ("-" for stdin)
    pub source: String,
    /// 1-based line number within the source
    pub line: usize,
    /// Original segment text
    pub text: String,
    /// Rewritten segment text
    pub rewritten: String,
    /// Certain replacements in this segment
    pub certain: usize,
    /// Replacement spans
    pub spans: Vec<SpanData>,
}

/// Full report for serialization
#[derive(Debug, Serialize, Deserialize)]
pub struct ReportData {
    /// All processed segments in input order
    pub segments: Vec<SegmentData>,
    /// Aggregate certain-replacement counter
    pub certain_replacements: usize,
}

/// JSON formatter - collects segments and writes one report
pub struct JsonFormatter<W: Write> {
    writer: W,
    segments: Vec<SegmentData>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            segments: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn segment(&mut self, source: &str, line: usize, text: &str, output: &Output) -> Result<()> {
        self.segments.push(SegmentData {
            source: source.to_string(),
            line,
            text: text.to_string(),
            rewritten: output.apply(text),
            certain: output.certain_count,
            spans: output
                .spans
                .iter()
                .map(|span| SpanData {
                    start: span.start,
                    end: span.end,
                    original: span.original.clone(),
                    display: span.display.clone(),
                    confidence: span.confidence.to_string(),
                    cases: span.cases.clone(),
                })
                .collect(),
        });
        Ok(())
    }

    fn finish(&mut self, certain_total: usize) -> Result<()> {
        let report = ReportData {
            segments: std::mem::take(&mut self.segments),
            certain_replacements: certain_total,
        };
        serde_json::to_writer_pretty(&mut self.writer, &report)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genderstern_core::GenderProcessor;

    #[test]
    fn report_round_trips_through_serde() {
        let processor = GenderProcessor::new().unwrap();
        let text = "die Schüler";
        let output = processor.process(text);

        let mut buffer = Vec::new();
        let mut formatter = JsonFormatter::new(&mut buffer);
        formatter.segment("-", 1, text, &output).unwrap();
        formatter.finish(output.certain_count).unwrap();

        let report: ReportData = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(report.certain_replacements, 1);
        assert_eq!(report.segments.len(), 1);
        let segment = &report.segments[0];
        assert_eq!(segment.rewritten, "die Schüler*innen");
        assert_eq!(segment.spans[0].confidence, "certain");
        assert_eq!(segment.spans[0].cases, "pn,pa");
    }
}
