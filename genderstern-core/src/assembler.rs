//! Replacement assembly
//!
//! Turns retained matches into an ordered list of replacement spans over
//! the original segment, applying construct replace rules, invoking the
//! resolver and tracking the certain-replacement counter. Text outside
//! the spans is untouched; splicing the spans back yields the rewritten
//! segment.

use core::fmt;

use crate::construct::ConstructLibrary;
use crate::lexicon::Lexicon;
use crate::matcher::Match;
use crate::resolver::Resolver;
use crate::types::{Confidence, NumberCase};

/// Confidence of one replacement span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanConfidence {
    /// Unambiguous replacement from a certain match
    Certain,
    /// Unambiguous replacement from a possibly-false-positive match
    Uncertain,
    /// Several readings render differently; all are shown
    Ambiguous,
}

impl fmt::Display for SpanConfidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpanConfidence::Certain => write!(f, "certain"),
            SpanConfidence::Uncertain => write!(f, "uncertain"),
            SpanConfidence::Ambiguous => write!(f, "ambiguous"),
        }
    }
}

/// One replacement over the original segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementSpan {
    /// Byte offset of the replaced text
    pub start: usize,
    /// Byte offset one past the replaced text
    pub end: usize,
    /// The text being replaced
    pub original: String,
    /// The replacement (candidates joined with " / " when ambiguous)
    pub display: String,
    /// Span confidence
    pub confidence: SpanConfidence,
    /// Matched (number, case) readings, e.g. "pn,pa"
    pub cases: String,
}

/// Result of processing one segment
#[derive(Debug, Clone, Default)]
pub struct Output {
    /// Replacement spans, sorted by start offset, non-overlapping
    pub spans: Vec<ReplacementSpan>,
    /// Number of certain replacements
    pub certain_count: usize,
}

impl Output {
    /// Splice the replacements into the original segment
    pub fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for span in &self.spans {
            out.push_str(&text[last..span.start]);
            out.push_str(&span.display);
            last = span.end;
        }
        out.push_str(&text[last..]);
        out
    }
}

fn capitalize_first(s: &mut String) {
    let Some(first) = s.chars().next() else {
        return;
    };
    if first.is_lowercase() {
        let upper: String = first.to_uppercase().collect();
        s.replace_range(..first.len_utf8(), &upper);
    }
}

/// Builds replacement spans from matches
#[derive(Debug, Clone, Copy)]
pub struct Assembler<'a> {
    lexicon: &'a Lexicon,
    library: &'a ConstructLibrary,
}

impl<'a> Assembler<'a> {
    /// Create an assembler
    pub fn new(lexicon: &'a Lexicon, library: &'a ConstructLibrary) -> Self {
        Self { lexicon, library }
    }

    /// Assemble the output for one segment
    pub fn assemble(&self, text: &str, matches: Vec<Match>) -> Output {
        let resolver = Resolver::new(self.lexicon);
        let mut spans = Vec::new();
        let mut certain_count = 0;

        for m in matches {
            let rules = self.library.get(m.construct).globals.replace;
            let mut cases: Vec<NumberCase> = Vec::new();
            for nc in &m.possible {
                let forced = rules.apply(*nc);
                if !cases.contains(&forced) {
                    cases.push(forced);
                }
            }

            let mut candidates = resolver.candidates(m.noun, m.article, &m.preserve, &cases);
            if candidates.is_empty() {
                // Nothing to gender in any reading
                continue;
            }

            let original = &text[m.start..m.end];
            // Sentence-initial phrases keep their capitalization
            if original.chars().next().is_some_and(char::is_uppercase) {
                for candidate in &mut candidates {
                    capitalize_first(candidate);
                }
            }
            let (display, confidence) = if candidates.len() == 1 {
                let display = candidates.remove(0);
                if display == original {
                    // Already canonical, never re-mark
                    continue;
                }
                let confidence = match m.confidence {
                    Confidence::Certain => SpanConfidence::Certain,
                    Confidence::Uncertain => SpanConfidence::Uncertain,
                };
                (display, confidence)
            } else {
                (candidates.join(" / "), SpanConfidence::Ambiguous)
            };

            if confidence == SpanConfidence::Certain {
                certain_count += 1;
            }
            let annotation = m
                .possible
                .iter()
                .map(|nc| nc.to_string())
                .collect::<Vec<_>>()
                .join(",");
            spans.push(ReplacementSpan {
                start: m.start,
                end: m.end,
                original: original.to_string(),
                display,
                confidence,
                cases: annotation,
            });
        }

        Output {
            spans,
            certain_count,
        }
    }
}
