//! Gender-inclusive rewriting for German prose
//!
//! This crate recognizes noun phrases that denote people — a bare plural
//! noun, a noun with an article, two nouns joined by a conjunction, a
//! numeral followed by a noun — resolves the German case/number/article
//! ambiguity against a declension lexicon, and synthesizes merged
//! gendered surface forms:
//!
//! ```
//! use genderstern_core::GenderProcessor;
//!
//! let processor = GenderProcessor::new().unwrap();
//! let (text, counter) = processor.rewrite("die Schüler lernen");
//! assert_eq!(text, "die Schüler*innen lernen");
//! assert_eq!(counter, 1);
//! ```
//!
//! The pipeline is a small compiler: tokenize, advance several competing
//! grammar constructs incrementally per token, keep the best completed
//! match per start offset, then render each match back into the segment.
//! Matches whose grammatical readings do not all satisfy the construct
//! are kept but marked uncertain; readings that render differently are
//! all surfaced instead of being collapsed.
//!
//! Processing is purely functional over the segment: a processor holds
//! only the shared read-only lexicon and construct library, so separate
//! segments can be processed from separate threads.

#![warn(missing_docs)]

pub mod assembler;
pub mod construct;
pub mod error;
pub mod lexicon;
pub mod matcher;
pub mod processor;
pub mod resolver;
pub mod tokenizer;
pub mod types;

// Re-export key types
pub use assembler::{Assembler, Output, ReplacementSpan, SpanConfidence};
pub use construct::{Construct, ConstructLibrary, Element, GlobalConstraints, ReplaceRules};
pub use error::{ConstructError, CoreError, LexiconError, Result};
pub use lexicon::{Lexicon, NounId};
pub use matcher::{Match, Matcher, Outcome};
pub use processor::{rewrite_text, GenderProcessor, GenderProcessorBuilder};
pub use resolver::Resolver;
pub use tokenizer::{Token, Tokenizer};
pub use types::{ArticleType, Case, Confidence, Gender, Number, NumberCase, Reading};
