//! Layered error types
//!
//! Lexicon problems are fatal at load time, construct problems are fatal
//! when the library is built. The matching path itself is total and never
//! returns an error.

use thiserror::Error;

/// Errors raised while loading or validating a lexicon
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexiconError {
    /// The lexicon defines no nouns at all
    #[error("lexicon contains no nouns")]
    Empty,

    /// A declension table does not have exactly 8 slots
    #[error("noun '{lemma}': {gender} table has {found} forms, expected 8")]
    SlotCount {
        /// Lemma of the offending noun
        lemma: String,
        /// Which gender table is malformed
        gender: &'static str,
        /// Number of slots found
        found: usize,
    },

    /// A declension slot holds an empty surface form
    #[error("noun '{lemma}': empty surface form in {gender} table")]
    EmptyForm {
        /// Lemma of the offending noun
        lemma: String,
        /// Which gender table is malformed
        gender: &'static str,
    },

    /// Two nouns share the same lemma
    #[error("duplicate noun lemma '{0}'")]
    DuplicateLemma(String),

    /// The TOML source could not be parsed
    #[error("failed to parse lexicon config: {0}")]
    Parse(String),
}

/// Errors raised while validating a construct library
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstructError {
    /// A construct has no elements
    #[error("construct {index} has no elements")]
    EmptyConstruct {
        /// Library index of the offending construct
        index: usize,
    },

    /// Only a word element can complete a match
    #[error("construct {index}: final element must be a word")]
    BadFinalElement {
        /// Library index of the offending construct
        index: usize,
    },

    /// A literal element with nothing to match can never pass
    #[error("construct {index}: literal element has no alternatives")]
    EmptyLiteral {
        /// Library index of the offending construct
        index: usize,
    },

    /// The library itself is empty
    #[error("construct library is empty")]
    EmptyLibrary,
}

/// Top-level error type for engine construction
#[derive(Error, Debug)]
pub enum CoreError {
    /// Lexicon loading or validation failed
    #[error(transparent)]
    Lexicon(#[from] LexiconError),

    /// Construct library validation failed
    #[error(transparent)]
    Construct(#[from] ConstructError),

    /// Reading a lexicon file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for engine construction
pub type Result<T> = std::result::Result<T, CoreError>;
