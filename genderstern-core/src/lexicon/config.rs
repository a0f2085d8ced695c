//! Configuration structures for the lexicon TOML
//!
//! This module defines the schema of lexicon files. A noun carries one
//! 8-slot declension table per gender (sn sg sd sa pn pg pd pa); a slot is
//! either a single surface form or a table of per-article-type variants.

use serde::{Deserialize, Serialize};

/// Root lexicon configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// Lexicon metadata
    pub metadata: Metadata,
    /// Noun entries
    #[serde(default)]
    pub nouns: Vec<NounSpec>,
}

/// Lexicon metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    /// Language code (e.g. "de")
    pub code: String,
    /// Human-readable name
    pub name: String,
}

/// One noun with both gender tables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NounSpec {
    /// Identifying lemma (masculine nominative singular)
    pub lemma: String,
    /// Masculine declension, 8 slots
    pub masculine: Vec<FormSpec>,
    /// Feminine declension, 8 slots
    pub feminine: Vec<FormSpec>,
}

/// A declension slot: one form, or one form per article type
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormSpec {
    /// The same surface form regardless of article
    Single(String),
    /// Distinct forms after no/definite/indefinite article
    ByArticle {
        /// Form without an article
        strong: String,
        /// Form after a definite article
        weak: String,
        /// Form after an indefinite article
        mixed: String,
    },
}
