//! Embedded lexicon loading
//!
//! The German lexicon ships inside the crate and is parsed exactly once;
//! later callers share the cached `Arc`. A malformed embedded lexicon is
//! a build defect and surfaces as a load error on first use.

use std::sync::{Arc, OnceLock};

use crate::error::LexiconError;
use crate::lexicon::Lexicon;

static EMBEDDED: OnceLock<Result<Arc<Lexicon>, LexiconError>> = OnceLock::new();

/// The embedded German lexicon
pub fn embedded() -> Result<Arc<Lexicon>, LexiconError> {
    EMBEDDED
        .get_or_init(|| {
            Lexicon::from_toml_str(include_str!("../../configs/lexicon/german.toml")).map(Arc::new)
        })
        .clone()
}
