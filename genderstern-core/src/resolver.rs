//! Merged-form synthesis
//!
//! Given a matched noun, its article context and a set of (number, case)
//! readings, produces the candidate gender-merged surface strings. One
//! candidate per distinct rendering: a single candidate means the phrase
//! genders unambiguously, several mean the grammatical case is genuinely
//! ambiguous and every reading stays visible to the caller.

use crate::lexicon::{Lexicon, NounId};
use crate::types::{ArticleType, Gender, Number, NumberCase};

/// Synthesizes merged gendered forms from the lexicon
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> Resolver<'a> {
    /// Create a resolver
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Candidate renderings for the requested readings, in first-seen
    /// order and without duplicates
    ///
    /// An empty result means none of the readings needs gendering (the
    /// surface form already covers both genders).
    pub fn candidates(
        &self,
        noun: NounId,
        article: ArticleType,
        preserve: &str,
        cases: &[NumberCase],
    ) -> Vec<String> {
        let entry = self.lexicon.noun(noun);
        let mut out: Vec<String> = Vec::new();

        for nc in cases {
            let slot = nc.slot_index();
            let merged_article = self.lexicon.articles().merged(article, slot);
            let feminine = entry.form(Gender::Feminine, slot, article);

            let gendered = if nc.number == Number::Singular && feminine.ends_with("in") {
                // Schülerin -> Schüler*in: splice the marker in front of
                // the suffix being replaced, never a fixed offset
                format!("{}*in", &feminine[..feminine.len() - 2])
            } else if nc.number == Number::Plural && feminine.ends_with("innen") {
                format!("{}*innen", &feminine[..feminine.len() - 5])
            } else {
                let masculine = entry.form(Gender::Masculine, slot, article);
                if masculine == feminine {
                    // Already gender-neutral; only a two-gender article
                    // still forces a rendering
                    match merged_article {
                        Some(a) if a.is_pair() => feminine.to_string(),
                        _ => continue,
                    }
                } else if let Some(rest) = feminine.strip_prefix(masculine) {
                    format!("{masculine}*{rest}")
                } else if let Some(rest) = masculine.strip_prefix(feminine) {
                    format!("{feminine}*{rest}")
                } else {
                    format!("{masculine}*{feminine}")
                }
            };

            let mut rendered = String::new();
            if let Some(a) = merged_article {
                rendered.push_str(&a.render());
                rendered.push(' ');
            }
            rendered.push_str(preserve);
            rendered.push_str(&gendered);
            if !out.contains(&rendered) {
                out.push(rendered);
            }
        }

        out
    }
}
