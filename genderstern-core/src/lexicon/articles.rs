//! Closed-class article tables
//!
//! German articles are heavily ambiguous: "der" can introduce a masculine
//! nominative singular as well as three feminine readings and a genitive
//! plural. The lookup table maps each article surface form to every
//! reading it can stand for; the declension table gives the article to
//! print in front of a merged noun phrase, which may itself be a
//! masculine/feminine pair ("der*die").

use std::collections::HashMap;

use crate::types::{ArticleType, Case, Gender, Number, Reading};

/// Readings of one article surface form
#[derive(Debug, Clone)]
pub struct ArticleEntry {
    /// Article kind (weak for definite, mixed for indefinite)
    pub article_type: ArticleType,
    /// Every grammatical reading this surface form can represent
    pub readings: Vec<Reading>,
}

/// Article rendering for one declension slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergedArticle {
    /// One form covers both genders
    One(&'static str),
    /// Masculine and feminine forms differ and must be merged
    Pair(&'static str, &'static str),
}

impl MergedArticle {
    /// Render the article, joining pairs with the gender marker
    pub fn render(&self) -> String {
        match self {
            MergedArticle::One(s) => (*s).to_string(),
            MergedArticle::Pair(m, f) => format!("{m}*{f}"),
        }
    }

    /// Whether this slot needs a merged two-gender article
    pub fn is_pair(&self) -> bool {
        matches!(self, MergedArticle::Pair(_, _))
    }
}

/// Article rendering per case slot for the weak declension
static WEAK_MERGED: [Option<MergedArticle>; 8] = [
    Some(MergedArticle::Pair("der", "die")),
    Some(MergedArticle::Pair("des", "der")),
    Some(MergedArticle::Pair("dem", "der")),
    Some(MergedArticle::Pair("den", "die")),
    Some(MergedArticle::One("die")),
    Some(MergedArticle::One("der")),
    Some(MergedArticle::One("den")),
    Some(MergedArticle::One("die")),
];

/// Article rendering per case slot for the mixed declension
///
/// "ein" has no plural, so the plural slots stay empty.
static MIXED_MERGED: [Option<MergedArticle>; 8] = [
    Some(MergedArticle::One("ein*e")),
    Some(MergedArticle::Pair("eines", "einer")),
    Some(MergedArticle::Pair("einem", "einer")),
    Some(MergedArticle::One("eine*n")),
    None,
    None,
    None,
    None,
];

/// Lookup tables for the closed class of recognized articles
#[derive(Debug, Clone)]
pub struct ArticleTables {
    entries: HashMap<&'static str, ArticleEntry>,
}

impl ArticleTables {
    /// Build the tables
    pub fn new() -> Self {
        use ArticleType::{Mixed, Weak};
        use Case::{Accusative, Dative, Genitive, Nominative};
        use Gender::{Feminine, Masculine};
        use Number::{Plural, Singular};

        fn r(
            article: ArticleType,
            gender: Gender,
            number: Number,
            case: Case,
        ) -> Reading {
            Reading::new(article, gender, number, case)
        }

        let mut entries = HashMap::new();
        entries.insert(
            "der",
            ArticleEntry {
                article_type: Weak,
                readings: vec![
                    r(Weak, Masculine, Singular, Nominative),
                    r(Weak, Masculine, Plural, Genitive),
                    r(Weak, Feminine, Singular, Genitive),
                    r(Weak, Feminine, Singular, Dative),
                    r(Weak, Feminine, Plural, Genitive),
                ],
            },
        );
        entries.insert(
            "des",
            ArticleEntry {
                article_type: Weak,
                readings: vec![r(Weak, Masculine, Singular, Genitive)],
            },
        );
        entries.insert(
            "dem",
            ArticleEntry {
                article_type: Weak,
                readings: vec![r(Weak, Masculine, Singular, Dative)],
            },
        );
        entries.insert(
            "den",
            ArticleEntry {
                article_type: Weak,
                readings: vec![
                    r(Weak, Masculine, Singular, Accusative),
                    r(Weak, Masculine, Plural, Dative),
                    r(Weak, Feminine, Plural, Dative),
                ],
            },
        );
        entries.insert(
            "die",
            ArticleEntry {
                article_type: Weak,
                readings: vec![
                    r(Weak, Masculine, Plural, Nominative),
                    r(Weak, Masculine, Plural, Accusative),
                    r(Weak, Feminine, Singular, Nominative),
                    r(Weak, Feminine, Singular, Accusative),
                    r(Weak, Feminine, Plural, Nominative),
                    r(Weak, Feminine, Plural, Accusative),
                ],
            },
        );
        entries.insert(
            "ein",
            ArticleEntry {
                article_type: Mixed,
                readings: vec![r(Mixed, Masculine, Singular, Nominative)],
            },
        );
        entries.insert(
            "eines",
            ArticleEntry {
                article_type: Mixed,
                readings: vec![r(Mixed, Masculine, Singular, Genitive)],
            },
        );
        entries.insert(
            "einem",
            ArticleEntry {
                article_type: Mixed,
                readings: vec![r(Mixed, Masculine, Singular, Dative)],
            },
        );
        entries.insert(
            "einen",
            ArticleEntry {
                article_type: Mixed,
                readings: vec![r(Mixed, Masculine, Singular, Accusative)],
            },
        );

        Self { entries }
    }

    /// Look up an article surface form (case-insensitive)
    pub fn lookup(&self, surface: &str) -> Option<&ArticleEntry> {
        if let Some(entry) = self.entries.get(surface) {
            return Some(entry);
        }
        let lowered = surface.to_lowercase();
        self.entries.get(lowered.as_str())
    }

    /// Article rendering for a declension slot, if any
    pub fn merged(&self, article: ArticleType, slot: usize) -> Option<&MergedArticle> {
        match article {
            ArticleType::Strong => None,
            ArticleType::Weak => WEAK_MERGED[slot].as_ref(),
            ArticleType::Mixed => MIXED_MERGED[slot].as_ref(),
        }
    }
}

impl Default for ArticleTables {
    fn default() -> Self {
        Self::new()
    }
}
