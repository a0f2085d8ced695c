//! Noun lexicon: declension tables and derived lookup indexes
//!
//! The lexicon is loaded once from a TOML config, validated, and then
//! shared read-only for the lifetime of the process. Validation is strict
//! (exactly 8 forms per gender, no empty forms) because the resolver
//! indexes tables positionally and assumes they are fully populated.

pub mod articles;
pub mod config;
pub mod loader;

pub use articles::{ArticleEntry, ArticleTables, MergedArticle};
pub use config::{FormSpec, LexiconConfig, NounSpec};
pub use loader::embedded;

use std::collections::{HashMap, HashSet};

use smallvec::SmallVec;

use crate::error::LexiconError;
use crate::types::{ArticleType, Gender, Number, NumberCase, Reading};

/// Stable identifier of one noun entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NounId(u32);

impl NounId {
    /// Index into the lexicon's noun table
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Reading set attached to one surface form
pub type Readings = SmallVec<[Reading; 16]>;

/// One declension slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormSlot {
    /// The same surface form regardless of article
    Single(String),
    /// Distinct forms per article type (nominalized adjectives)
    ByArticle {
        /// Form without an article
        strong: String,
        /// Form after a definite article
        weak: String,
        /// Form after an indefinite article
        mixed: String,
    },
}

impl FormSlot {
    /// Surface form in the given article context
    pub fn form(&self, article: ArticleType) -> &str {
        match self {
            FormSlot::Single(s) => s,
            FormSlot::ByArticle {
                strong,
                weak,
                mixed,
            } => match article {
                ArticleType::Strong => strong,
                ArticleType::Weak => weak,
                ArticleType::Mixed => mixed,
            },
        }
    }

    fn variants(&self) -> [(ArticleType, &str); 3] {
        [
            (ArticleType::Strong, self.form(ArticleType::Strong)),
            (ArticleType::Weak, self.form(ArticleType::Weak)),
            (ArticleType::Mixed, self.form(ArticleType::Mixed)),
        ]
    }
}

/// One noun with both gender tables, 8 slots each
#[derive(Debug, Clone)]
pub struct NounEntry {
    lemma: String,
    masculine: Vec<FormSlot>,
    feminine: Vec<FormSlot>,
}

impl NounEntry {
    /// Identifying lemma
    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    /// Declined surface form for a gender, slot and article context
    ///
    /// Gendered requests fall back to the feminine table; the resolver
    /// only ever asks for masculine or feminine forms.
    pub fn form(&self, gender: Gender, slot: usize, article: ArticleType) -> &str {
        let table = match gender {
            Gender::Masculine => &self.masculine,
            Gender::Feminine | Gender::Gendered => &self.feminine,
        };
        table[slot].form(article)
    }
}

#[derive(Debug, Clone)]
struct FormIndexEntry {
    noun: NounId,
    readings: Readings,
}

#[derive(Debug, Clone, Copy)]
struct StemEntry {
    noun: NounId,
    singular: bool,
    plural: bool,
}

/// Validated lexicon with derived lookup indexes
#[derive(Debug)]
pub struct Lexicon {
    nouns: Vec<NounEntry>,
    articles: ArticleTables,
    form_index: HashMap<String, FormIndexEntry>,
    stem_index: HashMap<String, StemEntry>,
}

impl Lexicon {
    /// Build a lexicon from parsed configuration
    pub fn from_config(config: LexiconConfig) -> Result<Self, LexiconError> {
        if config.nouns.is_empty() {
            return Err(LexiconError::Empty);
        }

        let mut nouns = Vec::with_capacity(config.nouns.len());
        let mut lemmas = HashSet::new();
        for spec in config.nouns {
            if !lemmas.insert(spec.lemma.clone()) {
                return Err(LexiconError::DuplicateLemma(spec.lemma));
            }
            let masculine = convert_table(spec.masculine, &spec.lemma, "masculine")?;
            let feminine = convert_table(spec.feminine, &spec.lemma, "feminine")?;
            nouns.push(NounEntry {
                lemma: spec.lemma,
                masculine,
                feminine,
            });
        }

        let (form_index, stem_index) = build_indexes(&nouns);
        Ok(Self {
            nouns,
            articles: ArticleTables::new(),
            form_index,
            stem_index,
        })
    }

    /// Parse and build a lexicon from a TOML string
    pub fn from_toml_str(source: &str) -> Result<Self, LexiconError> {
        let config: LexiconConfig =
            toml::from_str(source).map_err(|e| LexiconError::Parse(e.to_string()))?;
        Self::from_config(config)
    }

    /// Number of nouns
    pub fn len(&self) -> usize {
        self.nouns.len()
    }

    /// Whether the lexicon holds no nouns (never true after validation)
    pub fn is_empty(&self) -> bool {
        self.nouns.is_empty()
    }

    /// Noun entry by id
    pub fn noun(&self, id: NounId) -> &NounEntry {
        &self.nouns[id.index()]
    }

    /// Iterate over all nouns
    pub fn nouns(&self) -> impl Iterator<Item = &NounEntry> {
        self.nouns.iter()
    }

    /// Article lookup tables
    pub fn articles(&self) -> &ArticleTables {
        &self.articles
    }

    /// Look up a plain surface form
    pub fn lookup_form(&self, surface: &str) -> Option<(NounId, &[Reading])> {
        self.form_index
            .get(surface)
            .map(|entry| (entry.noun, entry.readings.as_slice()))
    }

    /// Look up the stem of an already-gendered form ("Schüler" for
    /// "Schüler*in"), requiring the given number to be derivable
    pub fn lookup_gendered_stem(&self, stem: &str, number: Number) -> Option<NounId> {
        let entry = self.stem_index.get(stem)?;
        let available = match number {
            Number::Singular => entry.singular,
            Number::Plural => entry.plural,
        };
        available.then_some(entry.noun)
    }

    /// Number of distinct indexed surface forms
    pub fn surface_form_count(&self) -> usize {
        self.form_index.len()
    }

    /// Number of distinct gendered stems
    pub fn gendered_stem_count(&self) -> usize {
        self.stem_index.len()
    }
}

type Indexes = (HashMap<String, FormIndexEntry>, HashMap<String, StemEntry>);

fn build_indexes(nouns: &[NounEntry]) -> Indexes {
    let mut form_index: HashMap<String, FormIndexEntry> = HashMap::new();
    let mut stem_index: HashMap<String, StemEntry> = HashMap::new();

    for (index, noun) in nouns.iter().enumerate() {
        let id = NounId(index as u32);
        for (gender, table) in [
            (Gender::Masculine, &noun.masculine),
            (Gender::Feminine, &noun.feminine),
        ] {
            for (nc, slot) in NumberCase::all().zip(table.iter()) {
                for (article, surface) in slot.variants() {
                    let entry = form_index
                        .entry(surface.to_string())
                        .or_insert_with(|| FormIndexEntry {
                            noun: id,
                            readings: SmallVec::new(),
                        });
                    // First noun to claim a surface form keeps it
                    if entry.noun != id {
                        continue;
                    }
                    let reading = Reading::new(article, gender, nc.number, nc.case);
                    if !entry.readings.contains(&reading) {
                        entry.readings.push(reading);
                    }
                }
            }
        }

        let feminine_sn = noun.form(Gender::Feminine, 0, ArticleType::Strong);
        if let Some(stem) = feminine_sn.strip_suffix("in") {
            if !stem.is_empty() {
                add_stem(&mut stem_index, stem, id, Number::Singular);
            }
        }
        let feminine_pn = noun.form(Gender::Feminine, 4, ArticleType::Strong);
        if let Some(stem) = feminine_pn.strip_suffix("innen") {
            if !stem.is_empty() {
                add_stem(&mut stem_index, stem, id, Number::Plural);
            }
        }
    }

    (form_index, stem_index)
}

fn add_stem(stem_index: &mut HashMap<String, StemEntry>, stem: &str, id: NounId, number: Number) {
    let entry = stem_index.entry(stem.to_string()).or_insert(StemEntry {
        noun: id,
        singular: false,
        plural: false,
    });
    if entry.noun != id {
        return;
    }
    match number {
        Number::Singular => entry.singular = true,
        Number::Plural => entry.plural = true,
    }
}

fn convert_table(
    specs: Vec<FormSpec>,
    lemma: &str,
    gender: &'static str,
) -> Result<Vec<FormSlot>, LexiconError> {
    if specs.len() != 8 {
        return Err(LexiconError::SlotCount {
            lemma: lemma.to_string(),
            gender,
            found: specs.len(),
        });
    }
    let mut slots = Vec::with_capacity(8);
    for spec in specs {
        let slot = match spec {
            FormSpec::Single(s) => FormSlot::Single(s),
            FormSpec::ByArticle {
                strong,
                weak,
                mixed,
            } => FormSlot::ByArticle {
                strong,
                weak,
                mixed,
            },
        };
        let empty = match &slot {
            FormSlot::Single(s) => s.is_empty(),
            FormSlot::ByArticle {
                strong,
                weak,
                mixed,
            } => strong.is_empty() || weak.is_empty() || mixed.is_empty(),
        };
        if empty {
            return Err(LexiconError::EmptyForm {
                lemma: lemma.to_string(),
                gender,
            });
        }
        slots.push(slot);
    }
    Ok(slots)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_lexicon_loads_and_validates() {
        let lexicon = loader::embedded().unwrap();
        assert!(!lexicon.is_empty());
        assert!(lexicon.surface_form_count() > lexicon.len());
    }

    #[test]
    fn plain_form_lookup_returns_all_readings() {
        let lexicon = loader::embedded().unwrap();
        let (id, readings) = lexicon.lookup_form("Schülers").expect("genitive form");
        assert_eq!(lexicon.noun(id).lemma(), "Schüler");
        // Genitive singular masculine in every article context
        assert_eq!(readings.len(), 3);
        assert!(readings
            .iter()
            .all(|r| r.gender == Gender::Masculine && r.to_string().ends_with("sg")));
    }

    #[test]
    fn surface_form_shared_between_slots_collects_readings() {
        let lexicon = loader::embedded().unwrap();
        let (_, readings) = lexicon.lookup_form("Schüler").unwrap();
        let cases: HashSet<String> = readings.iter().map(|r| r.number_case().to_string()).collect();
        // "Schüler" is everything except genitive singular and dative plural
        let expected: HashSet<String> = ["sn", "sd", "sa", "pn", "pg", "pa"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(cases, expected);
    }

    #[test]
    fn gendered_stem_lookup() {
        let lexicon = loader::embedded().unwrap();
        let id = lexicon
            .lookup_gendered_stem("Schüler", Number::Plural)
            .expect("stem for Schüler*innen");
        assert_eq!(lexicon.noun(id).lemma(), "Schüler");
        // Umlauted stem differs from the masculine surface form
        let id = lexicon
            .lookup_gendered_stem("Ärzt", Number::Singular)
            .expect("stem for Ärzt*in");
        assert_eq!(lexicon.noun(id).lemma(), "Arzt");
        assert!(lexicon.lookup_gendered_stem("Arzt", Number::Singular).is_none());
    }

    #[test]
    fn missing_slot_is_fatal() {
        let toml_str = r#"
            [metadata]
            code = "de"
            name = "broken"

            [[nouns]]
            lemma = "Schüler"
            masculine = ["Schüler"]
            feminine = ["Schülerin"]
        "#;
        let err = Lexicon::from_toml_str(toml_str).unwrap_err();
        assert!(matches!(err, LexiconError::SlotCount { found: 1, .. }));
    }

    #[test]
    fn duplicate_lemma_is_fatal() {
        let noun = r#"
            [[nouns]]
            lemma = "Leser"
            masculine = ["Leser", "Lesers", "Leser", "Leser", "Leser", "Leser", "Lesern", "Leser"]
            feminine = ["Leserin", "Leserin", "Leserin", "Leserin", "Leserinnen", "Leserinnen", "Leserinnen", "Leserinnen"]
        "#;
        let toml_str = format!(
            "[metadata]\ncode = \"de\"\nname = \"dup\"\n{noun}{noun}"
        );
        let err = Lexicon::from_toml_str(&toml_str).unwrap_err();
        assert_eq!(err, LexiconError::DuplicateLemma("Leser".to_string()));
    }

    #[test]
    fn empty_lexicon_is_fatal() {
        let toml_str = "[metadata]\ncode = \"de\"\nname = \"empty\"\n";
        assert_eq!(
            Lexicon::from_toml_str(toml_str).unwrap_err(),
            LexiconError::Empty
        );
    }
}
