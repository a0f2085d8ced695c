//! Incremental multi-construct matcher
//!
//! Walks the token stream once, keeping a set of in-flight match attempts
//! (one per construct still viable from the current start offset) and the
//! best completed match per start offset. Attempts advance through a pure
//! transition function returning an [`Outcome`]; there is no backtracking
//! and no re-tokenization.
//!
//! An attempt tracks two disjoint (number, case) sets: the readings that
//! satisfy the construct's restrictions (`possible`) and the readings the
//! data also supports but the construct forbids (`other`). A completion
//! with a non-empty `other` set is only probably correct and surfaces as
//! [`Confidence::Uncertain`] instead of being dropped.

use smallvec::SmallVec;

use crate::construct::{Construct, ConstructLibrary, Element};
use crate::lexicon::{Lexicon, NounId};
use crate::tokenizer::{Token, Tokenizer};
use crate::types::{ArticleType, Case, Confidence, Gender, Number, NumberCase, Reading};

/// Result of advancing an attempt by one token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The construct is no longer viable
    Reject,
    /// Still viable, more elements remain
    Continue,
    /// Fully matched
    Finished(Confidence),
}

/// A completed match over the token stream
#[derive(Debug, Clone)]
pub struct Match {
    /// Byte offset of the first matched token
    pub start: usize,
    /// Byte offset one past the last matched token
    pub end: usize,
    /// Library index of the matched construct
    pub construct: usize,
    /// The noun bound by the match
    pub noun: NounId,
    /// (number, case) readings satisfying the construct
    pub possible: Vec<NumberCase>,
    /// Readings the data supports but the construct forbids
    pub other: Vec<NumberCase>,
    /// Article context of the match
    pub article: ArticleType,
    /// Preserved literal text (numeral prefix)
    pub preserve: String,
    /// Whether all consistent readings satisfy the construct
    pub confidence: Confidence,
}

type NumberCases = SmallVec<[NumberCase; 8]>;

#[derive(Debug, Clone, Default)]
struct CasePartition {
    possible: NumberCases,
    other: NumberCases,
}

/// Mutable state of one in-flight match attempt
#[derive(Debug, Clone)]
struct MatchState {
    construct: usize,
    position: usize,
    start: usize,
    noun: Option<NounId>,
    article: ArticleType,
    restriction: Option<SmallVec<[Reading; 8]>>,
    cases: Option<CasePartition>,
    preserve: String,
}

/// Strip a gender marker suffix, returning the stem and the marked number
///
/// Recognized markers: `*in`, `_in`, `:in`, capital-I `In` and their
/// plural `…innen` counterparts. Plain lowercase "in"/"innen" endings are
/// ordinary feminine forms, not markers.
fn strip_gender_marker(text: &str) -> Option<(&str, Number)> {
    const SUFFIXES: [(&str, Number); 8] = [
        ("*innen", Number::Plural),
        ("_innen", Number::Plural),
        (":innen", Number::Plural),
        ("Innen", Number::Plural),
        ("*in", Number::Singular),
        ("_in", Number::Singular),
        (":in", Number::Singular),
        ("In", Number::Singular),
    ];
    for (suffix, number) in SUFFIXES {
        if let Some(base) = text.strip_suffix(suffix) {
            if !base.is_empty() {
                return Some((base, number));
            }
        }
    }
    None
}

/// Readings of an already-gendered form: the marker fixes the number, the
/// case and article context stay open
fn gendered_readings(number: Number) -> SmallVec<[Reading; 16]> {
    let mut readings = SmallVec::new();
    for article in ArticleType::ALL {
        for case in Case::ALL {
            readings.push(Reading::new(article, Gender::Gendered, number, case));
        }
    }
    readings
}

impl MatchState {
    fn new(construct: usize, start: usize) -> Self {
        Self {
            construct,
            position: 0,
            start,
            noun: None,
            article: ArticleType::Strong,
            restriction: None,
            cases: None,
            preserve: String::new(),
        }
    }

    /// Advance by one token, consuming one (or, for optional articles,
    /// several) element constraints
    fn advance(&mut self, token: &Token<'_>, lexicon: &Lexicon, construct: &Construct) -> Outcome {
        loop {
            let Some(element) = construct.elements.get(self.position) else {
                return Outcome::Reject;
            };
            self.position += 1;
            match element {
                Element::Article { optional } => {
                    if let Some(entry) = lexicon.articles().lookup(token.text) {
                        self.article = entry.article_type;
                        self.restriction = Some(entry.readings.iter().copied().collect());
                        return Outcome::Continue;
                    }
                    if *optional {
                        // Skippable: try the next element against this token
                        continue;
                    }
                    return Outcome::Reject;
                }
                Element::Word { gender } => {
                    return self.advance_word(token, lexicon, construct, *gender);
                }
                Element::Literal { alternatives } => {
                    return if alternatives.iter().any(|a| a == token.text) {
                        Outcome::Continue
                    } else {
                        Outcome::Reject
                    };
                }
                Element::Number { preserve } => {
                    let numeric = token.text.chars().next().is_some_and(|c| c.is_ascii_digit());
                    if !numeric {
                        return Outcome::Reject;
                    }
                    if *preserve {
                        self.preserve.push_str(token.text);
                        self.preserve.push(' ');
                    }
                    return Outcome::Continue;
                }
            }
        }
    }

    fn advance_word(
        &mut self,
        token: &Token<'_>,
        lexicon: &Lexicon,
        construct: &Construct,
        required: Gender,
    ) -> Outcome {
        let stripped = strip_gender_marker(token.text);
        let (noun, readings): (NounId, SmallVec<[Reading; 16]>) = match (required, stripped) {
            (Gender::Gendered, Some((base, number))) => {
                let Some(id) = lexicon.lookup_gendered_stem(base, number) else {
                    return Outcome::Reject;
                };
                (id, gendered_readings(number))
            }
            // A gendered element needs a marked token, and vice versa
            (Gender::Gendered, None) | (_, Some(_)) => return Outcome::Reject,
            (_, None) => {
                let Some((id, readings)) = lexicon.lookup_form(token.text) else {
                    return Outcome::Reject;
                };
                let filtered: SmallVec<[Reading; 16]> = readings
                    .iter()
                    .copied()
                    .filter(|r| r.gender == required)
                    .collect();
                if filtered.is_empty() {
                    return Outcome::Reject;
                }
                (id, filtered)
            }
        };

        // Once bound, the noun must stay consistent across elements
        if self.noun.is_some_and(|bound| bound != noun) {
            return Outcome::Reject;
        }
        self.noun = Some(noun);

        let readings = match self.restriction.take() {
            Some(restriction) => {
                let ignore_gender = required == Gender::Gendered;
                let filtered: SmallVec<[Reading; 16]> = readings
                    .into_iter()
                    .filter(|r| {
                        restriction.iter().any(|a| {
                            a.article == r.article
                                && (ignore_gender || a.gender == r.gender)
                                && a.number == r.number
                                && a.case == r.case
                        })
                    })
                    .collect();
                if filtered.is_empty() {
                    return Outcome::Reject;
                }
                filtered
            }
            None => readings,
        };

        let mut ncs: NumberCases = SmallVec::new();
        for reading in &readings {
            let nc = reading.number_case();
            if !ncs.contains(&nc) {
                ncs.push(nc);
            }
        }

        match &mut self.cases {
            None => {
                let mut partition = CasePartition::default();
                for nc in ncs {
                    if construct.globals.allows(nc) {
                        partition.possible.push(nc);
                    } else {
                        partition.other.push(nc);
                    }
                }
                self.cases = Some(partition);
            }
            Some(partition) => {
                partition.possible.retain(|nc| ncs.contains(nc));
                partition.other.retain(|nc| ncs.contains(nc));
            }
        }

        let partition = self.cases.as_ref().expect("partition initialized above");
        if partition.possible.is_empty() {
            return Outcome::Reject;
        }
        if self.position == construct.elements.len() {
            let confidence = if partition.other.is_empty() {
                Confidence::Certain
            } else {
                Confidence::Uncertain
            };
            return Outcome::Finished(confidence);
        }
        Outcome::Continue
    }

    fn into_match(self, end: usize, confidence: Confidence) -> Match {
        let cases = self.cases.expect("a finished match has matched a word");
        Match {
            start: self.start,
            end,
            construct: self.construct,
            noun: self.noun.expect("a finished match has bound a noun"),
            possible: cases.possible.into_vec(),
            other: cases.other.into_vec(),
            article: self.article,
            preserve: self.preserve,
            confidence,
        }
    }
}

/// Incremental matcher over a lexicon and construct library
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'a> {
    lexicon: &'a Lexicon,
    library: &'a ConstructLibrary,
}

impl<'a> Matcher<'a> {
    /// Create a matcher
    pub fn new(lexicon: &'a Lexicon, library: &'a ConstructLibrary) -> Self {
        Self { lexicon, library }
    }

    /// Find all retained matches in a text segment
    ///
    /// Returns at most one match per start offset, sorted by start offset
    /// and mutually non-overlapping.
    pub fn find_matches(&self, text: &str) -> Vec<Match> {
        let mut best: Vec<Match> = Vec::new();
        let mut in_flight: Vec<MatchState> = Vec::new();

        for token in Tokenizer::new(text) {
            let mut finished_here = false;

            let mut i = 0;
            while i < in_flight.len() {
                let construct = self.library.get(in_flight[i].construct);
                match in_flight[i].advance(&token, self.lexicon, construct) {
                    Outcome::Continue => i += 1,
                    Outcome::Reject => {
                        in_flight.remove(i);
                    }
                    Outcome::Finished(confidence) => {
                        let state = in_flight.remove(i);
                        record(&mut best, state.into_match(token.end, confidence));
                        finished_here = true;
                        if confidence == Confidence::Certain {
                            // A certain completion forecloses every
                            // competing interpretation from this start
                            in_flight.clear();
                            break;
                        }
                    }
                }
            }

            if in_flight.is_empty() && !finished_here {
                for (index, construct) in self.library.iter().enumerate() {
                    let mut state = MatchState::new(index, token.start);
                    match state.advance(&token, self.lexicon, construct) {
                        Outcome::Reject => {}
                        Outcome::Continue => in_flight.push(state),
                        Outcome::Finished(confidence) => {
                            record(&mut best, state.into_match(token.end, confidence));
                            if confidence == Confidence::Certain {
                                in_flight.clear();
                                break;
                            }
                        }
                    }
                }
            }
        }

        best
    }
}

/// Keep the single best completion per start offset: certain completions
/// are never displaced; among equals the larger end offset wins
fn record(best: &mut Vec<Match>, m: Match) {
    if let Some(last) = best.last_mut() {
        if last.start == m.start {
            let replace = match (last.confidence, m.confidence) {
                (Confidence::Certain, _) => false,
                (Confidence::Uncertain, Confidence::Certain) => true,
                (Confidence::Uncertain, Confidence::Uncertain) => m.end > last.end,
            };
            if replace {
                *last = m;
            }
            return;
        }
    }
    best.push(m);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon;

    fn find(text: &str) -> Vec<Match> {
        let lexicon = lexicon::embedded().unwrap();
        let library = ConstructLibrary::standard();
        Matcher::new(&lexicon, &library).find_matches(text)
    }

    fn codes(ncs: &[NumberCase]) -> Vec<String> {
        ncs.iter().map(|nc| nc.to_string()).collect()
    }

    #[test]
    fn strip_gender_marker_variants() {
        assert_eq!(
            strip_gender_marker("Schüler*in"),
            Some(("Schüler", Number::Singular))
        );
        assert_eq!(
            strip_gender_marker("Schüler:innen"),
            Some(("Schüler", Number::Plural))
        );
        assert_eq!(
            strip_gender_marker("SchülerInnen"),
            Some(("Schüler", Number::Plural))
        );
        assert_eq!(
            strip_gender_marker("Schüler_in"),
            Some(("Schüler", Number::Singular))
        );
        // Ordinary feminine forms are not markers
        assert_eq!(strip_gender_marker("Schülerin"), None);
        assert_eq!(strip_gender_marker("Finnen"), None);
        // A bare marker has no stem
        assert_eq!(strip_gender_marker("Innen"), None);
    }

    #[test]
    fn definite_plural_article_gives_a_certain_match() {
        let matches = find("die Schüler");
        assert_eq!(matches.len(), 1);
        let m = &matches[0];
        assert_eq!(m.confidence, Confidence::Certain);
        assert_eq!(m.start, 0);
        assert_eq!(m.end, "die Schüler".len());
        assert_eq!(m.article, ArticleType::Weak);
        assert_eq!(codes(&m.possible), vec!["pn", "pa"]);
        assert!(m.other.is_empty());
    }

    #[test]
    fn bare_noun_is_uncertain() {
        let matches = find("Schüler");
        assert_eq!(matches.len(), 1);
        let m = &matches[0];
        assert_eq!(m.confidence, Confidence::Uncertain);
        assert_eq!(m.article, ArticleType::Strong);
        assert_eq!(codes(&m.possible), vec!["pn", "pg", "pa"]);
        assert_eq!(codes(&m.other), vec!["sn", "sd", "sa"]);
    }

    #[test]
    fn singular_conjunction_collapses_to_one_certain_match() {
        let text = "der Schüler und die Schülerin";
        let matches = find(text);
        assert_eq!(matches.len(), 1);
        let m = &matches[0];
        assert_eq!(m.confidence, Confidence::Certain);
        assert_eq!((m.start, m.end), (0, text.len()));
        assert_eq!(codes(&m.possible), vec!["sn"]);
        assert!(m.other.is_empty());
    }

    #[test]
    fn plural_conjunction_without_articles() {
        let text = "Schülerinnen und Schüler";
        let matches = find(text);
        assert_eq!(matches.len(), 1);
        let m = &matches[0];
        assert_eq!(m.confidence, Confidence::Certain);
        assert_eq!((m.start, m.end), (0, text.len()));
        assert_eq!(m.article, ArticleType::Strong);
    }

    #[test]
    fn conjoined_nouns_must_agree() {
        // Different nouns never merge
        let matches = find("Schülerinnen und Lehrer");
        assert!(matches
            .iter()
            .all(|m| m.end <= "Schülerinnen".len() || m.start >= "Schülerinnen und ".len()));
    }

    #[test]
    fn numeral_match_preserves_the_digits() {
        let matches = find("50 Schüler");
        assert_eq!(matches.len(), 1);
        let m = &matches[0];
        assert_eq!(m.confidence, Confidence::Certain);
        assert_eq!(m.preserve, "50 ");
        assert_eq!(m.start, 0);
    }

    #[test]
    fn already_gendered_token_matches_the_gendered_construct() {
        let matches = find("Schüler*innen");
        assert_eq!(matches.len(), 1);
        let m = &matches[0];
        assert_eq!(m.confidence, Confidence::Certain);
        assert_eq!(codes(&m.possible), vec!["pn", "pg", "pd", "pa"]);
    }

    #[test]
    fn gendered_token_with_article_narrows_cases() {
        let matches = find("die Schüler:innen");
        assert_eq!(matches.len(), 1);
        assert_eq!(codes(&matches[0].possible), vec!["pn", "pa"]);
    }

    #[test]
    fn unknown_words_produce_no_match() {
        assert!(find("Die Katze sitzt auf dem Tisch").is_empty());
    }

    #[test]
    fn certain_completion_forecloses_longer_attempts() {
        // "die Schüler" completes certain, so the conjunction construct
        // never reaches the second noun phrase
        let text = "die Schüler und die Schülerinnen";
        let matches = find(text);
        assert_eq!(matches[0].end, "die Schüler".len());
        assert_eq!(matches[0].confidence, Confidence::Certain);
    }

    #[test]
    fn uncertain_completion_keeps_longer_attempts_alive() {
        // Bare "Schüler" finishes uncertain; the conjunction construct
        // stays in flight and its certain completion wins the start offset
        let text = "Schüler und Schülerinnen";
        let matches = find(text);
        assert_eq!(matches.len(), 1);
        let m = &matches[0];
        assert_eq!((m.start, m.end), (0, text.len()));
        assert_eq!(m.confidence, Confidence::Certain);
    }

    #[test]
    fn separate_phrases_match_separately() {
        let text = "die Schüler, die Lehrerinnen und Lehrer";
        let matches = find(text);
        assert_eq!(matches.len(), 2);
        assert!(matches[0].end <= matches[1].start);
        assert_eq!(matches[1].end, text.len());
    }

    #[test]
    fn sentence_initial_article_is_recognized() {
        let matches = find("Die Schüler lernen");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].confidence, Confidence::Certain);
        assert_eq!(matches[0].article, ArticleType::Weak);
    }

    #[test]
    fn mixed_article_binds_singular() {
        let matches = find("einem Kaufmann und einer Kauffrau");
        assert_eq!(matches.len(), 1);
        let m = &matches[0];
        assert_eq!(m.confidence, Confidence::Certain);
        assert_eq!(m.article, ArticleType::Mixed);
        assert_eq!(codes(&m.possible), vec!["sd"]);
    }
}
