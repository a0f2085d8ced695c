//! Core grammatical types shared across the engine

use core::fmt;

/// Grammatical gender of a surface form
///
/// `Gendered` marks forms that already carry an inclusive marker
/// ("Schüler*in") and therefore stand for both genders at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    /// Masculine form
    Masculine,
    /// Feminine form
    Feminine,
    /// Already-gendered (merged) form
    Gendered,
}

impl Gender {
    /// Single-character code used in compact annotations
    pub fn code(&self) -> char {
        match self {
            Gender::Masculine => 'm',
            Gender::Feminine => 'f',
            Gender::Gendered => '*',
        }
    }
}

/// Grammatical number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Number {
    /// Singular
    Singular,
    /// Plural
    Plural,
}

impl Number {
    /// Both numbers in table order
    pub const ALL: [Number; 2] = [Number::Singular, Number::Plural];

    /// Single-character code ('s' or 'p')
    pub fn code(&self) -> char {
        match self {
            Number::Singular => 's',
            Number::Plural => 'p',
        }
    }
}

/// One of the four German grammatical cases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case {
    /// Nominative (wer/was)
    Nominative,
    /// Genitive (wessen)
    Genitive,
    /// Dative (wem)
    Dative,
    /// Accusative (wen/was)
    Accusative,
}

impl Case {
    /// All cases in declension-table order
    pub const ALL: [Case; 4] = [
        Case::Nominative,
        Case::Genitive,
        Case::Dative,
        Case::Accusative,
    ];

    /// Single-character code ('n', 'g', 'd', 'a')
    pub fn code(&self) -> char {
        match self {
            Case::Nominative => 'n',
            Case::Genitive => 'g',
            Case::Dative => 'd',
            Case::Accusative => 'a',
        }
    }

    fn index(&self) -> usize {
        match self {
            Case::Nominative => 0,
            Case::Genitive => 1,
            Case::Dative => 2,
            Case::Accusative => 3,
        }
    }
}

/// Kind of article preceding a noun
///
/// German adjective and noun declension depends on whether the phrase has
/// no article, a definite article, or an indefinite article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArticleType {
    /// No article ("Schüler")
    Strong,
    /// Definite article ("die Schüler")
    Weak,
    /// Indefinite article ("ein Schüler")
    Mixed,
}

impl ArticleType {
    /// All article types in table order
    pub const ALL: [ArticleType; 3] = [ArticleType::Strong, ArticleType::Weak, ArticleType::Mixed];

    /// Single-character code ('s', 'w', 'x')
    pub fn code(&self) -> char {
        match self {
            ArticleType::Strong => 's',
            ArticleType::Weak => 'w',
            ArticleType::Mixed => 'x',
        }
    }
}

/// A (number, case) pair addressing one slot of a declension table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumberCase {
    /// Grammatical number
    pub number: Number,
    /// Grammatical case
    pub case: Case,
}

impl NumberCase {
    /// Create a new pair
    pub fn new(number: Number, case: Case) -> Self {
        Self { number, case }
    }

    /// Index into an 8-slot declension table (sn sg sd sa pn pg pd pa)
    pub fn slot_index(&self) -> usize {
        let base = match self.number {
            Number::Singular => 0,
            Number::Plural => 4,
        };
        base + self.case.index()
    }

    /// All eight pairs in declension-table order
    pub fn all() -> impl Iterator<Item = NumberCase> {
        Number::ALL
            .into_iter()
            .flat_map(|number| Case::ALL.into_iter().map(move |case| NumberCase::new(number, case)))
    }
}

impl fmt::Display for NumberCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.number.code(), self.case.code())
    }
}

/// One grammatical interpretation of a surface form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading {
    /// Article context the form is valid in
    pub article: ArticleType,
    /// Gender of the form
    pub gender: Gender,
    /// Number of the form
    pub number: Number,
    /// Case of the form
    pub case: Case,
}

impl Reading {
    /// Create a new reading
    pub fn new(article: ArticleType, gender: Gender, number: Number, case: Case) -> Self {
        Self {
            article,
            gender,
            number,
            case,
        }
    }

    /// The (number, case) component of this reading
    pub fn number_case(&self) -> NumberCase {
        NumberCase::new(self.number, self.case)
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.article.code(),
            self.gender.code(),
            self.number.code(),
            self.case.code()
        )
    }
}

/// Confidence of a completed match
///
/// A match is `Certain` when every grammatical reading consistent with the
/// input satisfies the construct's restrictions, `Uncertain` when some
/// reading falls outside them (a potential false positive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Confidence {
    /// All consistent readings satisfy the construct
    Certain,
    /// Some consistent reading violates the construct
    Uncertain,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::Certain => write!(f, "certain"),
            Confidence::Uncertain => write!(f, "uncertain"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_index_covers_table_order() {
        let indices: Vec<usize> = NumberCase::all().map(|nc| nc.slot_index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn number_case_codes() {
        let nc = NumberCase::new(Number::Plural, Case::Genitive);
        assert_eq!(nc.to_string(), "pg");
        let nc = NumberCase::new(Number::Singular, Case::Nominative);
        assert_eq!(nc.to_string(), "sn");
    }

    #[test]
    fn reading_display_matches_compact_code() {
        let reading = Reading::new(
            ArticleType::Weak,
            Gender::Masculine,
            Number::Singular,
            Case::Nominative,
        );
        assert_eq!(reading.to_string(), "wmsn");
    }
}
