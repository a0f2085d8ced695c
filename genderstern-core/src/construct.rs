//! Grammar constructs
//!
//! A construct describes one recognizable genderable phrase shape as an
//! ordered list of element constraints plus construct-wide restrictions.
//! The library is ordered: earlier constructs win ties. The order is
//! policy, not grammar — callers may assemble their own library and pass
//! it to the processor builder.

use crate::error::ConstructError;
use crate::types::{Case, Gender, Number, NumberCase};

/// One element constraint of a construct
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// An article token; optional articles are transparently skippable
    Article {
        /// Whether the phrase is valid without the article
        optional: bool,
    },
    /// A lexicon noun with a gender requirement
    Word {
        /// Required gender of the matched form
        gender: Gender,
    },
    /// A fixed token out of a set of alternatives
    Literal {
        /// Accepted surface forms
        alternatives: Vec<String>,
    },
    /// A numeric token
    Number {
        /// Keep the literal digits in front of the rendered phrase
        preserve: bool,
    },
}

/// Rewrites applied to the matched case set before rendering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaceRules {
    /// Force the output number
    pub number: Option<Number>,
    /// Force the output case
    pub case: Option<Case>,
}

impl ReplaceRules {
    /// Apply the rules to one (number, case) pair
    pub fn apply(&self, nc: NumberCase) -> NumberCase {
        NumberCase::new(self.number.unwrap_or(nc.number), self.case.unwrap_or(nc.case))
    }
}

/// Construct-wide restrictions on the matched readings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalConstraints {
    /// Allowed numbers (None = unrestricted)
    pub numbers: Option<Vec<Number>>,
    /// Allowed cases (None = unrestricted)
    pub cases: Option<Vec<Case>>,
    /// Rewrites applied before rendering
    pub replace: ReplaceRules,
}

impl GlobalConstraints {
    /// Whether a (number, case) pair satisfies the restrictions
    pub fn allows(&self, nc: NumberCase) -> bool {
        self.numbers
            .as_ref()
            .map_or(true, |numbers| numbers.contains(&nc.number))
            && self.cases.as_ref().map_or(true, |cases| cases.contains(&nc.case))
    }
}

/// One grammar rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Construct {
    /// Construct-wide restrictions and replace rules
    pub globals: GlobalConstraints,
    /// Element constraints in match order
    pub elements: Vec<Element>,
}

/// Ordered, validated construct library
#[derive(Debug, Clone)]
pub struct ConstructLibrary {
    constructs: Vec<Construct>,
}

fn conjunctions() -> Element {
    Element::Literal {
        alternatives: ["und", "oder", "/", "bzw."]
            .into_iter()
            .map(String::from)
            .collect(),
    }
}

fn plural_only() -> GlobalConstraints {
    GlobalConstraints {
        numbers: Some(vec![Number::Plural]),
        ..GlobalConstraints::default()
    }
}

fn singular_only() -> GlobalConstraints {
    GlobalConstraints {
        numbers: Some(vec![Number::Singular]),
        ..GlobalConstraints::default()
    }
}

fn noun_pair(globals: GlobalConstraints, first: Gender, second: Gender) -> Construct {
    Construct {
        globals,
        elements: vec![
            Element::Article { optional: true },
            Element::Word { gender: first },
            conjunctions(),
            Element::Article { optional: true },
            Element::Word { gender: second },
        ],
    }
}

impl ConstructLibrary {
    /// Validate and wrap an ordered list of constructs
    pub fn new(constructs: Vec<Construct>) -> Result<Self, ConstructError> {
        if constructs.is_empty() {
            return Err(ConstructError::EmptyLibrary);
        }
        for (index, construct) in constructs.iter().enumerate() {
            let Some(last) = construct.elements.last() else {
                return Err(ConstructError::EmptyConstruct { index });
            };
            if !matches!(last, Element::Word { .. }) {
                return Err(ConstructError::BadFinalElement { index });
            }
            for element in &construct.elements {
                if matches!(element, Element::Literal { alternatives } if alternatives.is_empty()) {
                    return Err(ConstructError::EmptyLiteral { index });
                }
            }
        }
        Ok(Self { constructs })
    }

    /// The shipped construct library
    pub fn standard() -> Self {
        let constructs = vec![
            // die Schüler => die Schüler*innen
            Construct {
                globals: plural_only(),
                elements: vec![
                    Element::Article { optional: true },
                    Element::Word {
                        gender: Gender::Masculine,
                    },
                ],
            },
            // (die) Schüler*in(nen) — already gendered, normalize only
            Construct {
                globals: GlobalConstraints::default(),
                elements: vec![
                    Element::Article { optional: true },
                    Element::Word {
                        gender: Gender::Gendered,
                    },
                ],
            },
            // (die) Schülerinnen und/oder/bzw. (die) Schüler => die Schüler*innen
            noun_pair(plural_only(), Gender::Feminine, Gender::Masculine),
            noun_pair(plural_only(), Gender::Masculine, Gender::Feminine),
            // der Schüler und/oder die Schülerin => der*die Schüler*in
            noun_pair(singular_only(), Gender::Masculine, Gender::Feminine),
            noun_pair(singular_only(), Gender::Feminine, Gender::Masculine),
            // 50 Schüler => 50 Schüler*innen
            Construct {
                globals: GlobalConstraints {
                    replace: ReplaceRules {
                        number: Some(Number::Plural),
                        case: None,
                    },
                    ..GlobalConstraints::default()
                },
                elements: vec![
                    Element::Number { preserve: true },
                    Element::Word {
                        gender: Gender::Masculine,
                    },
                ],
            },
        ];
        Self::new(constructs).expect("standard construct library must validate")
    }

    /// Number of constructs
    pub fn len(&self) -> usize {
        self.constructs.len()
    }

    /// Whether the library is empty (never true after validation)
    pub fn is_empty(&self) -> bool {
        self.constructs.is_empty()
    }

    /// Construct by library index
    pub fn get(&self, index: usize) -> &Construct {
        &self.constructs[index]
    }

    /// Iterate over constructs in priority order
    pub fn iter(&self) -> impl Iterator<Item = &Construct> {
        self.constructs.iter()
    }
}

impl Default for ConstructLibrary {
    fn default() -> Self {
        Self::standard()
    }
}
