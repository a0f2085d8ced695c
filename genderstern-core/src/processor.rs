//! Processor API
//!
//! [`GenderProcessor`] ties the lexicon, the construct library, the
//! matcher and the assembler together behind one call. A processor is
//! immutable after construction and safe to share across threads;
//! processing holds no state between invocations.

use std::path::PathBuf;
use std::sync::Arc;

use crate::assembler::{Assembler, Output};
use crate::construct::ConstructLibrary;
use crate::error::Result;
use crate::lexicon::{self, Lexicon};
use crate::matcher::Matcher;

/// Gender-inclusive rewriting engine
#[derive(Debug)]
pub struct GenderProcessor {
    lexicon: Arc<Lexicon>,
    library: Arc<ConstructLibrary>,
}

impl GenderProcessor {
    /// Create a processor with the embedded lexicon and the standard
    /// construct library
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Start building a customized processor
    pub fn builder() -> GenderProcessorBuilder {
        GenderProcessorBuilder::default()
    }

    /// Process one text segment into replacement spans and a counter
    pub fn process(&self, text: &str) -> Output {
        let matches = Matcher::new(&self.lexicon, &self.library).find_matches(text);
        Assembler::new(&self.lexicon, &self.library).assemble(text, matches)
    }

    /// Rewrite a segment, returning the new text and the number of
    /// certain replacements
    pub fn rewrite(&self, text: &str) -> (String, usize) {
        let output = self.process(text);
        (output.apply(text), output.certain_count)
    }

    /// The lexicon in use
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// The construct library in use
    pub fn library(&self) -> &ConstructLibrary {
        &self.library
    }
}

#[derive(Debug, Clone, Default)]
enum LexiconSource {
    #[default]
    Embedded,
    Toml(String),
    Path(PathBuf),
}

/// Builder for [`GenderProcessor`]
#[derive(Debug, Clone, Default)]
pub struct GenderProcessorBuilder {
    lexicon: LexiconSource,
    library: Option<ConstructLibrary>,
}

impl GenderProcessorBuilder {
    /// Use a lexicon from a TOML string
    pub fn lexicon_toml(mut self, toml: impl Into<String>) -> Self {
        self.lexicon = LexiconSource::Toml(toml.into());
        self
    }

    /// Use a lexicon from a TOML file
    pub fn lexicon_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.lexicon = LexiconSource::Path(path.into());
        self
    }

    /// Use a custom construct library (the order is the match priority)
    pub fn library(mut self, library: ConstructLibrary) -> Self {
        self.library = Some(library);
        self
    }

    /// Build the processor
    pub fn build(self) -> Result<GenderProcessor> {
        let lexicon = match self.lexicon {
            LexiconSource::Embedded => lexicon::embedded()?,
            LexiconSource::Toml(source) => Arc::new(Lexicon::from_toml_str(&source)?),
            LexiconSource::Path(path) => {
                let source = std::fs::read_to_string(&path)?;
                Arc::new(Lexicon::from_toml_str(&source)?)
            }
        };
        let library = Arc::new(self.library.unwrap_or_default());
        Ok(GenderProcessor { lexicon, library })
    }
}

/// Rewrite a segment with the default processor (convenience)
pub fn rewrite_text(text: &str) -> Result<(String, usize)> {
    let processor = GenderProcessor::new()?;
    Ok(processor.rewrite(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, LexiconError};

    #[test]
    fn default_processor_rewrites() {
        let processor = GenderProcessor::new().unwrap();
        let (text, counter) = processor.rewrite("die Schüler und die Lehrerinnen");
        assert_eq!(text, "die Schüler*innen und die Lehrerinnen");
        assert_eq!(counter, 1);
    }

    #[test]
    fn processor_is_reusable_and_stateless() {
        let processor = GenderProcessor::new().unwrap();
        let first = processor.process("die Schüler");
        let second = processor.process("die Schüler");
        assert_eq!(first.certain_count, second.certain_count);
        assert_eq!(first.spans, second.spans);
    }

    #[test]
    fn custom_lexicon_toml() {
        let toml = r#"
            [metadata]
            code = "de"
            name = "mini"

            [[nouns]]
            lemma = "Pilot"
            masculine = ["Pilot", "Piloten", "Piloten", "Piloten", "Piloten", "Piloten", "Piloten", "Piloten"]
            feminine = ["Pilotin", "Pilotin", "Pilotin", "Pilotin", "Pilotinnen", "Pilotinnen", "Pilotinnen", "Pilotinnen"]
        "#;
        let processor = GenderProcessor::builder()
            .lexicon_toml(toml)
            .build()
            .unwrap();
        let (text, counter) = processor.rewrite("die Piloten");
        assert_eq!(text, "die Pilot*innen");
        assert_eq!(counter, 1);
        // The embedded nouns are gone
        let (text, _) = processor.rewrite("die Schüler");
        assert_eq!(text, "die Schüler");
    }

    #[test]
    fn invalid_lexicon_fails_at_build_time() {
        let err = GenderProcessor::builder()
            .lexicon_toml("[metadata]\ncode = \"de\"\nname = \"empty\"\n")
            .build()
            .unwrap_err();
        assert!(matches!(err, CoreError::Lexicon(LexiconError::Empty)));
    }

    #[test]
    fn convenience_function_matches_processor() {
        let (text, counter) = rewrite_text("50 Schüler").unwrap();
        assert_eq!(text, "50 Schüler*innen");
        assert_eq!(counter, 1);
    }
}
