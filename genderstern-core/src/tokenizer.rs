//! Word extraction from a text segment
//!
//! Produces word, number and conjunction-slash tokens with their byte
//! offsets; everything between tokens (whitespace, punctuation) is
//! skipped but stays addressable through the offsets, so callers can
//! splice replacements back into the original segment losslessly.

/// One token with its position in the source segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Token surface text
    pub text: &'a str,
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
}

/// Lazy tokenizer over a text segment
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer over a segment
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn token(&mut self, start: usize, end: usize) -> Token<'a> {
        self.pos = end;
        Token {
            text: &self.text[start..end],
            start,
            end,
        }
    }
}

/// Characters that may appear inside a word token
///
/// Besides letters this covers the gender markers and bracketed suffixes
/// ("Schüler*in", "Schüler:innen", "Lehrer(innen)") so they arrive as a
/// single token.
fn is_word_char(ch: char) -> bool {
    ch.is_alphabetic() || matches!(ch, '-' | '*' | '_' | ':' | '(' | ')')
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        while self.pos < self.text.len() {
            let rest = &self.text[self.pos..];
            let bytes = rest.as_bytes();

            // The abbreviation "bzw." is the only token with a dot
            if bytes.len() >= 4 && bytes[..4].eq_ignore_ascii_case(b"bzw.") {
                return Some(self.token(self.pos, self.pos + 4));
            }

            let ch = rest.chars().next()?;

            if is_word_char(ch) {
                let mut end = self.pos + ch.len_utf8();
                for (idx, next) in rest.char_indices().skip(1) {
                    if is_word_char(next) {
                        end = self.pos + idx + next.len_utf8();
                    } else {
                        break;
                    }
                }
                return Some(self.token(self.pos, end));
            }

            if ch == '/' {
                return Some(self.token(self.pos, self.pos + 1));
            }

            if ch.is_ascii_digit() {
                // Digit run with optional interior dots, ending in a digit
                let mut end = self.pos + 1;
                for (idx, next) in rest.char_indices().skip(1) {
                    if next.is_ascii_digit() {
                        end = self.pos + idx + 1;
                    } else if next != '.' {
                        break;
                    }
                }
                return Some(self.token(self.pos, end));
            }

            self.pos += ch.len_utf8();
        }
        None
    }
}
