//! Word tokenizer
//!
//! A token is a maximal run of ASCII letters and apostrophes. Everything else,
//! digits and underscores included, separates tokens.

use regex::Regex;

/// Pattern matching a single token
pub const TOKEN_PATTERN: &str = r"[A-Za-z']+";

/// Splits lines of text into word tokens
#[derive(Debug, Clone)]
pub struct Tokenizer {
    pattern: Regex,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(TOKEN_PATTERN).expect("token pattern is a valid regex"),
        }
    }

    /// Lazily yield the tokens of a single line, in order of appearance
    #[inline]
    pub fn tokens<'a>(&'a self, line: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pattern.find_iter(line).map(|m| m.as_str())
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
