//! Blacklist loading
//!
//! A blacklist file lists words separated by commas or line breaks. Each
//! entry is trimmed of surrounding whitespace.

use crate::error::{Error, Result};
use ahash::RandomState;
use hashbrown::HashSet;
use std::fs;
use std::path::Path;

/// Tokens that are never counted, whatever the user supplies
pub const BUILTIN_EXCLUSIONS: [&str; 2] = ["", "'"];

/// Set of tokens excluded from counting
#[derive(Debug, Clone)]
pub struct Blacklist {
    words: HashSet<String, RandomState>,
}

impl Blacklist {
    /// A fresh blacklist holding only the built-in exclusions
    pub fn builtin() -> Self {
        let mut words = HashSet::with_hasher(RandomState::new());
        words.extend(BUILTIN_EXCLUSIONS.iter().map(|w| w.to_string()));
        Self { words }
    }

    /// Built-in exclusions plus the given words, trimmed
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut blacklist = Self::builtin();
        blacklist
            .words
            .extend(words.into_iter().map(|w| w.as_ref().trim().to_string()));
        blacklist
    }

    /// Parse blacklist file contents, line by line and then on commas
    pub fn parse(content: &str) -> Self {
        Self::from_words(content.lines().flat_map(|line| line.split(',')))
    }

    /// Read and parse a blacklist file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            log::error!("reading {:?} has failed!", path);
            Error::read(path, e)
        })?;

        let blacklist = Self::parse(&content);
        log::debug!(
            "Loaded {} blacklist entries from {:?}",
            blacklist.len().saturating_sub(BUILTIN_EXCLUSIONS.len()),
            path
        );
        Ok(blacklist)
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of entries, built-in exclusions included
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for Blacklist {
    fn default() -> Self {
        Self::builtin()
    }
}
