//! Frequency transposition
//!
//! Inverts word → count into count → words, dropping words below a threshold.

use crate::counter::WordCounts;
use std::collections::BTreeMap;

/// Default inclusive lower bound on occurrences
pub const DEFAULT_MIN_FREQUENCY: u64 = 1;

/// Occurrence count → words sharing that count
///
/// Words inside a bucket keep the order in which the transposer met them,
/// which is first-seen order in the text unless [`FrequencyGroups::sort_words`]
/// was called.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyGroups {
    groups: BTreeMap<u64, Vec<String>>,
}

impl FrequencyGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `word` to the bucket for `frequency`
    pub fn push(&mut self, frequency: u64, word: &str) {
        self.groups
            .entry(frequency)
            .or_default()
            .push(word.to_string());
    }

    /// Sort every bucket by byte-wise word order
    pub fn sort_words(&mut self) {
        for words in self.groups.values_mut() {
            words.sort_unstable();
        }
    }

    pub fn get(&self, frequency: u64) -> Option<&[String]> {
        self.groups.get(&frequency).map(Vec::as_slice)
    }

    /// Number of distinct frequencies
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of words across all buckets
    pub fn word_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Buckets from the highest frequency down
    pub fn iter_descending(&self) -> impl Iterator<Item = (u64, &[String])> + '_ {
        self.groups
            .iter()
            .rev()
            .map(|(&freq, words)| (freq, words.as_slice()))
    }
}

/// Group words by count, keeping only counts of at least `min_frequency`
///
/// A threshold of zero keeps everything, same as one.
pub fn transpose(counts: &WordCounts, min_frequency: u64) -> FrequencyGroups {
    let mut groups = FrequencyGroups::new();

    for (word, count) in counts.iter() {
        if count >= min_frequency {
            groups.push(count, word);
        }
    }

    log::debug!(
        "Transposed {} words into {} frequency groups (min frequency {})",
        groups.word_count(),
        groups.len(),
        min_frequency
    );
    groups
}
