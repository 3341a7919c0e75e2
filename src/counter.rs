//! Word counting
//!
//! Counts are kept in first-seen order: iterating a [`WordCounts`] yields words
//! in the order they first appeared in the text. Bucket order in the report
//! follows from this.

use crate::blacklist::Blacklist;
use crate::encoding::EncodedLineIterator;
use crate::error::Result;
use crate::progress::ProcessingStats;
use crate::tokenizer::Tokenizer;

use ahash::RandomState;
use hashbrown::HashTable;
use rayon::prelude::*;
use rayon::ThreadPool;
use std::path::Path;

/// Lines buffered before a batch is handed to the thread pool
const BATCH_LINES: usize = 16 * 1024;

/// Word → occurrence count, remembering first-seen order
///
/// Words live only in `entries`; `index` maps a word's hash to its position
/// there.
#[derive(Debug, Clone, Default)]
pub struct WordCounts {
    hasher: RandomState,
    index: HashTable<usize>,
    entries: Vec<(String, u64)>,
}

impl WordCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `word`
    #[inline]
    pub fn record(&mut self, word: &str) {
        self.add(word, 1);
    }

    /// Count `n` occurrences of `word`
    pub fn add(&mut self, word: &str, n: u64) {
        if n == 0 {
            return;
        }
        let hash = self.hasher.hash_one(word);
        match self.position(hash, word) {
            Some(i) => self.entries[i].1 += n,
            None => {
                let entries = &self.entries;
                let hasher = &self.hasher;
                self.index.insert_unique(hash, entries.len(), |&i| {
                    hasher.hash_one(entries[i].0.as_str())
                });
                self.entries.push((word.to_string(), n));
            }
        }
    }

    fn position(&self, hash: u64, word: &str) -> Option<usize> {
        self.index
            .find(hash, |&i| self.entries[i].0 == word)
            .copied()
    }

    /// Fold `other` into `self`
    ///
    /// Words new to `self` are appended in `other`'s order, so merging the
    /// counts of consecutive text chunks left to right gives the same order
    /// as counting the whole text at once.
    pub fn merge(&mut self, other: WordCounts) {
        for (word, n) in other.entries {
            self.add(&word, n);
        }
    }

    pub fn get(&self, word: &str) -> Option<u64> {
        self.position(self.hasher.hash_one(word), word)
            .map(|i| self.entries[i].1)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// Words and counts in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.entries.iter().map(|(w, n)| (w.as_str(), *n))
    }
}

impl<'a> FromIterator<&'a str> for WordCounts {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut counts = Self::new();
        for word in iter {
            counts.record(word);
        }
        counts
    }
}

/// Tokenizes text and counts every token that is not blacklisted
pub struct Counter<'a> {
    tokenizer: &'a Tokenizer,
    blacklist: &'a Blacklist,
    stats: &'a ProcessingStats,
}

impl<'a> Counter<'a> {
    pub fn new(tokenizer: &'a Tokenizer, blacklist: &'a Blacklist, stats: &'a ProcessingStats) -> Self {
        Self {
            tokenizer,
            blacklist,
            stats,
        }
    }

    /// Count the tokens of one line into `counts`
    pub fn count_line(&self, line: &str, counts: &mut WordCounts) {
        let mut seen = 0u64;
        let mut skipped = 0u64;

        for token in self.tokenizer.tokens(line) {
            seen += 1;
            if self.blacklist.contains(token) {
                skipped += 1;
            } else {
                counts.record(token);
            }
        }

        self.stats.add_line();
        self.stats.add_tokens(seen, skipped);
    }

    /// Count a slice of lines into a fresh map
    pub fn count_lines<S: AsRef<str>>(&self, lines: &[S]) -> WordCounts {
        let mut counts = WordCounts::new();
        for line in lines {
            self.count_line(line.as_ref(), &mut counts);
        }
        counts
    }

    /// Read `path` line by line and count its words
    ///
    /// `progress` receives the number of bytes consumed after every line.
    pub fn count_file<F>(&self, path: &Path, mut progress: F) -> Result<WordCounts>
    where
        F: FnMut(u64),
    {
        let mut lines = open_lines(path)?;
        let mut counts = WordCounts::new();

        while let Some(line) = lines.next() {
            let line = line.inspect_err(|_| log_read_failure(path))?;
            self.count_line(&line, &mut counts);
            progress(lines.bytes_read());
        }

        log::debug!("Counted {} distinct words in {:?}", counts.len(), path);
        Ok(counts)
    }

    /// Like [`Counter::count_file`], tokenizing batches of lines on `pool`
    ///
    /// Lines are still read sequentially. Each batch is split into contiguous
    /// chunks whose counts are merged back in order, so the result is
    /// identical to the sequential count.
    pub fn count_file_parallel<F>(&self, path: &Path, pool: &ThreadPool, mut progress: F) -> Result<WordCounts>
    where
        F: FnMut(u64),
    {
        let mut lines = open_lines(path)?;
        let mut counts = WordCounts::new();
        let mut batch: Vec<String> = Vec::with_capacity(BATCH_LINES);
        let chunk_size = (BATCH_LINES / pool.current_num_threads().max(1)).max(1);

        loop {
            let line = lines.next().transpose().inspect_err(|_| log_read_failure(path))?;
            let done = line.is_none();

            if let Some(line) = line {
                batch.push(line);
            }

            if batch.len() >= BATCH_LINES || (done && !batch.is_empty()) {
                let partials: Vec<WordCounts> = pool.install(|| {
                    batch
                        .par_chunks(chunk_size)
                        .map(|chunk| self.count_lines(chunk))
                        .collect()
                });
                for partial in partials {
                    counts.merge(partial);
                }
                batch.clear();
                progress(lines.bytes_read());
            }

            if done {
                break;
            }
        }

        log::debug!(
            "Counted {} distinct words in {:?} on {} threads",
            counts.len(),
            path,
            pool.current_num_threads()
        );
        Ok(counts)
    }
}

fn open_lines(path: &Path) -> Result<EncodedLineIterator> {
    EncodedLineIterator::new(path).inspect_err(|_| log_read_failure(path))
}

fn log_read_failure(path: &Path) {
    log::error!("reading {:?} has failed!", path);
}
