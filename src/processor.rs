//! Core processing engine
//!
//! Runs the pipeline: validate paths, load the blacklist, count words,
//! transpose counts into frequency groups and write the report.

use crate::blacklist::Blacklist;
use crate::cli::Args;
use crate::counter::{Counter, WordCounts};
use crate::error::Result;
use crate::output::write_report;
use crate::progress::{create_bytes_progress_bar, ProcessingStats};
use crate::tokenizer::Tokenizer;
use crate::transpose::{transpose, FrequencyGroups, DEFAULT_MIN_FREQUENCY};
use crate::validate::validate_filepath;

use anyhow::Context;
use colored::*;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

/// Processor configuration
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    pub text_file: PathBuf,
    pub blacklist_file: Option<PathBuf>,
    pub min_frequency: u64,
    pub sort_words: bool,
    /// Worker threads for counting; `None` counts sequentially
    pub threads: Option<usize>,
    pub show_progress: bool,
}

impl ProcessorConfig {
    /// Sequential configuration with default threshold
    pub fn new(text_file: impl Into<PathBuf>) -> Self {
        Self {
            text_file: text_file.into(),
            blacklist_file: None,
            min_frequency: DEFAULT_MIN_FREQUENCY,
            sort_words: false,
            threads: None,
            show_progress: false,
        }
    }

    pub fn from_args(args: &Args) -> anyhow::Result<Self> {
        if args.threads.is_some_and(|n| n > 1024) {
            anyhow::bail!("Too many threads requested: {:?}", args.threads);
        }

        Ok(Self {
            text_file: args.text_file.clone(),
            blacklist_file: args.blacklist_file.clone(),
            min_frequency: args.min_frequency(),
            sort_words: args.sort,
            threads: args.worker_threads(),
            show_progress: args.verbose && !args.quiet,
        })
    }
}

/// Main processor
pub struct Processor {
    config: ProcessorConfig,
    stats: Arc<ProcessingStats>,
}

impl Processor {
    pub fn new(config: ProcessorConfig) -> Self {
        Self {
            config,
            stats: Arc::new(ProcessingStats::new()),
        }
    }

    /// Run the pipeline and write the report to `out`
    ///
    /// Nothing is written unless every stage succeeded.
    pub fn run<W: Write>(&self, out: W) -> anyhow::Result<()> {
        let groups = self.analyze()?;

        let lines = write_report(&groups, out).context("Failed to write report")?;
        self.stats.set_report_lines(lines);
        log::info!("Wrote {} report lines", lines);

        Ok(())
    }

    /// Validate inputs, count words and group them by frequency
    pub fn analyze(&self) -> Result<FrequencyGroups> {
        validate_filepath(&self.config.text_file)?;
        if let Some(ref path) = self.config.blacklist_file {
            validate_filepath(path)?;
        }

        let blacklist = self.load_blacklist()?;
        let counts = self.count(&blacklist)?;
        self.stats.set_distinct_words(counts.len() as u64);

        let mut groups = transpose(&counts, self.config.min_frequency);
        if self.config.sort_words {
            groups.sort_words();
        }

        Ok(groups)
    }

    /// Fresh blacklist for this run
    fn load_blacklist(&self) -> Result<Blacklist> {
        match self.config.blacklist_file {
            Some(ref path) => Blacklist::load(path),
            None => Ok(Blacklist::builtin()),
        }
    }

    fn count(&self, blacklist: &Blacklist) -> Result<WordCounts> {
        let path = &self.config.text_file;
        let total_bytes = fs::metadata(path).map(|m| m.len()).unwrap_or(0);
        let tokenizer = Tokenizer::new();
        let counter = Counter::new(&tokenizer, blacklist, &self.stats);

        let pb = create_bytes_progress_bar(total_bytes, "Counting...", self.config.show_progress);
        let progress = |bytes: u64| pb.set_position(bytes);

        let counts = match self.config.threads.and_then(|n| self.build_pool(n)) {
            Some(pool) => counter.count_file_parallel(path, &pool, progress),
            None => counter.count_file(path, progress),
        };

        match counts {
            Ok(counts) => {
                pb.finish_with_message("Complete".green().to_string());
                self.stats.add_bytes(total_bytes);
                Ok(counts)
            }
            Err(e) => {
                pb.abandon_with_message("Failed".red().to_string());
                Err(e)
            }
        }
    }

    fn build_pool(&self, threads: usize) -> Option<rayon::ThreadPool> {
        match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
            Ok(pool) => {
                log::debug!("Counting on {} threads", threads);
                Some(pool)
            }
            Err(e) => {
                log::warn!("Could not start {} worker threads ({}), counting sequentially", threads, e);
                None
            }
        }
    }

    /// Get processing statistics
    pub fn stats(&self) -> Arc<ProcessingStats> {
        Arc::clone(&self.stats)
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }
}
