//! # Word Freq
//!
//! Word frequency analysis for plain text files.
//!
//! ## Pipeline
//!
//! - **Tokenize**: split each line into runs of ASCII letters and apostrophes
//! - **Filter**: drop blacklisted tokens (the empty string and a lone `'` always)
//! - **Count**: case-sensitive occurrence counts, in first-seen order
//! - **Transpose**: group words by count, dropping counts below a threshold
//! - **Format**: one line per frequency, highest first
//!
//! ## Usage
//!
//! ```bash
//! # Every word with its frequency
//! word-freq book.txt
//!
//! # Words seen at least twice, skipping a blacklist
//! word-freq book.txt --min_occur 2 --blacklist_file blacklist.txt
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use word_freq::processor::{Processor, ProcessorConfig};
//!
//! let mut config = ProcessorConfig::new("book.txt");
//! config.min_frequency = 2;
//!
//! let processor = Processor::new(config);
//! processor.run(std::io::stdout().lock()).unwrap();
//! ```

pub mod blacklist;
pub mod cli;
pub mod counter;
pub mod encoding;
pub mod error;
pub mod output;
pub mod processor;
pub mod progress;
pub mod tokenizer;
pub mod transpose;
pub mod validate;

pub use blacklist::Blacklist;
pub use cli::Args;
pub use counter::{Counter, WordCounts};
pub use error::{Error, PathProblem, Result};
pub use processor::{Processor, ProcessorConfig};
pub use tokenizer::Tokenizer;
pub use transpose::{transpose, FrequencyGroups};
