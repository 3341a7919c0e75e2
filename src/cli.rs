//! Command-line interface definition for word-freq
//!
//! Flag names keep their underscore spelling (`--min_occur`,
//! `--blacklist_file`) for compatibility with existing scripts.

use clap::Parser;
use std::path::PathBuf;

/// Parse a given text and print out the frequency of words
///
/// Optionally omit the words listed in a comma separated text file and set a
/// lower limit on the frequency of reported words.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "word-freq",
    author = "m0h1nd4",
    version,
    about = "Parse a given text and print out the frequency of words",
    long_about = r#"
Parse a given text and print out the frequency of words.

Words are runs of ASCII letters and apostrophes; counting is case-sensitive.
Words sharing a frequency are printed on one line, highest frequency first.
Within a line, words appear in the order they first occur in the text
(or alphabetically with --sort).

EXAMPLES:
    # Every word with its frequency
    word-freq book.txt

    # Only words that occur at least twice
    word-freq book.txt --min_occur 2

    # Skip the words listed in a comma separated file
    word-freq book.txt --min_occur 2 --blacklist_file blacklist.txt
"#
)]
pub struct Args {
    /// File path with file name that you need to parse
    #[arg(value_name = "TEXT_FILE")]
    pub text_file: PathBuf,

    /// Minimum occurrences of a single word to be reported (values below 1 act as 1)
    #[arg(
        long = "min_occur",
        value_name = "N",
        default_value_t = 1,
        allow_negative_numbers = true
    )]
    pub min_occur: i64,

    /// File listing words to avoid analysing, separated by commas or line breaks
    #[arg(long = "blacklist_file", value_name = "PATH")]
    pub blacklist_file: Option<PathBuf>,

    /// Sort words alphabetically within each frequency
    #[arg(long, default_value_t = false)]
    pub sort: bool,

    /// Count on N worker threads (0 = one per CPU, 1 = sequential)
    #[arg(short = 't', long, value_name = "NUM")]
    pub threads: Option<usize>,

    /// Print a run summary to stderr after the report
    #[arg(long, default_value_t = false)]
    pub stats: bool,

    /// Quiet mode - errors only
    #[arg(short, long, default_value_t = false, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode - detailed logging and a progress bar
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    /// Reporting threshold; every counted word occurs at least once
    pub fn min_frequency(&self) -> u64 {
        self.min_occur.max(1).unsigned_abs()
    }

    /// Resolve the worker count; `None` means count sequentially
    pub fn worker_threads(&self) -> Option<usize> {
        match self.threads {
            None | Some(1) => None,
            Some(0) => Some(num_cpus::get()).filter(|&n| n > 1),
            Some(n) => Some(n),
        }
    }

    /// Default log filter for the chosen verbosity
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("word-freq").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["book.txt"]);

        assert_eq!(args.text_file, PathBuf::from("book.txt"));
        assert_eq!(args.min_occur, 1);
        assert!(args.blacklist_file.is_none());
        assert!(!args.sort);
        assert_eq!(args.worker_threads(), None);
        assert_eq!(args.log_level(), "warn");
    }

    #[test]
    fn test_underscore_flags() {
        let args = parse(&["book.txt", "--min_occur", "2", "--blacklist_file", "black.txt"]);

        assert_eq!(args.min_occur, 2);
        assert_eq!(args.blacklist_file, Some(PathBuf::from("black.txt")));
    }

    #[test]
    fn test_text_file_required() {
        assert!(Args::try_parse_from(["word-freq"]).is_err());
    }

    #[test]
    fn test_min_occur_below_one_clamps() {
        assert_eq!(parse(&["book.txt", "--min_occur", "-1"]).min_frequency(), 1);
        assert_eq!(parse(&["book.txt", "--min_occur", "0"]).min_frequency(), 1);
        assert_eq!(parse(&["book.txt", "--min_occur", "3"]).min_frequency(), 3);
    }

    #[test]
    fn test_worker_threads() {
        assert_eq!(parse(&["book.txt", "-t", "1"]).worker_threads(), None);
        assert_eq!(parse(&["book.txt", "-t", "4"]).worker_threads(), Some(4));
    }

    #[test]
    fn test_quiet_and_verbose_conflict() {
        assert!(Args::try_parse_from(["word-freq", "book.txt", "-q", "-v"]).is_err());
        assert_eq!(parse(&["book.txt", "-v"]).log_level(), "debug");
    }
}
