//! Error types
//!
//! Every failure in the pipeline is terminal for the run: nothing is retried
//! and nothing is printed to stdout once an error has been raised.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the analyzer
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An input path failed one or more of the pre-flight checks
    #[error("Invalid input path {path:?}: {}", join_problems(.problems))]
    PathValidation {
        path: PathBuf,
        problems: Vec<PathProblem>,
    },

    /// Opening or reading an already validated file failed
    #[error("reading {path:?} has failed!")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Path the error refers to
    pub fn path(&self) -> &Path {
        match self {
            Self::PathValidation { path, .. } | Self::Read { path, .. } => path,
        }
    }
}

/// A single failed path check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathProblem {
    Missing,
    NotAFile,
    Unreadable,
}

impl fmt::Display for PathProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::Missing => "file doesn't exist",
            Self::NotAFile => "not a regular file, perhaps it is a directory",
            Self::Unreadable => "file doesn't have read permission",
        };
        f.write_str(msg)
    }
}

fn join_problems(problems: &[PathProblem]) -> String {
    problems
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
