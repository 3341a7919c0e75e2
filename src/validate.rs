//! Pre-flight checks for input paths
//!
//! Existence, file type and readability are checked independently and every
//! failed check ends up in the returned error.

use crate::error::{Error, PathProblem, Result};
use std::fs::File;
use std::path::Path;

/// Run all path checks and collect the ones that fail
pub fn path_problems(path: &Path) -> Vec<PathProblem> {
    let mut problems = Vec::new();

    if !path.exists() {
        problems.push(PathProblem::Missing);
    }

    if !path.is_file() {
        problems.push(PathProblem::NotAFile);
    }

    if File::open(path).is_err() {
        problems.push(PathProblem::Unreadable);
    }

    problems
}

/// Fail if `path` is not an existing, readable regular file
pub fn validate_filepath(path: &Path) -> Result<()> {
    let problems = path_problems(path);

    if problems.is_empty() {
        log::debug!("Validated input path {:?}", path);
        Ok(())
    } else {
        Err(Error::PathValidation {
            path: path.to_path_buf(),
            problems,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_regular_file_passes() {
        let file = NamedTempFile::new().unwrap();
        assert!(validate_filepath(file.path()).is_ok());
    }

    #[test]
    fn test_missing_file_reports_every_check() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.txt");

        let problems = path_problems(&path);
        assert_eq!(
            problems,
            vec![PathProblem::Missing, PathProblem::NotAFile, PathProblem::Unreadable]
        );

        match validate_filepath(&path) {
            Err(Error::PathValidation { path: p, problems }) => {
                assert_eq!(p, path);
                assert!(problems.contains(&PathProblem::Missing));
            }
            other => panic!("expected path validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let dir = TempDir::new().unwrap();

        let problems = path_problems(dir.path());
        assert!(!problems.contains(&PathProblem::Missing));
        assert!(problems.contains(&PathProblem::NotAFile));
        assert!(validate_filepath(dir.path()).is_err());
    }
}
