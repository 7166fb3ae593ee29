use std::fmt;

use crate::parse::Alternative;

/// Represents an error while loading a grammar.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LoadError {
    /// Human-readable reason for the error.
    pub reason: String,
    /// Line where the error happened.
    ///
    /// One-indexed.
    pub line: u32,
    /// Column where the error happened.
    ///
    /// One-indexed.
    pub col: u32,
}

impl LoadError {
    pub(crate) fn new(reason: impl Into<String>, line: u32, col: u32) -> Self {
        LoadError {
            reason: reason.into(),
            line,
            col,
        }
    }

    pub(crate) fn at(alternative: &Alternative, reason: impl Into<String>) -> Self {
        LoadError::new(reason, alternative.line, alternative.col)
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Parse error at line {} column {}: reason: {}",
            self.line, self.col, self.reason
        )
    }
}

impl std::error::Error for LoadError {}
