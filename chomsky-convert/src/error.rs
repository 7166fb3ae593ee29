use std::error::Error;
use std::fmt;

use chomsky_automaton::AutomatonError;
use chomsky_grammar::{GrammarError, SymbolError};

/// Represents a failed conversion.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConvertError {
    /// A body is not of the form `ε`, `a`, `aB` or `B`.
    NotRightLinear {
        /// The rule's left-hand side.
        lhs: String,
        /// The offending body.
        rhs: String,
    },
    /// The input grammar is malformed.
    Grammar(GrammarError),
    /// The automaton could not be built.
    Automaton(AutomatonError),
    /// A state name is already taken by a terminal.
    Symbol(SymbolError),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConvertError::NotRightLinear { lhs, rhs } => {
                write!(f, "rule `{} -> {}` is not right-linear", lhs, rhs)
            }
            ConvertError::Grammar(err) => err.fmt(f),
            ConvertError::Automaton(err) => err.fmt(f),
            ConvertError::Symbol(err) => err.fmt(f),
        }
    }
}

impl Error for ConvertError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConvertError::Grammar(err) => Some(err),
            ConvertError::Automaton(err) => Some(err),
            ConvertError::Symbol(err) => Some(err),
            ConvertError::NotRightLinear { .. } => None,
        }
    }
}

impl From<GrammarError> for ConvertError {
    fn from(err: GrammarError) -> Self {
        ConvertError::Grammar(err)
    }
}

impl From<AutomatonError> for ConvertError {
    fn from(err: AutomatonError) -> Self {
        ConvertError::Automaton(err)
    }
}

impl From<SymbolError> for ConvertError {
    fn from(err: SymbolError) -> Self {
        ConvertError::Symbol(err)
    }
}
