use std::error::Error;
use std::fmt;

use chomsky_grammar::SymbolError;

/// Represents a malformed phrase-structure rule.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ClassifyError {
    /// The left-hand side has no nonterminal to rewrite.
    LhsWithoutNonTerminal {
        /// The offending left-hand side.
        lhs: String,
    },
    /// Naming a symbol failed.
    Symbol(SymbolError),
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClassifyError::LhsWithoutNonTerminal { lhs } => {
                write!(f, "left-hand side `{}` has no nonterminal", lhs)
            }
            ClassifyError::Symbol(error) => write!(f, "{}", error),
        }
    }
}

impl Error for ClassifyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ClassifyError::Symbol(error) => Some(error),
            _ => None,
        }
    }
}

impl From<SymbolError> for ClassifyError {
    fn from(error: SymbolError) -> Self {
        ClassifyError::Symbol(error)
    }
}
