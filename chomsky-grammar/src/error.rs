use std::error::Error;
use std::fmt;

use chomsky_symbol::SymbolError;

/// Represents a violation of the grammar's structural invariants.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GrammarError {
    /// No start symbol was assigned.
    MissingStart,
    /// The start symbol is not in the nonterminal vocabulary.
    StartNotInVocabulary {
        /// Name of the start symbol.
        start: String,
    },
    /// A rule mentions a symbol outside the vocabulary.
    UnknownSymbol {
        /// The rule's left-hand side.
        lhs: String,
        /// The unknown symbol.
        sym: String,
    },
    /// Naming or allocating a symbol failed.
    Symbol(SymbolError),
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GrammarError::MissingStart => write!(f, "grammar has no start symbol"),
            GrammarError::StartNotInVocabulary { start } => {
                write!(f, "start symbol `{}` is not a nonterminal of the grammar", start)
            }
            GrammarError::UnknownSymbol { lhs, sym } => {
                write!(f, "rule for `{}` refers to unknown symbol `{}`", lhs, sym)
            }
            GrammarError::Symbol(err) => err.fmt(f),
        }
    }
}

impl Error for GrammarError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GrammarError::Symbol(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SymbolError> for GrammarError {
    fn from(err: SymbolError) -> Self {
        GrammarError::Symbol(err)
    }
}
