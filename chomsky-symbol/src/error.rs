use std::error::Error;
use std::fmt;

use crate::SymbolKind;

/// Represents an error when naming or allocating symbols.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SymbolError {
    /// Every name of the fresh-name sequence is taken.
    NamesExhausted {
        /// How many names the sequence holds.
        capacity: usize,
    },
    /// The name is already bound to a symbol of the other kind.
    KindMismatch {
        /// The offending name.
        name: String,
        /// The kind the name is bound to.
        bound: SymbolKind,
    },
    /// The empty-string marker cannot name a symbol.
    ReservedName,
}

impl fmt::Display for SymbolError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SymbolError::NamesExhausted { capacity } => {
                write!(f, "exhausted all {} fresh nonterminal names", capacity)
            }
            SymbolError::KindMismatch { name, bound } => {
                write!(f, "symbol `{}` is already a {}", name, bound)
            }
            SymbolError::ReservedName => write!(f, "`{}` is reserved", crate::EPSILON),
        }
    }
}

impl Error for SymbolError {}
