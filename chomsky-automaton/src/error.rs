use std::error::Error;
use std::fmt;

use chomsky_symbol::SymbolError;

use crate::StateId;

/// Represents a violation of the automaton's structural invariants.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AutomatonError {
    /// No start state was assigned.
    MissingStart,
    /// A state was used without being declared.
    UnknownState {
        /// The offending state.
        state: StateId,
    },
    /// A transition uses a letter outside the alphabet.
    UnknownLetter {
        /// Description of the letter.
        letter: String,
    },
    /// Naming a letter failed.
    Symbol(SymbolError),
}

impl fmt::Display for AutomatonError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AutomatonError::MissingStart => write!(f, "automaton has no start state"),
            AutomatonError::UnknownState { state } => {
                write!(f, "state #{} is not in the state set", state.usize())
            }
            AutomatonError::UnknownLetter { letter } => {
                write!(f, "letter `{}` is not in the alphabet", letter)
            }
            AutomatonError::Symbol(error) => write!(f, "{}", error),
        }
    }
}

impl Error for AutomatonError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AutomatonError::Symbol(error) => Some(error),
            _ => None,
        }
    }
}

impl From<SymbolError> for AutomatonError {
    fn from(error: SymbolError) -> Self {
        AutomatonError::Symbol(error)
    }
}
