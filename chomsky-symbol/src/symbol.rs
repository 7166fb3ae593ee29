use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::SymbolId;

/// A symbol that appears in the final strings of a language.
#[derive(Clone, Copy, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Terminal(pub(crate) SymbolId);

/// A symbol that can be rewritten by a production.
#[derive(Clone, Copy, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NonTerminal(pub(crate) SymbolId);

/// A grammar symbol.
///
/// The derived order is the canonical order used for deterministic output:
/// terminals before nonterminals, each in allocation order.
#[derive(Clone, Copy, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Symbol {
    /// A terminal.
    Terminal(Terminal),
    /// A nonterminal.
    NonTerminal(NonTerminal),
    /// The empty-string marker. Never stored inside a production body.
    Epsilon,
}

/// The class of a named symbol.
#[derive(Clone, Copy, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SymbolKind {
    /// See [`Terminal`].
    Terminal,
    /// See [`NonTerminal`].
    NonTerminal,
}

impl Terminal {
    /// Returns the symbol's ID.
    #[inline]
    pub fn id(self) -> SymbolId {
        self.0
    }

    /// Cast the symbol's ID to `usize`.
    #[inline]
    pub fn usize(self) -> usize {
        self.0.usize()
    }
}

impl NonTerminal {
    /// Returns the symbol's ID.
    #[inline]
    pub fn id(self) -> SymbolId {
        self.0
    }

    /// Cast the symbol's ID to `usize`.
    #[inline]
    pub fn usize(self) -> usize {
        self.0.usize()
    }
}

impl Symbol {
    /// Returns the ID, or `None` for the empty-string marker.
    pub fn id(self) -> Option<SymbolId> {
        match self {
            Symbol::Terminal(t) => Some(t.id()),
            Symbol::NonTerminal(nt) => Some(nt.id()),
            Symbol::Epsilon => None,
        }
    }

    /// Returns the kind, or `None` for the empty-string marker.
    pub fn kind(self) -> Option<SymbolKind> {
        match self {
            Symbol::Terminal(_) => Some(SymbolKind::Terminal),
            Symbol::NonTerminal(_) => Some(SymbolKind::NonTerminal),
            Symbol::Epsilon => None,
        }
    }

    pub fn terminal(self) -> Option<Terminal> {
        match self {
            Symbol::Terminal(t) => Some(t),
            _ => None,
        }
    }

    pub fn nonterminal(self) -> Option<NonTerminal> {
        match self {
            Symbol::NonTerminal(nt) => Some(nt),
            _ => None,
        }
    }

    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Symbol::Terminal(_))
    }

    #[inline]
    pub fn is_nonterminal(self) -> bool {
        matches!(self, Symbol::NonTerminal(_))
    }

    #[inline]
    pub fn is_epsilon(self) -> bool {
        matches!(self, Symbol::Epsilon)
    }
}

impl From<Terminal> for Symbol {
    fn from(t: Terminal) -> Self {
        Symbol::Terminal(t)
    }
}

impl From<NonTerminal> for Symbol {
    fn from(nt: NonTerminal) -> Self {
        Symbol::NonTerminal(nt)
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolKind::Terminal => f.write_str("terminal"),
            SymbolKind::NonTerminal => f.write_str("nonterminal"),
        }
    }
}
