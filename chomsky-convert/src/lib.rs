//! Conversion between right-linear grammars and finite automata.
//!
//! Nonterminals become states and states become nonterminals, with the
//! same names in both directions.

#![deny(unsafe_code)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]

mod error;
mod to_automaton;
mod to_grammar;

pub use self::error::ConvertError;
pub use self::to_automaton::grammar_to_automaton;
pub use self::to_grammar::automaton_to_grammar;

use chomsky_automaton::Automaton;
use chomsky_grammar::Grammar;

/// Conversion of right-linear grammars.
pub trait GrammarToAutomatonExt {
    /// Builds an automaton accepting the grammar's language.
    ///
    /// # Errors
    ///
    /// Fails on a malformed grammar, or when a body is not right-linear.
    fn to_automaton(&self) -> Result<Automaton, ConvertError>;
}

/// Conversion of automata.
pub trait AutomatonToGrammarExt {
    /// Builds a right-linear grammar generating the automaton's language.
    fn to_grammar(&self) -> Result<Grammar, ConvertError>;
}

impl GrammarToAutomatonExt for Grammar {
    fn to_automaton(&self) -> Result<Automaton, ConvertError> {
        grammar_to_automaton(self)
    }
}

impl AutomatonToGrammarExt for Automaton {
    fn to_grammar(&self) -> Result<Grammar, ConvertError> {
        automaton_to_grammar(self)
    }
}
