//! Context-free grammars over named terminals and nonterminals.
//!
//! A [`Grammar`] is a vocabulary of nonterminals and terminals, a start symbol, and
//! a production relation mapping every nonterminal to a *set* of bodies.

#![deny(unsafe_code)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]

mod error;
pub mod grammar;
mod occurence_map;
pub mod rule_builder;
pub mod symbol_bit_set;

pub use crate::error::GrammarError;
pub use crate::grammar::{Grammar, RhsPropertyMode, RuleRef};
pub use crate::rule_builder::RuleBuilder;
pub use crate::symbol_bit_set::SymbolBitSet;
pub use chomsky_symbol::*;

pub(crate) mod local_prelude {
    pub use crate::grammar::{Grammar, RuleRef};
    pub use crate::symbol_bit_set::SymbolBitSet;
    pub use chomsky_symbol::{NonTerminal, Symbol, SymbolId, SymbolSource, Terminal};
}
