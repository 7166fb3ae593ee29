//! Normalization of context-free grammars.
//!
//! Every pass reads one consistent [`Grammar`] and returns a new one. The input is
//! validated first, so a malformed grammar is reported instead of repaired.
//! Passes are meant to run in the order of [`Stage`], which [`to_cnf`] follows.
//!
//! [`to_cnf`]: GrammarNormalizeExt::to_cnf

#![deny(unsafe_code)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]

mod binarize;
mod cnf;
mod nulling;
mod unit;
mod useful;

use chomsky_grammar::{Grammar, GrammarError};

pub use self::binarize::binarize;
pub use self::cnf::{eliminate_mixed_terminals, is_cnf, to_cnf, to_cnf_with_steps, Stage};
pub use self::nulling::eliminate_epsilon;
pub use self::unit::eliminate_unit;
pub use self::useful::{eliminate_non_generating, eliminate_unreachable};

/// Normalization passes, available as methods on [`Grammar`].
pub trait GrammarNormalizeExt {
    /// Removes empty bodies. Only the start symbol may keep one, and only when
    /// the grammar derives the empty string.
    fn eliminate_epsilon(&self) -> Result<Grammar, GrammarError>;
    /// Removes bodies that consist of a single nonterminal.
    fn eliminate_unit(&self) -> Result<Grammar, GrammarError>;
    /// Removes nonterminals that cannot be reached from the start symbol.
    fn eliminate_unreachable(&self) -> Result<Grammar, GrammarError>;
    /// Removes nonterminals that derive no terminal string, and every body
    /// mentioning them.
    fn eliminate_non_generating(&self) -> Result<Grammar, GrammarError>;
    /// Shortens every body to at most two symbols.
    fn binarize(&self) -> Result<Grammar, GrammarError>;
    /// Replaces terminals in bodies of length two or more with helper nonterminals.
    fn eliminate_mixed_terminals(&self) -> Result<Grammar, GrammarError>;
    /// Runs the whole pipeline.
    fn to_cnf(&self) -> Result<Grammar, GrammarError>;
    /// Runs the whole pipeline and keeps the result of every stage.
    fn to_cnf_with_steps(&self) -> Result<Vec<(Stage, Grammar)>, GrammarError>;
    /// Checks whether the grammar is in Chomsky Normal Form.
    fn is_cnf(&self) -> bool;
}

impl GrammarNormalizeExt for Grammar {
    fn eliminate_epsilon(&self) -> Result<Grammar, GrammarError> {
        eliminate_epsilon(self)
    }

    fn eliminate_unit(&self) -> Result<Grammar, GrammarError> {
        eliminate_unit(self)
    }

    fn eliminate_unreachable(&self) -> Result<Grammar, GrammarError> {
        eliminate_unreachable(self)
    }

    fn eliminate_non_generating(&self) -> Result<Grammar, GrammarError> {
        eliminate_non_generating(self)
    }

    fn binarize(&self) -> Result<Grammar, GrammarError> {
        binarize(self)
    }

    fn eliminate_mixed_terminals(&self) -> Result<Grammar, GrammarError> {
        eliminate_mixed_terminals(self)
    }

    fn to_cnf(&self) -> Result<Grammar, GrammarError> {
        to_cnf(self)
    }

    fn to_cnf_with_steps(&self) -> Result<Vec<(Stage, Grammar)>, GrammarError> {
        to_cnf_with_steps(self)
    }

    fn is_cnf(&self) -> bool {
        is_cnf(self)
    }
}
