//! Classification of grammars in the Chomsky hierarchy.

#![deny(unsafe_code)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]

mod chomsky_type;
mod error;
mod linear;
mod phrase_structure;

pub use self::chomsky_type::ChomskyType;
pub use self::error::ClassifyError;
pub use self::linear::{is_left_linear_body, is_right_linear_body};
pub use self::phrase_structure::{PhraseRuleRef, PhraseStructureGrammar};

use chomsky_grammar::Grammar;

/// Classification methods for context-free grammars.
pub trait GrammarClassifyExt {
    /// Returns the most restrictive type the grammar belongs to.
    fn chomsky_type(&self) -> ChomskyType;
    /// Checks whether every body has the form `ε`, `a`, `aB` or `B`.
    fn is_right_linear(&self) -> bool;
    /// Checks whether every body has the form `ε`, `a`, `Ba` or `B`.
    fn is_left_linear(&self) -> bool;
    /// Checks whether the grammar is right-linear or left-linear.
    fn is_regular(&self) -> bool {
        self.is_right_linear() || self.is_left_linear()
    }
}

impl GrammarClassifyExt for Grammar {
    fn chomsky_type(&self) -> ChomskyType {
        if self.is_regular() {
            ChomskyType::Regular
        } else {
            ChomskyType::ContextFree
        }
    }

    fn is_right_linear(&self) -> bool {
        self.rules().all(|rule| is_right_linear_body(rule.rhs))
    }

    fn is_left_linear(&self) -> bool {
        self.rules().all(|rule| is_left_linear_body(rule.rhs))
    }
}
