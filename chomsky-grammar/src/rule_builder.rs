//! Grammar rules can be built with the builder pattern.

use std::convert::AsRef;

use crate::local_prelude::*;

/// The rule builder.
pub struct RuleBuilder<'a> {
    lhs: NonTerminal,
    grammar: &'a mut Grammar,
}

impl<'a> RuleBuilder<'a> {
    /// Creates a rule builder.
    pub fn new(grammar: &'a mut Grammar, lhs: NonTerminal) -> Self {
        RuleBuilder { lhs, grammar }
    }

    /// Starts building a new rule with the given LHS.
    pub fn rule(mut self, lhs: NonTerminal) -> Self {
        self.lhs = lhs;
        self
    }

    /// Adds a rule alternative to the grammar. A body of `[Symbol::Epsilon]` or `[]`
    /// adds the empty alternative.
    pub fn rhs<S>(self, syms: S) -> Self
    where
        S: AsRef<[Symbol]>,
    {
        self.grammar.add_rule(self.lhs, syms.as_ref());
        self
    }

    /// Adds several alternatives with the same LHS.
    pub fn alternatives<I, S>(mut self, alternatives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[Symbol]>,
    {
        for syms in alternatives {
            self = self.rhs(syms);
        }
        self
    }
}
