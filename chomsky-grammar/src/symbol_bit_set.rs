//! Sets of symbols, and the symbol properties computed with them.

use std::{iter, ops};

use bit_vec::BitVec;

use crate::local_prelude::*;

/// A set of symbols in the form of a bit vector.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SymbolBitSet {
    bit_vec: BitVec,
}

/// An iterator over a symbol set.
pub struct Iter<'a> {
    iter: iter::Enumerate<bit_vec::Iter<'a>>,
}

impl SymbolBitSet {
    /// Constructs an empty `SymbolBitSet`.
    pub fn new() -> Self {
        SymbolBitSet {
            bit_vec: BitVec::new(),
        }
    }

    /// Constructs a `SymbolBitSet` covering every symbol of the grammar.
    pub fn from_elem(grammar: &Grammar, elem: bool) -> Self {
        SymbolBitSet {
            bit_vec: BitVec::from_elem(grammar.num_syms(), elem),
        }
    }

    pub fn reset(&mut self, symbol_source: &SymbolSource) {
        self.bit_vec = BitVec::from_elem(symbol_source.num_syms(), false);
    }

    /// Marks the terminals of the vocabulary.
    pub fn terminal(&mut self, grammar: &Grammar) {
        self.reset(grammar.sym_source());
        for terminal in grammar.terminals() {
            self.set(terminal, true);
        }
    }

    /// Marks every nonterminal with an empty alternative.
    pub fn nulling(&mut self, grammar: &Grammar) {
        if self.is_empty() {
            self.reset(grammar.sym_source());
        }
        for rule in grammar.rules() {
            if rule.rhs.is_empty() {
                self.set(rule.lhs, true);
            }
        }
    }

    /// Marks the symbols that occur in the vocabulary.
    pub fn vocabulary(&mut self, grammar: &Grammar) {
        self.reset(grammar.sym_source());
        for terminal in grammar.terminals() {
            self.set(terminal, true);
        }
        for nonterminal in grammar.nonterminals() {
            self.set(nonterminal, true);
        }
    }

    /// Sets membership of a symbol. Grows the set when the symbol is outside
    /// of its range. The empty-string marker is ignored.
    pub fn set(&mut self, sym: impl Into<Symbol>, elem: bool) {
        if let Some(id) = sym.into().id() {
            let index = id.usize();
            if index >= self.bit_vec.len() {
                self.bit_vec.grow(index + 1 - self.bit_vec.len(), false);
            }
            self.bit_vec.set(index, elem);
        }
    }

    pub fn contains(&self, sym: impl Into<Symbol>) -> bool {
        match sym.into().id() {
            Some(id) => self.bit_vec.get(id.usize()).unwrap_or(false),
            None => false,
        }
    }

    pub fn bit_vec(&self) -> &BitVec {
        &self.bit_vec
    }

    /// Converts into a bit vector.
    pub fn into_bit_vec(self) -> BitVec {
        self.bit_vec
    }

    /// Iterates over symbol IDs in the set.
    pub fn iter(&self) -> Iter {
        Iter {
            iter: self.bit_vec.iter().enumerate(),
        }
    }

    pub fn union(&mut self, other: &SymbolBitSet) {
        if other.bit_vec.len() > self.bit_vec.len() {
            let extra = other.bit_vec.len() - self.bit_vec.len();
            self.bit_vec.grow(extra, false);
        }
        for id in other.iter() {
            self.bit_vec.set(id.usize(), true);
        }
    }

    pub fn len(&self) -> usize {
        self.bit_vec.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bit_vec.is_empty()
    }

    pub fn all(&self) -> bool {
        self.bit_vec.iter().all(|b| b)
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = SymbolId;
    fn next(&mut self) -> Option<Self::Item> {
        for (id, is_present) in &mut self.iter {
            if is_present {
                return Some(SymbolId::from(id));
            }
        }
        None
    }
}

static TRUE: bool = true;
static FALSE: bool = false;

impl ops::Index<Symbol> for SymbolBitSet {
    type Output = bool;

    fn index(&self, index: Symbol) -> &Self::Output {
        if self.contains(index) {
            &TRUE
        } else {
            &FALSE
        }
    }
}

impl ops::Index<NonTerminal> for SymbolBitSet {
    type Output = bool;

    fn index(&self, index: NonTerminal) -> &Self::Output {
        &self[Symbol::from(index)]
    }
}

impl ops::Index<Terminal> for SymbolBitSet {
    type Output = bool;

    fn index(&self, index: Terminal) -> &Self::Output {
        &self[Symbol::from(index)]
    }
}

impl Grammar {
    pub fn terminal_symbols(&self) -> SymbolBitSet {
        let mut set = SymbolBitSet::new();
        set.terminal(self);
        set
    }

    /// Returns the nonterminals with an empty alternative.
    pub fn nulling_symbols(&self) -> SymbolBitSet {
        let mut set = SymbolBitSet::new();
        set.reset(self.sym_source());
        set.nulling(self);
        set
    }

    /// Returns the nonterminals that derive the empty string.
    pub fn nullable_symbols(&self) -> SymbolBitSet {
        let mut nullable = self.nulling_symbols();
        self.rhs_closure_for_all(&mut nullable);
        nullable
    }

    /// Returns the symbols that derive some terminal string. Every terminal is
    /// productive.
    pub fn productive_symbols(&self) -> SymbolBitSet {
        let mut productive = self.terminal_symbols();
        productive.union(&self.nulling_symbols());
        self.rhs_closure_for_all(&mut productive);
        productive
    }
}
