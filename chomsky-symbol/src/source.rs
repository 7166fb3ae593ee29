//! Source

use std::collections::BTreeMap;

use crate::repr::{SymbolRepr, FIRST_ID, NULL_ID};
use crate::*;

/// A source of named symbols.
///
/// Names are never reused: once allocated, a name keeps its ID and kind for the
/// lifetime of the source, even if every grammar drops the symbol.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SymbolSource {
    names: Vec<String>,
    kinds: Vec<SymbolKind>,
    by_name: BTreeMap<String, SymbolId>,
    name_space: NameSpace,
    next_fresh: usize,
}

impl SymbolSource {
    /// Creates a source of symbols with an empty symbol space.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source that draws fresh names from the given sequence.
    pub fn with_name_space(name_space: NameSpace) -> Self {
        SymbolSource {
            name_space,
            ..Self::default()
        }
    }

    /// Returns the terminal with the given name, allocating it if necessary.
    pub fn terminal(&mut self, name: &str) -> Result<Terminal, SymbolError> {
        self.intern(name, SymbolKind::Terminal).map(Terminal)
    }

    /// Returns the nonterminal with the given name, allocating it if necessary.
    pub fn nonterminal(&mut self, name: &str) -> Result<NonTerminal, SymbolError> {
        self.intern(name, SymbolKind::NonTerminal).map(NonTerminal)
    }

    /// Allocates a nonterminal with the next unused name of the fresh-name sequence.
    pub fn fresh_nonterminal(&mut self) -> Result<NonTerminal, SymbolError> {
        while let Some(name) = self.name_space.nth(self.next_fresh) {
            self.next_fresh += 1;
            if !self.by_name.contains_key(&name) {
                let id = self.alloc(name, SymbolKind::NonTerminal);
                return Ok(NonTerminal(id));
            }
        }
        Err(SymbolError::NamesExhausted {
            capacity: self.name_space.capacity(),
        })
    }

    /// Looks up a symbol by name.
    pub fn get(&self, name: &str) -> Option<Symbol> {
        self.by_name.get(name).map(|&id| self.symbol(id))
    }

    /// Returns the symbol with the given ID.
    ///
    /// # Panics
    ///
    /// Panics if the ID was not allocated by this source.
    pub fn symbol(&self, id: SymbolId) -> Symbol {
        match self.kinds[id.usize()] {
            SymbolKind::Terminal => Symbol::Terminal(Terminal(id)),
            SymbolKind::NonTerminal => Symbol::NonTerminal(NonTerminal(id)),
        }
    }

    /// Checks whether the symbol was allocated by this source with the same kind.
    pub fn contains(&self, sym: Symbol) -> bool {
        match (sym.id(), sym.kind()) {
            (Some(id), Some(kind)) => self.kinds.get(id.usize()) == Some(&kind),
            _ => false,
        }
    }

    /// Returns the name of a symbol. The empty-string marker is named `ε`.
    ///
    /// # Panics
    ///
    /// Panics if the symbol was not allocated by this source.
    pub fn name_of(&self, sym: Symbol) -> &str {
        match sym.id() {
            Some(id) => &self.names[id.usize()],
            None => EPSILON,
        }
    }

    /// Returns the number of symbols in use.
    pub fn num_syms(&self) -> usize {
        self.names.len()
    }

    /// Iterates over all symbols in allocation order.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        (0..self.num_syms()).map(|id| self.symbol(SymbolId::from(id)))
    }

    /// Returns the sequence fresh names are drawn from.
    pub fn name_space(&self) -> NameSpace {
        self.name_space
    }

    fn intern(&mut self, name: &str, kind: SymbolKind) -> Result<SymbolId, SymbolError> {
        if name == EPSILON {
            return Err(SymbolError::ReservedName);
        }
        match self.by_name.get(name) {
            Some(&id) if self.kinds[id.usize()] == kind => Ok(id),
            Some(&id) => Err(SymbolError::KindMismatch {
                name: name.to_string(),
                bound: self.kinds[id.usize()],
            }),
            None => Ok(self.alloc(name.to_string(), kind)),
        }
    }

    fn alloc(&mut self, name: String, kind: SymbolKind) -> SymbolId {
        let next_id = FIRST_ID + self.names.len() as SymbolRepr;
        debug_assert_ne!(next_id, NULL_ID, "ran out of Symbol space?");
        let id = SymbolId::from(next_id);
        self.by_name.insert(name.clone(), id);
        self.names.push(name);
        self.kinds.push(kind);
        id
    }
}
