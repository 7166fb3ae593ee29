//! Definitions of the context-free grammar type and its rules.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{self, Write};

use chomsky_symbol::SymbolError;

use crate::local_prelude::*;
use crate::occurence_map::OccurenceMap;
use crate::rule_builder::RuleBuilder;
use crate::GrammarError;

/// Context-free grammar type.
///
/// Holds the nonterminal and terminal vocabularies, an optional start symbol, and
/// the production relation. Bodies of one nonterminal form a set: they have no
/// meaningful order and duplicates collapse.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Grammar {
    /// The symbol source.
    sym_source: SymbolSource,
    nonterminals: BTreeSet<NonTerminal>,
    terminals: BTreeSet<Terminal>,
    /// The production relation.
    productions: BTreeMap<NonTerminal, BTreeSet<Vec<Symbol>>>,
    start: Option<NonTerminal>,
}

/// References rule's components.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RuleRef<'a> {
    /// Left-hand side.
    pub lhs: NonTerminal,
    /// Right-hand side.
    pub rhs: &'a [Symbol],
}

/// Used only for [`fn rhs_closure`].
///
/// [`fn rhs_closure`]: Grammar::rhs_closure
#[derive(Eq, PartialEq, Clone, Copy, Debug)]
pub enum RhsPropertyMode {
    /// If **all** symbols on the RHS have the property,
    /// the LHS has it too.
    All,
    /// If **any** symbol on the RHS has the property,
    /// the LHS has it too.
    Any,
}

impl Grammar {
    /// Creates an empty grammar.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty grammar with the given symbol source.
    ///
    /// Symbols of the source are not part of the vocabulary until they are
    /// named through [`fn terminal`] or [`fn nonterminal`].
    ///
    /// [`fn terminal`]: Self::terminal
    /// [`fn nonterminal`]: Self::nonterminal
    pub fn with_sym_source(sym_source: SymbolSource) -> Self {
        Grammar {
            sym_source,
            ..Self::default()
        }
    }

    /// Adds the named terminal to the vocabulary.
    pub fn terminal(&mut self, name: &str) -> Result<Terminal, SymbolError> {
        let terminal = self.sym_source.terminal(name)?;
        self.terminals.insert(terminal);
        Ok(terminal)
    }

    /// Adds the named nonterminal to the vocabulary.
    pub fn nonterminal(&mut self, name: &str) -> Result<NonTerminal, SymbolError> {
        let nonterminal = self.sym_source.nonterminal(name)?;
        self.nonterminals.insert(nonterminal);
        Ok(nonterminal)
    }

    /// Adds several named terminals to the vocabulary.
    pub fn terminal_syms<const N: usize>(
        &mut self,
        names: [&str; N],
    ) -> Result<[Terminal; N], SymbolError> {
        let mut result = Vec::with_capacity(N);
        for name in names {
            result.push(self.terminal(name)?);
        }
        Ok(result
            .try_into()
            .unwrap_or_else(|_| unreachable!("one symbol per name")))
    }

    /// Adds several named nonterminals to the vocabulary.
    pub fn nonterminal_syms<const N: usize>(
        &mut self,
        names: [&str; N],
    ) -> Result<[NonTerminal; N], SymbolError> {
        let mut result = Vec::with_capacity(N);
        for name in names {
            result.push(self.nonterminal(name)?);
        }
        Ok(result
            .try_into()
            .unwrap_or_else(|_| unreachable!("one symbol per name")))
    }

    /// Adds a nonterminal with a fresh name to the vocabulary.
    ///
    /// # Errors
    ///
    /// Fails when the fresh-name sequence is exhausted.
    pub fn fresh_nonterminal(&mut self) -> Result<NonTerminal, SymbolError> {
        let nonterminal = self.sym_source.fresh_nonterminal()?;
        self.nonterminals.insert(nonterminal);
        Ok(nonterminal)
    }

    /// Adds a symbol of this grammar's source to the vocabulary.
    pub fn add_to_vocabulary(&mut self, sym: Symbol) {
        match sym {
            Symbol::Terminal(t) => {
                self.terminals.insert(t);
            }
            Symbol::NonTerminal(nt) => {
                self.nonterminals.insert(nt);
            }
            Symbol::Epsilon => {}
        }
    }

    /// Assigns the start symbol.
    pub fn set_start(&mut self, start: NonTerminal) {
        self.start = Some(start);
    }

    /// Returns the start symbol, if one was assigned.
    pub fn start(&self) -> Option<NonTerminal> {
        self.start
    }

    /// Iterates over the nonterminal vocabulary in canonical order.
    pub fn nonterminals(&self) -> impl Iterator<Item = NonTerminal> + '_ {
        self.nonterminals.iter().copied()
    }

    /// Iterates over the terminal vocabulary in canonical order.
    pub fn terminals(&self) -> impl Iterator<Item = Terminal> + '_ {
        self.terminals.iter().copied()
    }

    /// Checks whether the nonterminal is in the vocabulary.
    pub fn has_nonterminal(&self, nonterminal: NonTerminal) -> bool {
        self.nonterminals.contains(&nonterminal)
    }

    /// Checks whether the terminal is in the vocabulary.
    pub fn has_terminal(&self, terminal: Terminal) -> bool {
        self.terminals.contains(&terminal)
    }

    /// Checks whether the symbol is in the vocabulary.
    pub fn in_vocabulary(&self, sym: Symbol) -> bool {
        match sym {
            Symbol::Terminal(t) => self.has_terminal(t),
            Symbol::NonTerminal(nt) => self.has_nonterminal(nt),
            Symbol::Epsilon => false,
        }
    }

    /// Allows access to the symbol source through a reference.
    pub fn sym_source(&self) -> &SymbolSource {
        &self.sym_source
    }

    /// Allows mutable access to the symbol source through a reference.
    pub fn sym_source_mut(&mut self) -> &mut SymbolSource {
        &mut self.sym_source
    }

    /// Returns the number of symbols in use.
    pub fn num_syms(&self) -> usize {
        self.sym_source.num_syms()
    }

    /// Returns the name of a symbol.
    pub fn name_of(&self, sym: impl Into<Symbol>) -> &str {
        self.sym_source.name_of(sym.into())
    }

    /// Starts building a new rule.
    pub fn rule(&mut self, lhs: NonTerminal) -> RuleBuilder<'_> {
        RuleBuilder::new(self, lhs)
    }

    /// Adds a rule to this grammar. Epsilon markers in the body are dropped, so
    /// `[ε]` adds the empty body.
    ///
    /// Returns `false` if the grammar already had this rule.
    pub fn add_rule(&mut self, lhs: NonTerminal, rhs: &[Symbol]) -> bool {
        let rhs: Vec<Symbol> = rhs.iter().copied().filter(|sym| !sym.is_epsilon()).collect();
        self.productions.entry(lhs).or_default().insert(rhs)
    }

    /// Checks whether the grammar has the given rule.
    pub fn has_rule(&self, lhs: NonTerminal, rhs: &[Symbol]) -> bool {
        self.productions
            .get(&lhs)
            .map_or(false, |bodies| bodies.contains(rhs))
    }

    /// Returns an iterator over the list of grammar rules.
    ///
    /// Rules are ordered by LHS, then by RHS.
    pub fn rules(&self) -> impl Iterator<Item = RuleRef<'_>> + '_ {
        self.productions.iter().flat_map(|(&lhs, bodies)| {
            bodies.iter().map(move |rhs| RuleRef {
                lhs,
                rhs: &rhs[..],
            })
        })
    }

    /// Returns an iterator over the bodies of one nonterminal.
    pub fn productions(&self, lhs: NonTerminal) -> impl Iterator<Item = &[Symbol]> + '_ {
        self.productions
            .get(&lhs)
            .into_iter()
            .flat_map(|bodies| bodies.iter().map(|rhs| &rhs[..]))
    }

    /// Returns the number of rules.
    pub fn num_rules(&self) -> usize {
        self.productions.values().map(|bodies| bodies.len()).sum()
    }

    /// Retains only the rules specified by the predicate.
    ///
    /// In other words, removes all the rules for which `f(rule)`
    /// returns false.
    pub fn retain(&mut self, mut f: impl FnMut(RuleRef) -> bool) {
        for (&lhs, bodies) in self.productions.iter_mut() {
            bodies.retain(|rhs| f(RuleRef { lhs, rhs }));
        }
        self.productions.retain(|_, bodies| !bodies.is_empty());
    }

    /// Empties the production relation. The vocabulary is kept.
    pub fn clear_rules(&mut self) {
        self.productions.clear();
    }

    /// Removes a nonterminal from the vocabulary, together with its rules.
    ///
    /// Rules that mention it on the RHS are not touched.
    pub fn remove_nonterminal(&mut self, nonterminal: NonTerminal) {
        self.nonterminals.remove(&nonterminal);
        self.productions.remove(&nonterminal);
    }

    /// Checks whether the grammar has no rules.
    pub fn is_empty(&self) -> bool {
        self.productions.is_empty()
    }

    /// Checks the grammar's structural invariants: the start symbol is a known
    /// nonterminal, and every rule mentions only symbols of the vocabulary.
    pub fn validate(&self) -> Result<(), GrammarError> {
        let start = self.start.ok_or(GrammarError::MissingStart)?;
        if !self.has_nonterminal(start) {
            return Err(GrammarError::StartNotInVocabulary {
                start: self.describe(start.into()),
            });
        }
        for rule in self.rules() {
            let lhs = Symbol::NonTerminal(rule.lhs);
            if let Some(&sym) = Some(&lhs)
                .into_iter()
                .chain(rule.rhs.iter())
                .find(|&&sym| !self.in_vocabulary(sym))
            {
                return Err(GrammarError::UnknownSymbol {
                    lhs: self.describe(lhs),
                    sym: self.describe(sym),
                });
            }
        }
        Ok(())
    }

    fn describe(&self, sym: Symbol) -> String {
        if self.sym_source.contains(sym) {
            self.sym_source.name_of(sym).to_string()
        } else {
            format!("{:?}", sym)
        }
    }

    /// If **all** symbols on the RHS have the property, the LHS has it too.
    /// Updates the given symbol set according to the above, and does it
    /// transitively.
    pub fn rhs_closure_for_all(&self, property: &mut SymbolBitSet) {
        self.rhs_closure(property, RhsPropertyMode::All)
    }

    /// If **any** symbol on the RHS has the property, the LHS has it too.
    /// Updates the given symbol set according to the above, and does it
    /// transitively.
    pub fn rhs_closure_for_any(&self, property: &mut SymbolBitSet) {
        self.rhs_closure(property, RhsPropertyMode::Any)
    }

    /// If **any** or **all** symbols on the RHS have the property, the LHS
    /// has it too.
    /// Updates the given symbol set according to the above, and does it
    /// transitively. The result is the least fixpoint above the given set.
    ///
    /// Rules with an empty RHS never fire, so their LHS must be in the
    /// initial set if it should have the property.
    pub fn rhs_closure(&self, property: &mut SymbolBitSet, property_mode: RhsPropertyMode) {
        let rules: Vec<RuleRef> = self.rules().collect();
        let occurence_map = OccurenceMap::from_rules(&rules[..]);
        let mut work_stack: Vec<SymbolId> = property.iter().collect();

        while let Some(work_sym) = work_stack.pop() {
            for &rule_id in occurence_map.get(work_sym).rhs() {
                let rule = rules[rule_id];
                let mut rhs_iter = rule.rhs.iter();
                let get_property = |&sym: &Symbol| property[sym];
                let rhs_satisfies_property = match property_mode {
                    RhsPropertyMode::All => rhs_iter.all(get_property),
                    RhsPropertyMode::Any => rhs_iter.any(get_property),
                };
                if !property[rule.lhs] && rhs_satisfies_property {
                    property.set(rule.lhs, true);
                    work_stack.push(rule.lhs.id());
                }
            }
        }
    }

    /// Formats a rule body. Symbols are concatenated when all their names are
    /// single characters, and separated by spaces otherwise.
    pub fn stringify_rhs(&self, rhs: &[Symbol]) -> String {
        if rhs.is_empty() {
            return chomsky_symbol::EPSILON.to_string();
        }
        let names: Vec<&str> = rhs.iter().map(|&sym| self.name_of(sym)).collect();
        if names.iter().all(|name| name.chars().count() == 1) {
            names.concat()
        } else {
            names.join(" ")
        }
    }

    /// Formats the grammar to a `String`. The output looks like this:
    ///
    /// ```ignore
    /// S -> aF | bS
    /// F -> a | bF | cD
    /// ```
    ///
    /// The start symbol comes first, the remaining nonterminals follow in
    /// canonical order. Nonterminals without rules are omitted.
    pub fn stringify_to_bnf(&self) -> String {
        let mut result = String::new();
        let lhs_order = self
            .start
            .into_iter()
            .chain(self.productions.keys().copied().filter(|&lhs| Some(lhs) != self.start));
        for lhs in lhs_order {
            let bodies = match self.productions.get(&lhs) {
                Some(bodies) => bodies,
                None => continue,
            };
            let alternatives: Vec<String> =
                bodies.iter().map(|rhs| self.stringify_rhs(rhs)).collect();
            writeln!(
                &mut result,
                "{} -> {}",
                self.name_of(lhs),
                alternatives.join(" | ")
            )
            .expect("writing to String failed");
        }
        result
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.stringify_to_bnf())
    }
}

impl<'a> RuleRef<'a> {
    /// Checks whether the rule has the form `A ::= ()`.
    pub fn is_empty(&self) -> bool {
        self.rhs.is_empty()
    }

    /// Returns the nonterminal of a unit rule `A ::= B`.
    pub fn unit(&self) -> Option<NonTerminal> {
        match self.rhs {
            &[Symbol::NonTerminal(nt)] => Some(nt),
            _ => None,
        }
    }
}
