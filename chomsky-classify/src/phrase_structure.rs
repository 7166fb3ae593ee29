//! Unrestricted grammars with rules of the form `α -> β`.

use std::collections::BTreeSet;

use log::debug;

use chomsky_grammar::{Grammar, NonTerminal, Symbol, SymbolError, SymbolSource, Terminal};

use crate::{ChomskyType, ClassifyError, GrammarClassifyExt};

/// A grammar whose rules may rewrite a sequence of symbols.
///
/// Every left-hand side contains at least one nonterminal.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PhraseStructureGrammar {
    sym_source: SymbolSource,
    nonterminals: BTreeSet<NonTerminal>,
    terminals: BTreeSet<Terminal>,
    rules: BTreeSet<(Vec<Symbol>, Vec<Symbol>)>,
    start: Option<NonTerminal>,
}

/// References a phrase-structure rule's components.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PhraseRuleRef<'a> {
    /// Left-hand side.
    pub lhs: &'a [Symbol],
    /// Right-hand side.
    pub rhs: &'a [Symbol],
}

impl PhraseStructureGrammar {
    /// Creates an empty grammar.
    pub fn new() -> Self {
        Self::default()
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

    pub fn set_start(&mut self, start: NonTerminal) {
        self.start = Some(start);
    }

    pub fn start(&self) -> Option<NonTerminal> {
        self.start
    }

    pub fn sym_source(&self) -> &SymbolSource {
        &self.sym_source
    }

    /// Adds a rule. Epsilon markers are dropped from both sides.
    ///
    /// Returns `false` if the grammar already had this rule.
    pub fn add_rule(&mut self, lhs: &[Symbol], rhs: &[Symbol]) -> Result<bool, ClassifyError> {
        let strip = |syms: &[Symbol]| -> Vec<Symbol> {
            syms.iter().copied().filter(|sym| !sym.is_epsilon()).collect()
        };
        let (lhs, rhs) = (strip(lhs), strip(rhs));
        if !lhs.iter().any(|sym| sym.is_nonterminal()) {
            return Err(ClassifyError::LhsWithoutNonTerminal {
                lhs: self.stringify(&lhs),
            });
        }
        Ok(self.rules.insert((lhs, rhs)))
    }

    /// Returns an iterator over the rules.
    pub fn rules(&self) -> impl Iterator<Item = PhraseRuleRef<'_>> + '_ {
        self.rules.iter().map(|(lhs, rhs)| PhraseRuleRef {
            lhs: &lhs[..],
            rhs: &rhs[..],
        })
    }

    pub fn num_rules(&self) -> usize {
        self.rules.len()
    }

    /// Checks whether every left-hand side is a single nonterminal.
    pub fn is_context_free(&self) -> bool {
        self.rules
            .iter()
            .all(|(lhs, _)| matches!(&lhs[..], [Symbol::NonTerminal(_)]))
    }

    /// Converts to a context-free grammar, or returns `None` if some left-hand
    /// side is not a single nonterminal.
    pub fn to_context_free(&self) -> Option<Grammar> {
        let mut grammar = Grammar::with_sym_source(self.sym_source.clone());
        for &terminal in &self.terminals {
            grammar.add_to_vocabulary(terminal.into());
        }
        for &nonterminal in &self.nonterminals {
            grammar.add_to_vocabulary(nonterminal.into());
        }
        if let Some(start) = self.start {
            grammar.set_start(start);
        }
        for (lhs, rhs) in &self.rules {
            match &lhs[..] {
                &[Symbol::NonTerminal(lhs)] => {
                    grammar.add_rule(lhs, rhs);
                }
                _ => return None,
            }
        }
        Some(grammar)
    }

    /// Returns the most restrictive type the grammar belongs to.
    ///
    /// A grammar is context-sensitive when no rule shortens the sentential form,
    /// except `S -> ε` for a start symbol `S` that no right-hand side mentions.
    pub fn chomsky_type(&self) -> ChomskyType {
        if let Some(grammar) = self.to_context_free() {
            return grammar.chomsky_type();
        }
        let start_on_rhs = match self.start {
            Some(start) => self
                .rules
                .iter()
                .any(|(_, rhs)| rhs.contains(&Symbol::NonTerminal(start))),
            None => false,
        };
        let non_contracting = self.rules().all(|rule| {
            let erases_start = rule.rhs.is_empty()
                && !start_on_rhs
                && matches!(rule.lhs, &[Symbol::NonTerminal(lhs)] if Some(lhs) == self.start);
            rule.lhs.len() <= rule.rhs.len() || erases_start
        });
        debug!("non-contracting: {}", non_contracting);
        if non_contracting {
            ChomskyType::ContextSensitive
        } else {
            ChomskyType::Unrestricted
        }
    }

    fn stringify(&self, syms: &[Symbol]) -> String {
        syms.iter()
            .map(|&sym| {
                if self.sym_source.contains(sym) {
                    self.sym_source.name_of(sym).to_string()
                } else {
                    format!("{:?}", sym)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
