//! Automata are built with the builder pattern and validated at the end.

use std::collections::{BTreeMap, BTreeSet};

use chomsky_symbol::{Symbol, SymbolSource, Terminal};

use crate::{Automaton, AutomatonError, StateId, StateSet};

/// The automaton builder.
#[derive(Clone, Debug, Default)]
pub struct AutomatonBuilder {
    sym_source: SymbolSource,
    alphabet: BTreeSet<Terminal>,
    state_names: Vec<String>,
    by_name: BTreeMap<String, StateId>,
    transitions: BTreeMap<(StateId, Terminal), StateSet>,
    start: Option<StateId>,
    accepting: StateSet,
}

impl AutomatonBuilder {
    /// Creates a builder with an empty symbol space.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder whose letters are terminals of the given source.
    pub fn with_sym_source(sym_source: SymbolSource) -> Self {
        AutomatonBuilder {
            sym_source,
            ..Self::default()
        }
    }

    /// Returns the state with the given name, declaring it if necessary.
    pub fn state(&mut self, name: &str) -> StateId {
        if let Some(&state) = self.by_name.get(name) {
            return state;
        }
        let state = StateId::from(self.state_names.len());
        self.state_names.push(name.to_string());
        self.by_name.insert(name.to_string(), state);
        state
    }

    /// Declares several states.
    pub fn states<const N: usize>(&mut self, names: [&str; N]) -> [StateId; N] {
        names.map(|name| self.state(name))
    }

    /// Adds the named letter to the alphabet.
    pub fn letter(&mut self, name: &str) -> Result<Terminal, AutomatonError> {
        let terminal = self.sym_source.terminal(name)?;
        self.alphabet.insert(terminal);
        Ok(terminal)
    }

    /// Adds several named letters to the alphabet.
    pub fn letters<const N: usize>(
        &mut self,
        names: [&str; N],
    ) -> Result<[Terminal; N], AutomatonError> {
        let mut result = Vec::with_capacity(N);
        for name in names {
            result.push(self.letter(name)?);
        }
        Ok(result
            .try_into()
            .unwrap_or_else(|_| unreachable!("one letter per name")))
    }

    /// Adds a terminal of this builder's source to the alphabet.
    pub fn add_letter(&mut self, letter: Terminal) -> Result<(), AutomatonError> {
        if self.sym_source.contains(Symbol::Terminal(letter)) {
            self.alphabet.insert(letter);
            Ok(())
        } else {
            Err(AutomatonError::UnknownLetter {
                letter: self.describe(letter),
            })
        }
    }

    /// Adds `to` to the targets of `from` on `letter`.
    pub fn transition(&mut self, from: StateId, letter: Terminal, to: StateId) -> &mut Self {
        self.transitions
            .entry((from, letter))
            .or_default()
            .insert(to);
        self
    }

    /// Assigns the start state.
    pub fn start(&mut self, state: StateId) -> &mut Self {
        self.start = Some(state);
        self
    }

    /// Marks a state as accepting.
    pub fn accepting(&mut self, state: StateId) -> &mut Self {
        self.accepting.insert(state);
        self
    }

    /// Checks the structural invariants and builds the automaton.
    pub fn build(self) -> Result<Automaton, AutomatonError> {
        let start = self.start.ok_or(AutomatonError::MissingStart)?;
        let num_states = self.state_names.len();
        let check_state = |state: StateId| {
            if state.usize() < num_states {
                Ok(())
            } else {
                Err(AutomatonError::UnknownState { state })
            }
        };
        check_state(start)?;
        for state in self.accepting.iter() {
            check_state(state)?;
        }
        for (&(from, letter), targets) in &self.transitions {
            check_state(from)?;
            for to in targets.iter() {
                check_state(to)?;
            }
            if !self.alphabet.contains(&letter) {
                return Err(AutomatonError::UnknownLetter {
                    letter: self.describe(letter),
                });
            }
        }
        Ok(Automaton::from_parts(
            self.sym_source,
            self.alphabet,
            self.state_names,
            self.transitions,
            start,
            self.accepting,
        ))
    }

    fn describe(&self, letter: Terminal) -> String {
        if self.sym_source.contains(Symbol::Terminal(letter)) {
            self.sym_source.name_of(letter.into()).to_string()
        } else {
            format!("{:?}", letter)
        }
    }
}
