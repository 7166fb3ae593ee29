use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use bit_vec::BitVec;
use log::trace;

use chomsky_symbol::{Symbol, SymbolSource, Terminal};

use crate::subset::{self, Dfa};
use crate::{StateId, StateSet};

/// A finite automaton.
///
/// The start state, every accepting state and every transition target are
/// states of the automaton. [`AutomatonBuilder`] checks this before building.
///
/// [`AutomatonBuilder`]: crate::AutomatonBuilder
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Automaton {
    sym_source: SymbolSource,
    alphabet: BTreeSet<Terminal>,
    state_names: Vec<String>,
    transitions: BTreeMap<(StateId, Terminal), StateSet>,
    start: StateId,
    accepting: StateSet,
}

impl Automaton {
    pub(crate) fn from_parts(
        sym_source: SymbolSource,
        alphabet: BTreeSet<Terminal>,
        state_names: Vec<String>,
        transitions: BTreeMap<(StateId, Terminal), StateSet>,
        start: StateId,
        accepting: StateSet,
    ) -> Self {
        Automaton {
            sym_source,
            alphabet,
            state_names,
            transitions,
            start,
            accepting,
        }
    }

    pub fn num_states(&self) -> usize {
        self.state_names.len()
    }

    /// Iterates over all states.
    pub fn states(&self) -> impl Iterator<Item = StateId> {
        (0..self.num_states()).map(StateId::from)
    }

    /// Returns the name of a state.
    ///
    /// # Panics
    ///
    /// Panics if the state does not belong to this automaton.
    pub fn state_name(&self, state: StateId) -> &str {
        &self.state_names[state.usize()]
    }

    /// Looks up a state by name.
    pub fn state_by_name(&self, name: &str) -> Option<StateId> {
        self.state_names
            .iter()
            .position(|state_name| state_name == name)
            .map(StateId::from)
    }

    pub fn sym_source(&self) -> &SymbolSource {
        &self.sym_source
    }

    /// Iterates over the alphabet in canonical order.
    pub fn alphabet(&self) -> impl Iterator<Item = Terminal> + '_ {
        self.alphabet.iter().copied()
    }

    /// Looks up a letter of the alphabet by name.
    pub fn letter(&self, name: &str) -> Option<Terminal> {
        self.sym_source
            .get(name)
            .and_then(Symbol::terminal)
            .filter(|terminal| self.alphabet.contains(terminal))
    }

    pub fn letter_name(&self, letter: Terminal) -> &str {
        self.sym_source.name_of(letter.into())
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn accepting(&self) -> &StateSet {
        &self.accepting
    }

    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accepting.contains(state)
    }

    /// Returns the targets of a state on a letter. A missing entry has no
    /// targets.
    pub fn targets(&self, state: StateId, letter: Terminal) -> &[StateId] {
        self.transitions
            .get(&(state, letter))
            .map_or(&[][..], |targets| targets.as_slice())
    }

    /// Iterates over the transition relation.
    pub fn transitions(&self) -> impl Iterator<Item = (StateId, Terminal, &StateSet)> + '_ {
        self.transitions
            .iter()
            .map(|(&(from, letter), targets)| (from, letter, targets))
    }

    /// Returns the number of transition entries.
    pub fn num_transitions(&self) -> usize {
        self.transitions.len()
    }

    fn state_bits(&self, states: impl IntoIterator<Item = StateId>) -> BitVec {
        let mut bits = BitVec::from_elem(self.num_states(), false);
        for state in states {
            bits.set(state.usize(), true);
        }
        bits
    }

    /// Returns the states reachable from any of `current` on `letter`.
    fn step(&self, current: &BitVec, letter: Terminal) -> BitVec {
        let mut next = BitVec::from_elem(self.num_states(), false);
        for (index, present) in current.iter().enumerate() {
            if present {
                for &target in self.targets(StateId::from(index), letter) {
                    next.set(target.usize(), true);
                }
            }
        }
        next
    }

    /// Runs the automaton over a word, tracking every state reachable by the
    /// prefix consumed so far. Returns the states reachable by the whole word.
    pub fn run(&self, word: &[Terminal]) -> StateSet {
        let mut current = self.state_bits(Some(self.start));
        for &letter in word {
            current = self.step(&current, letter);
            if current.none() {
                trace!("dead after {}", self.letter_name(letter));
                break;
            }
        }
        current
            .iter()
            .enumerate()
            .filter_map(|(index, present)| if present { Some(StateId::from(index)) } else { None })
            .collect()
    }

    /// Checks whether the word belongs to the language.
    pub fn accepts(&self, word: &[Terminal]) -> bool {
        self.run(word).intersects(&self.accepting)
    }

    /// Checks whether a string belongs to the language, reading one letter per
    /// character. A character outside the alphabet rejects the string.
    pub fn accepts_str(&self, input: &str) -> bool {
        let word: Option<Vec<Terminal>> = input
            .chars()
            .map(|ch| self.letter(&ch.to_string()))
            .collect();
        match word {
            Some(word) => self.accepts(&word[..]),
            None => false,
        }
    }

    /// Checks whether every state has at most one target per letter. Missing
    /// transitions are allowed and reject.
    pub fn is_deterministic(&self) -> bool {
        self.transitions.values().all(|targets| targets.len() <= 1)
    }

    /// Checks whether every state has at least one target per letter.
    pub fn is_complete(&self) -> bool {
        self.states().all(|state| {
            self.alphabet()
                .all(|letter| !self.targets(state, letter).is_empty())
        })
    }

    /// Builds an equivalent deterministic automaton by subset construction.
    pub fn determinize(&self) -> Dfa {
        subset::determinize(self)
    }
}

impl fmt::Display for Automaton {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let set = |states: &StateSet| {
            let names: Vec<&str> = states.iter().map(|state| self.state_name(state)).collect();
            format!("{{{}}}", names.join(","))
        };
        writeln!(f, "states: {}", self.state_names.join(", "))?;
        let letters: Vec<&str> = self.alphabet().map(|letter| self.letter_name(letter)).collect();
        writeln!(f, "alphabet: {}", letters.join(", "))?;
        for (from, letter, targets) in self.transitions() {
            writeln!(
                f,
                "{} --{}--> {}",
                self.state_name(from),
                self.letter_name(letter),
                set(targets)
            )?;
        }
        writeln!(f, "start: {}", self.state_name(self.start))?;
        writeln!(f, "final: {}", set(&self.accepting))
    }
}
