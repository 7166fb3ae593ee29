//! Subset construction.

use std::collections::{BTreeMap, VecDeque};
use std::ops::Deref;

use log::{debug, trace};

use chomsky_symbol::Terminal;

use crate::{Automaton, StateId, StateSet};

/// A deterministic automaton together with the subset of input states
/// each of its states stands for.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Dfa {
    automaton: Automaton,
    subsets: Vec<StateSet>,
}

impl Dfa {
    /// Returns the input states a state of this automaton stands for.
    pub fn subset(&self, state: StateId) -> &StateSet {
        &self.subsets[state.usize()]
    }

    /// Finds the state standing for the given subset, if it was reached.
    pub fn state_of(&self, subset: &StateSet) -> Option<StateId> {
        self.subsets
            .iter()
            .position(|candidate| candidate == subset)
            .map(StateId::from)
    }

    /// Returns the unique target of a state on a letter.
    pub fn target(&self, state: StateId, letter: Terminal) -> Option<StateId> {
        self.automaton.targets(state, letter).first().copied()
    }

    /// Follows a word from the start state. Returns `None` once a transition
    /// is missing.
    pub fn reach(&self, word: &[Terminal]) -> Option<StateId> {
        word.iter()
            .try_fold(self.start(), |state, &letter| self.target(state, letter))
    }

    pub fn into_automaton(self) -> Automaton {
        self.automaton
    }
}

impl Deref for Dfa {
    type Target = Automaton;

    fn deref(&self) -> &Self::Target {
        &self.automaton
    }
}

fn subset_name(nfa: &Automaton, subset: &StateSet) -> String {
    let names: Vec<&str> = subset.iter().map(|state| nfa.state_name(state)).collect();
    format!("{{{}}}", names.join(","))
}

pub(crate) fn determinize(nfa: &Automaton) -> Dfa {
    let mut ids: BTreeMap<StateSet, StateId> = BTreeMap::new();
    let mut subsets = vec![];
    let mut transitions = BTreeMap::new();
    let mut accepting = StateSet::new();
    let mut work = VecDeque::new();

    let mut intern = |subset: StateSet,
                      subsets: &mut Vec<StateSet>,
                      work: &mut VecDeque<StateId>|
     -> StateId {
        if let Some(&id) = ids.get(&subset) {
            return id;
        }
        let id = StateId::from(subsets.len());
        trace!("new subset {}", subset_name(nfa, &subset));
        if subset.intersects(nfa.accepting()) {
            accepting.insert(id);
        }
        ids.insert(subset.clone(), id);
        subsets.push(subset);
        work.push_back(id);
        id
    };

    let start = intern(StateSet::singleton(nfa.start()), &mut subsets, &mut work);
    while let Some(current) = work.pop_front() {
        for letter in nfa.alphabet() {
            let next: StateSet = subsets[current.usize()]
                .iter()
                .flat_map(|state| nfa.targets(state, letter).iter().copied())
                .collect();
            if next.is_empty() {
                continue;
            }
            let target = intern(next, &mut subsets, &mut work);
            transitions.insert((current, letter), StateSet::singleton(target));
        }
    }
    debug!(
        "subset construction: {} states into {}",
        nfa.num_states(),
        subsets.len()
    );

    let state_names = subsets
        .iter()
        .map(|subset| subset_name(nfa, subset))
        .collect();
    let automaton = Automaton::from_parts(
        nfa.sym_source().clone(),
        nfa.alphabet().collect(),
        state_names,
        transitions,
        start,
        accepting,
    );
    Dfa { automaton, subsets }
}
