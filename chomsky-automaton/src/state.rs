use std::slice;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dense identifier of a state within one automaton.
#[derive(Clone, Copy, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StateId(u32);

impl StateId {
    /// Cast the state's ID to `usize`.
    #[inline]
    pub fn usize(self) -> usize {
        self.0 as usize
    }
}

impl From<usize> for StateId {
    #[inline]
    fn from(id: usize) -> Self {
        debug_assert!(id <= u32::MAX as usize, "ran out of state space?");
        StateId(id as u32)
    }
}

/// A set of states, kept sorted and free of duplicates, so that equal sets
/// compare and hash equal whatever order their states were found in.
#[derive(Clone, Debug, Default, Hash, Eq, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StateSet {
    states: Vec<StateId>,
}

impl StateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn singleton(state: StateId) -> Self {
        StateSet {
            states: vec![state],
        }
    }

    /// Adds a state. Returns `false` if it was already present.
    pub fn insert(&mut self, state: StateId) -> bool {
        match self.states.binary_search(&state) {
            Ok(_) => false,
            Err(pos) => {
                self.states.insert(pos, state);
                true
            }
        }
    }

    pub fn contains(&self, state: StateId) -> bool {
        self.states.binary_search(&state).is_ok()
    }

    /// Checks whether the sets share a state.
    pub fn intersects(&self, other: &StateSet) -> bool {
        self.iter().any(|state| other.contains(state))
    }

    pub fn iter(&self) -> impl Iterator<Item = StateId> + '_ {
        self.states.iter().copied()
    }

    pub fn as_slice(&self) -> &[StateId] {
        &self.states[..]
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl FromIterator<StateId> for StateSet {
    fn from_iter<I: IntoIterator<Item = StateId>>(iter: I) -> Self {
        let mut states: Vec<StateId> = iter.into_iter().collect();
        states.sort_unstable();
        states.dedup();
        StateSet { states }
    }
}

impl Extend<StateId> for StateSet {
    fn extend<I: IntoIterator<Item = StateId>>(&mut self, iter: I) {
        self.states.extend(iter);
        self.states.sort_unstable();
        self.states.dedup();
    }
}

impl<'a> IntoIterator for &'a StateSet {
    type Item = &'a StateId;
    type IntoIter = slice::Iter<'a, StateId>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}
