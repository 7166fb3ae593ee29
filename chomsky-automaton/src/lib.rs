//! Finite automata over terminal symbols.
//!
//! The transition relation maps a state and a letter to a *set* of states, so
//! nondeterminism is first-class. [`Automaton::determinize`] builds an
//! equivalent deterministic automaton through subset construction.

#![deny(unsafe_code)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]

mod automaton;
mod builder;
mod error;
mod state;
mod subset;

pub use self::automaton::Automaton;
pub use self::builder::AutomatonBuilder;
pub use self::error::AutomatonError;
pub use self::state::{StateId, StateSet};
pub use self::subset::Dfa;
