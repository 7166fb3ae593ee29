//! Generate random strings from a grammar.

use std::error::Error;
use std::fmt;

use log::trace;
use rand::rngs::ThreadRng;
use rand::{thread_rng, Rng};

use chomsky_grammar::{Grammar, Symbol, SymbolBitSet, Terminal};

/// Returned when we fail to generate a random output.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RandomGenError {
    /// We produced more terminals, or expanded more nonterminals, than the
    /// given limits allow.
    LimitExceeded,
    /// The grammar has no start symbol, or its start symbol derives no
    /// terminal string.
    NoStart,
}

impl fmt::Display for RandomGenError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RandomGenError::LimitExceeded => write!(f, "generation limit exceeded"),
            RandomGenError::NoStart => write!(f, "grammar has no productive start symbol"),
        }
    }
}

impl Error for RandomGenError {}

/// Limits for generation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Limits {
    /// How many terminals we are allowed to produce.
    pub terminals: u64,
    /// How many nonterminals we are allowed to expand.
    pub expansions: u64,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            terminals: 1_000,
            expansions: 10_000,
        }
    }
}

/// Extension trait that allows generation.
pub trait Random {
    /// Generates a terminal string derivable from the start symbol, driven by
    /// the given **rng**. Each nonterminal expands to one of its productive
    /// bodies, picked uniformly.
    ///
    /// # Errors
    ///
    /// Returns an error when limits are exceeded or nothing can be derived.
    fn random<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        limits: Limits,
    ) -> Result<Vec<Terminal>, RandomGenError>;

    /// Same as `fn random`, but joins the names of the generated terminals.
    fn random_string<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        limits: Limits,
    ) -> Result<String, RandomGenError>;

    /// Same as `fn random`, but draws from the thread-local generator, so the
    /// output cannot be reproduced. Pass a seeded generator such as
    /// `SmallRng::seed_from_u64` to `random` for repeatable words.
    fn with_thread_rng(&self, limits: Limits) -> Result<Vec<Terminal>, RandomGenError> {
        let mut rng: ThreadRng = thread_rng();
        self.random(&mut rng, limits)
    }
}

impl Random for Grammar {
    fn random<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        limits: Limits,
    ) -> Result<Vec<Terminal>, RandomGenError> {
        let productive = self.productive_symbols();
        let start = self
            .start()
            .filter(|&start| productive[start])
            .ok_or(RandomGenError::NoStart)?;
        let mut work: Vec<Symbol> = vec![start.into()];
        let mut result = vec![];
        let mut expansions = 0;
        while let Some(sym) = work.pop() {
            match sym {
                Symbol::Terminal(terminal) => {
                    result.push(terminal);
                    if result.len() as u64 > limits.terminals {
                        return Err(RandomGenError::LimitExceeded);
                    }
                }
                Symbol::NonTerminal(nonterminal) => {
                    expansions += 1;
                    if expansions > limits.expansions {
                        return Err(RandomGenError::LimitExceeded);
                    }
                    let choices: Vec<&[Symbol]> = self
                        .productions(nonterminal)
                        .filter(|rhs| is_productive(&productive, rhs))
                        .collect();
                    let rhs = choices[rng.gen_range(0..choices.len())];
                    trace!("pick {} -> {}", self.name_of(nonterminal), self.stringify_rhs(rhs));
                    work.extend(rhs.iter().rev().copied());
                }
                Symbol::Epsilon => {}
            }
        }
        Ok(result)
    }

    fn random_string<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        limits: Limits,
    ) -> Result<String, RandomGenError> {
        let terminals = self.random(rng, limits)?;
        Ok(terminals
            .into_iter()
            .map(|terminal| self.name_of(terminal))
            .collect())
    }
}

fn is_productive(productive: &SymbolBitSet, rhs: &[Symbol]) -> bool {
    rhs.iter().all(|&sym| productive[sym])
}
