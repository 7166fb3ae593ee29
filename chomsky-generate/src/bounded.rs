//! Enumeration of the strings of bounded length.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use chomsky_grammar::{Grammar, NonTerminal, Symbol, Terminal};

type Words = BTreeSet<Vec<Terminal>>;

/// The terminal strings of length at most `max_len` derivable from the start
/// symbol.
///
/// Two grammars sharing a symbol source can be compared by comparing their
/// bounded languages.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BoundedLanguage {
    max_len: usize,
    words: Words,
}

impl BoundedLanguage {
    /// Computes the least fixpoint of the derivable strings of every
    /// nonterminal, discarding strings longer than `max_len`. A grammar
    /// without a start symbol has the empty language.
    pub fn new(grammar: &Grammar, max_len: usize) -> Self {
        let mut derived: BTreeMap<NonTerminal, Words> = BTreeMap::new();
        let mut rounds = 0;
        loop {
            rounds += 1;
            let mut changed = false;
            for rule in grammar.rules() {
                let words = expand(rule.rhs, &derived, max_len);
                let entry = derived.entry(rule.lhs).or_default();
                for word in words {
                    changed |= entry.insert(word);
                }
            }
            if !changed {
                break;
            }
        }
        let words = grammar
            .start()
            .and_then(|start| derived.remove(&start))
            .unwrap_or_default();
        debug!(
            "{} strings of length at most {} after {} rounds",
            words.len(),
            max_len,
            rounds
        );
        BoundedLanguage { max_len, words }
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Iterates over the strings in canonical order.
    pub fn words(&self) -> impl Iterator<Item = &[Terminal]> + '_ {
        self.words.iter().map(|word| &word[..])
    }

    pub fn contains(&self, word: &[Terminal]) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the language without the empty string.
    pub fn without_empty(mut self) -> Self {
        self.words.remove(&[][..]);
        self
    }

    /// Formats every string by joining the names of its terminals. The empty
    /// string is formatted as an empty `String`.
    pub fn to_strings(&self, grammar: &Grammar) -> Vec<String> {
        self.words
            .iter()
            .map(|word| word.iter().map(|&terminal| grammar.name_of(terminal)).collect())
            .collect()
    }
}

/// Concatenates the known strings of each symbol of a body.
fn expand(rhs: &[Symbol], derived: &BTreeMap<NonTerminal, Words>, max_len: usize) -> Words {
    let mut prefixes: Words = BTreeSet::new();
    prefixes.insert(vec![]);
    for &sym in rhs {
        let mut next = BTreeSet::new();
        match sym {
            Symbol::Terminal(terminal) => {
                for prefix in &prefixes {
                    if prefix.len() < max_len {
                        let mut word = prefix.clone();
                        word.push(terminal);
                        next.insert(word);
                    }
                }
            }
            Symbol::NonTerminal(nonterminal) => {
                let suffixes = match derived.get(&nonterminal) {
                    Some(suffixes) => suffixes,
                    None => return BTreeSet::new(),
                };
                for prefix in &prefixes {
                    for suffix in suffixes {
                        if prefix.len() + suffix.len() <= max_len {
                            let mut word = prefix.clone();
                            word.extend(suffix.iter().copied());
                            next.insert(word);
                        }
                    }
                }
            }
            Symbol::Epsilon => continue,
        }
        if next.is_empty() {
            return next;
        }
        prefixes = next;
    }
    prefixes
}
