//! Elimination of useless nonterminals.

use log::debug;

use chomsky_grammar::{Grammar, GrammarError};
use chomsky_symbol_bit_matrix::GrammarSymbolBitMatrixExt;

/// Discards every nonterminal that is not reachable from the start symbol,
/// together with its bodies.
pub fn eliminate_unreachable(grammar: &Grammar) -> Result<Grammar, GrammarError> {
    grammar.validate()?;
    let start = grammar.start().ok_or(GrammarError::MissingStart)?;
    let reachability = grammar.reachability_matrix();

    let mut result = grammar.clone();
    for nonterminal in grammar.nonterminals() {
        if !reachability[(start, nonterminal)] {
            debug!("unreachable: {}", grammar.name_of(nonterminal));
            result.remove_nonterminal(nonterminal);
        }
    }
    Ok(result)
}

/// Discards every nonterminal that derives no terminal string, and every body
/// that mentions one. The start symbol stays in the vocabulary even when it
/// generates nothing.
pub fn eliminate_non_generating(grammar: &Grammar) -> Result<Grammar, GrammarError> {
    grammar.validate()?;
    let start = grammar.start().ok_or(GrammarError::MissingStart)?;
    let productive = grammar.productive_symbols();

    let mut result = grammar.clone();
    result.retain(|rule| rule.rhs.iter().all(|&sym| productive[sym]));
    for nonterminal in grammar.nonterminals() {
        if !productive[nonterminal] && nonterminal != start {
            debug!("non-generating: {}", grammar.name_of(nonterminal));
            result.remove_nonterminal(nonterminal);
        }
    }
    Ok(result)
}
