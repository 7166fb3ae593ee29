//! Elimination of unit rules `A -> B`.

use log::debug;

use chomsky_grammar::{Grammar, GrammarError, Symbol};
use chomsky_symbol_bit_matrix::GrammarSymbolBitMatrixExt;

fn is_unit(rhs: &[Symbol]) -> bool {
    matches!(rhs, [Symbol::NonTerminal(_)])
}

/// Replaces unit rules with the bodies they lead to.
///
/// Every `A` gets the non-unit bodies of each `B` with `A ⇒+ B` through unit
/// rules. Empty bodies are not copied, because only the start symbol may have one.
/// Self-loops and cycles of unit rules vanish.
pub fn eliminate_unit(grammar: &Grammar) -> Result<Grammar, GrammarError> {
    grammar.validate()?;
    let units = grammar.unit_derivation_matrix();

    let mut result = grammar.clone();
    result.clear_rules();
    for lhs in grammar.nonterminals() {
        for rhs in grammar.productions(lhs).filter(|rhs| !is_unit(rhs)) {
            result.add_rule(lhs, rhs);
        }
        for id in units.iter_row_syms(lhs) {
            let target = match grammar.sym_source().symbol(id).nonterminal() {
                Some(target) if target != lhs => target,
                _ => continue,
            };
            debug!("inlining {} into {}", grammar.name_of(target), grammar.name_of(lhs));
            for rhs in grammar.productions(target) {
                if !rhs.is_empty() && !is_unit(rhs) {
                    result.add_rule(lhs, rhs);
                }
            }
        }
    }
    Ok(result)
}
