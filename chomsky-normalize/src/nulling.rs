//! Elimination of empty bodies.

use log::{debug, trace};

use chomsky_grammar::{Grammar, GrammarError, Symbol, SymbolBitSet};

/// Rewrites the grammar so that no body is empty, except possibly the start
/// symbol's own.
///
/// Every body is replaced by all its variants obtained by independently deleting
/// occurrences of nullable nonterminals. Variants that delete every symbol are
/// dropped. The start symbol keeps an empty body iff it is nullable.
pub fn eliminate_epsilon(grammar: &Grammar) -> Result<Grammar, GrammarError> {
    grammar.validate()?;
    let start = grammar.start().ok_or(GrammarError::MissingStart)?;
    let nullable = grammar.nullable_symbols();
    debug!("nullable symbols: {}", nullable.iter().count());

    let mut result = grammar.clone();
    result.clear_rules();
    for rule in grammar.rules() {
        for rhs in omissions(rule.rhs, &nullable) {
            if !rhs.is_empty() {
                trace!("{} -> {}", grammar.name_of(rule.lhs), grammar.stringify_rhs(&rhs));
                result.add_rule(rule.lhs, &rhs[..]);
            }
        }
    }
    if nullable[start] {
        result.add_rule(start, &[]);
    }
    Ok(result)
}

/// Enumerates every variant of the body with any subset of its nullable
/// occurrences deleted.
fn omissions(rhs: &[Symbol], nullable: &SymbolBitSet) -> Vec<Vec<Symbol>> {
    let mut variants = vec![Vec::with_capacity(rhs.len())];
    for &sym in rhs {
        if nullable[sym] {
            let with_sym: Vec<Vec<Symbol>> = variants
                .iter()
                .map(|variant| {
                    let mut variant = variant.clone();
                    variant.push(sym);
                    variant
                })
                .collect();
            variants.extend(with_sym);
        } else {
            for variant in &mut variants {
                variant.push(sym);
            }
        }
    }
    variants
}
