use std::collections::BTreeMap;
use std::iter;

use log::trace;

use chomsky_grammar::{Grammar, GrammarError, NonTerminal, Symbol};

/// Shortens every body longer than two symbols.
///
/// The first two symbols are repeatedly replaced with a helper nonterminal that
/// derives exactly that pair. Helpers are shared between equal pairs.
pub fn binarize(grammar: &Grammar) -> Result<Grammar, GrammarError> {
    grammar.validate()?;
    let mut result = grammar.clone();
    result.clear_rules();
    let mut helpers: BTreeMap<[Symbol; 2], NonTerminal> = BTreeMap::new();

    for rule in grammar.rules() {
        let mut rhs = rule.rhs.to_vec();
        while rhs.len() > 2 {
            let pair = [rhs[0], rhs[1]];
            let helper = match helpers.get(&pair) {
                Some(&helper) => helper,
                None => {
                    let helper = result.fresh_nonterminal()?;
                    trace!(
                        "helper {} -> {}",
                        result.name_of(helper),
                        result.stringify_rhs(&pair)
                    );
                    result.add_rule(helper, &pair);
                    helpers.insert(pair, helper);
                    helper
                }
            };
            rhs = iter::once(Symbol::from(helper))
                .chain(rhs[2..].iter().copied())
                .collect();
        }
        result.add_rule(rule.lhs, &rhs[..]);
    }
    Ok(result)
}
