use log::debug;

use chomsky_automaton::Automaton;
use chomsky_grammar::{Grammar, NonTerminal, Symbol};

use crate::ConvertError;

/// Builds a right-linear grammar from an automaton.
///
/// Every state becomes a nonterminal named after it. A transition from `p` to
/// `q` on `a` becomes `p -> aq`, plus `p -> a` when `q` is accepting. An
/// accepting start state gets `start -> ε`.
///
/// # Errors
///
/// Fails when a state is named like one of the letters.
pub fn automaton_to_grammar(automaton: &Automaton) -> Result<Grammar, ConvertError> {
    let mut grammar = Grammar::with_sym_source(automaton.sym_source().clone());
    for letter in automaton.alphabet() {
        grammar.add_to_vocabulary(Symbol::Terminal(letter));
    }
    let states = automaton
        .states()
        .map(|state| grammar.nonterminal(automaton.state_name(state)))
        .collect::<Result<Vec<NonTerminal>, _>>()?;

    for (from, letter, targets) in automaton.transitions() {
        let lhs = states[from.usize()];
        for to in targets.iter() {
            grammar.add_rule(lhs, &[letter.into(), states[to.usize()].into()]);
            if automaton.is_accepting(to) {
                grammar.add_rule(lhs, &[letter.into()]);
            }
        }
    }
    let start = states[automaton.start().usize()];
    if automaton.is_accepting(automaton.start()) {
        grammar.add_rule(start, &[]);
    }
    grammar.set_start(start);
    debug!(
        "automaton with {} states into grammar with {} rules",
        automaton.num_states(),
        grammar.num_rules()
    );
    Ok(grammar)
}
