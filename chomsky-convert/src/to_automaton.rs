use std::collections::BTreeMap;

use log::debug;

use chomsky_automaton::{Automaton, AutomatonBuilder, StateId};
use chomsky_classify::is_right_linear_body;
use chomsky_grammar::{Grammar, GrammarError, NonTerminal, Symbol};
use chomsky_symbol_bit_matrix::GrammarSymbolBitMatrixExt;

use crate::ConvertError;

const SINK_NAME: &str = "end";

/// Builds an automaton from a right-linear grammar.
///
/// Every nonterminal becomes a state named after it. `A -> aB` becomes a
/// transition from `A` to `B` on `a`, and `A -> a` a transition from `A` to an
/// accepting sink. `A -> ε` makes `A` accepting. A unit body `A -> B` gives `A`
/// every transition of `B`, as well as its acceptance.
pub fn grammar_to_automaton(grammar: &Grammar) -> Result<Automaton, ConvertError> {
    grammar.validate()?;
    if let Some(rule) = grammar.rules().find(|rule| !is_right_linear_body(rule.rhs)) {
        return Err(ConvertError::NotRightLinear {
            lhs: grammar.name_of(rule.lhs).to_string(),
            rhs: grammar.stringify_rhs(rule.rhs),
        });
    }
    let start = grammar.start().ok_or(GrammarError::MissingStart)?;
    let units = grammar.unit_derivation_matrix();

    let mut builder = AutomatonBuilder::with_sym_source(grammar.sym_source().clone());
    for terminal in grammar.terminals() {
        builder.add_letter(terminal)?;
    }
    let mut states: BTreeMap<NonTerminal, StateId> = BTreeMap::new();
    states.insert(start, builder.state(grammar.name_of(start)));
    for nonterminal in grammar.nonterminals() {
        let state = builder.state(grammar.name_of(nonterminal));
        states.insert(nonterminal, state);
    }
    let mut sink = None;

    for (&lhs, &from) in &states {
        let derived = grammar
            .nonterminals()
            .filter(|&other| other == lhs || units.contains(lhs, other));
        for source in derived {
            for rhs in grammar.productions(source) {
                match rhs {
                    [] => {
                        builder.accepting(from);
                    }
                    &[Symbol::Terminal(letter)] => {
                        let to = *sink.get_or_insert_with(|| {
                            let name = sink_name(grammar);
                            builder.state(&name)
                        });
                        builder.transition(from, letter, to).accepting(to);
                    }
                    &[Symbol::Terminal(letter), Symbol::NonTerminal(next)] => {
                        builder.transition(from, letter, states[&next]);
                    }
                    _ => {}
                }
            }
        }
    }
    builder.start(states[&start]);
    let automaton = builder.build()?;
    debug!(
        "grammar with {} rules into automaton with {} states",
        grammar.num_rules(),
        automaton.num_states()
    );
    Ok(automaton)
}

/// Picks a name for the sink that no symbol uses.
fn sink_name(grammar: &Grammar) -> String {
    let source = grammar.sym_source();
    if source.get(SINK_NAME).is_none() {
        return SINK_NAME.to_string();
    }
    (1..)
        .map(|n| format!("{}{}", SINK_NAME, n))
        .find(|name| source.get(name).is_none())
        .unwrap_or_else(|| unreachable!("unbounded name sequence"))
}
