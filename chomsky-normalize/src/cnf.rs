//! The full pipeline to Chomsky Normal Form.

use std::collections::BTreeMap;
use std::fmt;

use log::{debug, trace};

use chomsky_grammar::{Grammar, GrammarError, NonTerminal, Symbol, Terminal};

use crate::{
    binarize, eliminate_epsilon, eliminate_non_generating, eliminate_unit,
    eliminate_unreachable,
};

/// A stage of the pipeline.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Stage {
    /// Empty bodies are gone.
    EliminateEpsilon,
    /// Unit rules are gone.
    EliminateUnit,
    /// Unreachable nonterminals are gone.
    EliminateUnreachable,
    /// Non-generating nonterminals are gone.
    EliminateNonGenerating,
    /// Every body has at most two symbols.
    Binarize,
    /// Terminals occur only in bodies of length one.
    EliminateMixedTerminals,
}

type Pass = fn(&Grammar) -> Result<Grammar, GrammarError>;

// Removing non-generating symbols can orphan others, so reachability runs twice.
const PIPELINE: [(Stage, Pass); 7] = [
    (Stage::EliminateEpsilon, eliminate_epsilon),
    (Stage::EliminateUnit, eliminate_unit),
    (Stage::EliminateUnreachable, eliminate_unreachable),
    (Stage::EliminateNonGenerating, eliminate_non_generating),
    (Stage::EliminateUnreachable, eliminate_unreachable),
    (Stage::Binarize, binarize),
    (Stage::EliminateMixedTerminals, eliminate_mixed_terminals),
];

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let description = match self {
            Stage::EliminateEpsilon => "after eliminating empty string productions",
            Stage::EliminateUnit => "after eliminating renaming",
            Stage::EliminateUnreachable => "after eliminating inaccessible symbols",
            Stage::EliminateNonGenerating => "after eliminating non-productive symbols",
            Stage::Binarize => "after shortening bodies",
            Stage::EliminateMixedTerminals => "after eliminating mixed terminals",
        };
        f.write_str(description)
    }
}

/// Replaces every terminal in a body of two or more symbols with a helper
/// nonterminal that derives exactly that terminal. Helpers are shared between
/// occurrences of one terminal.
pub fn eliminate_mixed_terminals(grammar: &Grammar) -> Result<Grammar, GrammarError> {
    grammar.validate()?;
    let mut result = grammar.clone();
    result.clear_rules();
    let mut helpers: BTreeMap<Terminal, NonTerminal> = BTreeMap::new();

    for rule in grammar.rules() {
        if rule.rhs.len() < 2 {
            result.add_rule(rule.lhs, rule.rhs);
            continue;
        }
        let mut rhs = Vec::with_capacity(rule.rhs.len());
        for &sym in rule.rhs {
            let sym = match sym {
                Symbol::Terminal(terminal) => match helpers.get(&terminal) {
                    Some(&helper) => helper.into(),
                    None => {
                        let helper = result.fresh_nonterminal()?;
                        trace!("helper {} -> {}", result.name_of(helper), result.name_of(terminal));
                        result.add_rule(helper, &[terminal.into()]);
                        helpers.insert(terminal, helper);
                        helper.into()
                    }
                },
                other => other,
            };
            rhs.push(sym);
        }
        result.add_rule(rule.lhs, &rhs[..]);
    }
    Ok(result)
}

/// Converts the grammar to Chomsky Normal Form.
pub fn to_cnf(grammar: &Grammar) -> Result<Grammar, GrammarError> {
    grammar.validate()?;
    let mut current = grammar.clone();
    for (stage, pass) in PIPELINE {
        current = pass(&current)?;
        debug!("{}: {} rules", stage, current.num_rules());
    }
    Ok(current)
}

/// Converts the grammar to Chomsky Normal Form and returns the grammar after
/// every stage. The last entry is the final result.
pub fn to_cnf_with_steps(grammar: &Grammar) -> Result<Vec<(Stage, Grammar)>, GrammarError> {
    grammar.validate()?;
    let mut steps: Vec<(Stage, Grammar)> = Vec::with_capacity(PIPELINE.len());
    for (stage, pass) in PIPELINE {
        let next = pass(steps.last().map_or(grammar, |(_, previous)| previous))?;
        debug!("{}: {} rules", stage, next.num_rules());
        steps.push((stage, next));
    }
    Ok(steps)
}

/// Checks the normal form: every body is a single terminal or two nonterminals.
/// The start symbol alone may have an empty body.
pub fn is_cnf(grammar: &Grammar) -> bool {
    grammar.rules().all(|rule| match rule.rhs {
        [Symbol::Terminal(_)] => true,
        [Symbol::NonTerminal(_), Symbol::NonTerminal(_)] => true,
        [] => Some(rule.lhs) == grammar.start(),
        _ => false,
    })
}
