use chomsky_grammar::{Grammar, GrammarError};
use chomsky_load::GrammarLoadExt;
use chomsky_normalize::{GrammarNormalizeExt, Stage};
use test_case::test_case;

mod support;

const VARIANT: &str = r#"
    S -> A
    A -> aX | bX
    X -> BX | ε | b
    B -> AD
    D -> aD
    C -> Ca
"#;

#[test]
fn test_passes_in_sequence() {
    support::init_logging();
    let grammar = Grammar::load(VARIANT).unwrap();

    let grammar = grammar.eliminate_epsilon().unwrap();
    support::assert_bnf(
        &grammar,
        "S -> A\nA -> a | aX | b | bX\nX -> b | B | BX\nB -> AD\nD -> aD\nC -> Ca\n",
    );

    let grammar = grammar.eliminate_unit().unwrap();
    support::assert_bnf(
        &grammar,
        "S -> a | aX | b | bX\nA -> a | aX | b | bX\nX -> b | AD | BX\nB -> AD\nD -> aD\nC -> Ca\n",
    );

    let grammar = grammar.eliminate_unreachable().unwrap();
    support::assert_bnf(
        &grammar,
        "S -> a | aX | b | bX\nA -> a | aX | b | bX\nX -> b | AD | BX\nB -> AD\nD -> aD\n",
    );

    let grammar = grammar.eliminate_non_generating().unwrap();
    support::assert_bnf(&grammar, "S -> a | aX | b | bX\nA -> a | aX | b | bX\nX -> b\n");
}

#[test]
fn test_to_cnf() {
    support::init_logging();
    let grammar = Grammar::load(VARIANT).unwrap();
    let cnf = grammar.to_cnf().unwrap();
    support::assert_bnf(&cnf, "S -> a | b | 0X | 1X\nX -> b\n0 -> a\n1 -> b\n");
    assert!(cnf.is_cnf());
    assert!(!grammar.is_cnf());
}

#[test]
fn test_to_cnf_with_steps() {
    let grammar = Grammar::load(VARIANT).unwrap();
    let steps = grammar.to_cnf_with_steps().unwrap();
    let stages: Vec<Stage> = steps.iter().map(|&(stage, _)| stage).collect();
    assert_eq!(
        stages,
        [
            Stage::EliminateEpsilon,
            Stage::EliminateUnit,
            Stage::EliminateUnreachable,
            Stage::EliminateNonGenerating,
            Stage::EliminateUnreachable,
            Stage::Binarize,
            Stage::EliminateMixedTerminals,
        ]
    );
    let (_, last) = steps.last().unwrap();
    assert_eq!(last, &grammar.to_cnf().unwrap());
    assert_eq!(
        Stage::EliminateUnit.to_string(),
        "after eliminating renaming"
    );
}

#[test]
fn test_input_is_untouched() {
    let grammar = Grammar::load(VARIANT).unwrap();
    let copy = grammar.clone();
    grammar.to_cnf().unwrap();
    assert_eq!(grammar, copy);
}

#[test]
fn test_epsilon_powerset() {
    let grammar = Grammar::load("S -> AxA\nA -> a | ε").unwrap();
    let grammar = grammar.eliminate_epsilon().unwrap();
    support::assert_bnf(&grammar, "S -> x | xA | Ax | AxA\nA -> a\n");
}

#[test]
fn test_start_keeps_epsilon_iff_nullable() {
    let grammar = Grammar::load("S -> AB\nA -> a | ε\nB -> b | ε").unwrap();
    let once = grammar.eliminate_epsilon().unwrap();
    support::assert_bnf(&once, "S -> ε | A | AB | B\nA -> a\nB -> b\n");
    let twice = once.eliminate_epsilon().unwrap();
    assert_eq!(once, twice);

    let grammar = Grammar::load("S -> aA\nA -> a | ε").unwrap();
    let once = grammar.eliminate_epsilon().unwrap();
    support::assert_bnf(&once, "S -> a | aA\nA -> a\n");
}

#[test_case("S -> A | s\nA -> B | a\nB -> A | S | b", "S -> s | a | b\nA -> s | a | b\nB -> s | a | b\n" ; "cycle")]
#[test_case("S -> S | a", "S -> a\n" ; "self loop")]
#[test_case("S -> A | ε\nA -> a", "S -> ε | a\nA -> a\n" ; "start epsilon stays")]
fn test_eliminate_unit(source: &str, expected: &str) {
    let grammar = Grammar::load(source).unwrap();
    support::assert_bnf(&grammar.eliminate_unit().unwrap(), expected);
}

#[test]
fn test_unit_does_not_copy_start_epsilon() {
    let grammar = Grammar::load("S -> aA | ε\nA -> S").unwrap();
    support::assert_bnf(&grammar.eliminate_unit().unwrap(), "S -> ε | aA\nA -> aA\n");
}

#[test]
fn test_binarize_shares_helpers() {
    let grammar = Grammar::load("S -> abcd | abc").unwrap();
    let binarized = grammar.binarize().unwrap();
    support::assert_bnf(&binarized, "S -> 0c | 1d\n0 -> ab\n1 -> 0c\n");
    assert!(!binarized.is_cnf());
    assert!(binarized.eliminate_mixed_terminals().unwrap().is_cnf());
}

#[test]
fn test_fresh_names_avoid_existing() {
    let grammar = Grammar::load("S -> abc\n0 -> a").unwrap();
    support::assert_bnf(&grammar.binarize().unwrap(), "S -> 1c\n0 -> a\n1 -> ab\n");
}

#[test]
fn test_unproductive_start_is_kept() {
    let grammar = Grammar::load("S -> aS").unwrap();
    let cnf = grammar.to_cnf().unwrap();
    assert!(cnf.is_empty());
    assert!(cnf.has_nonterminal(cnf.start().unwrap()));
    assert_eq!(cnf.validate(), Ok(()));
}

#[test]
fn test_malformed_input_is_reported() {
    let mut grammar = Grammar::new();
    let s = grammar.nonterminal("S").unwrap();
    grammar.rule(s).rhs([]);
    assert_eq!(grammar.to_cnf(), Err(GrammarError::MissingStart));
    assert_eq!(grammar.eliminate_unit(), Err(GrammarError::MissingStart));
}

#[test_case("S -> aSb | ε" ; "balanced")]
#[test_case("E -> E \"+\" T | T\nT -> T \"*\" F | F\nF -> \"(\" E \")\" | \"x\"" ; "arithmetic")]
#[test_case("S -> ABCDE | a\nA -> ε | b\nB -> A\nC -> AB | c\nD -> d\nE -> DD | e" ; "many nullable")]
#[test_case("S -> SS | aSb | ba | ε" ; "ambiguous")]
fn test_cnf_shape(source: &str) {
    support::init_logging();
    let grammar = Grammar::load(source).unwrap();
    let cnf = grammar.to_cnf().unwrap();
    assert!(cnf.is_cnf(), "{}", cnf);
    assert_eq!(cnf.validate(), Ok(()));
    for nonterminal in cnf.nonterminals() {
        for rhs in cnf.productions(nonterminal) {
            assert!(rhs.len() == 1 || rhs.len() == 2 || Some(nonterminal) == cnf.start());
        }
    }
}
