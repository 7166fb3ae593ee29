use chomsky_classify::{ChomskyType, ClassifyError, GrammarClassifyExt, PhraseStructureGrammar};
use chomsky_grammar::{Grammar, Symbol};
use test_case::test_case;

fn syms(grammar: &mut PhraseStructureGrammar, text: &str) -> Vec<Symbol> {
    text.chars()
        .map(|ch| {
            let name = ch.to_string();
            if ch.is_uppercase() {
                grammar.nonterminal(&name).unwrap().into()
            } else {
                grammar.terminal(&name).unwrap().into()
            }
        })
        .collect()
}

fn phrase_structure(rules: &[(&str, &str)]) -> PhraseStructureGrammar {
    let mut grammar = PhraseStructureGrammar::new();
    let start = grammar.nonterminal("S").unwrap();
    grammar.set_start(start);
    for &(lhs, rhs) in rules {
        let lhs = syms(&mut grammar, lhs);
        let rhs = syms(&mut grammar, rhs);
        grammar.add_rule(&lhs, &rhs).unwrap();
    }
    grammar
}

#[test_case(&[("S", "aF"), ("S", "bS"), ("F", "bF"), ("F", "cD"), ("F", "a"), ("D", "cS"), ("D", "a")], ChomskyType::Regular ; "right linear")]
#[test_case(&[("S", "Sa"), ("S", "b")], ChomskyType::Regular ; "left linear")]
#[test_case(&[("S", "A"), ("A", "")], ChomskyType::Regular ; "units and empty")]
#[test_case(&[("S", "aSb"), ("S", "")], ChomskyType::ContextFree ; "balanced")]
#[test_case(&[("S", "aA"), ("A", "Sb"), ("A", "b")], ChomskyType::ContextFree ; "mixed linearity")]
#[test_case(&[("S", "abc"), ("S", "aSBc"), ("cB", "Bc"), ("bB", "bb")], ChomskyType::ContextSensitive ; "non contracting")]
#[test_case(&[("S", ""), ("S", "aA"), ("aA", "ab")], ChomskyType::ContextSensitive ; "start erasure")]
#[test_case(&[("S", ""), ("S", "aS"), ("aS", "Sa")], ChomskyType::Unrestricted ; "start erasure with start on rhs")]
#[test_case(&[("S", "aAb"), ("aAb", "c")], ChomskyType::Unrestricted ; "contracting")]
fn test_chomsky_type(rules: &[(&str, &str)], expected: ChomskyType) {
    assert_eq!(phrase_structure(rules).chomsky_type(), expected);
}

#[test]
fn test_ordering_and_display() {
    assert!(ChomskyType::Unrestricted < ChomskyType::ContextSensitive);
    assert!(ChomskyType::ContextFree < ChomskyType::Regular);
    assert_eq!(ChomskyType::Regular.level(), 3);
    assert_eq!(ChomskyType::ContextSensitive.to_string(), "Type-1 (Context-sensitive)");
}

#[test]
fn test_lhs_needs_nonterminal() {
    let mut grammar = PhraseStructureGrammar::new();
    let a: Symbol = grammar.terminal("a").unwrap().into();
    let b: Symbol = grammar.terminal("b").unwrap().into();
    assert_eq!(
        grammar.add_rule(&[a, b], &[b]),
        Err(ClassifyError::LhsWithoutNonTerminal {
            lhs: "a b".to_string()
        })
    );
    assert_eq!(grammar.num_rules(), 0);
}

#[test]
fn test_to_context_free() {
    let grammar = phrase_structure(&[("S", "aS"), ("S", "")]);
    assert!(grammar.is_context_free());
    let context_free = grammar.to_context_free().unwrap();
    assert_eq!(context_free.validate(), Ok(()));
    assert_eq!(context_free.stringify_to_bnf(), "S -> ε | aS\n");

    let grammar = phrase_structure(&[("S", "aA"), ("aA", "ab")]);
    assert!(!grammar.is_context_free());
    assert!(grammar.to_context_free().is_none());
}

#[test]
fn test_linearity_of_grammar() {
    let mut grammar = Grammar::new();
    let [s, a] = grammar.nonterminal_syms(["S", "A"]).unwrap();
    let x: Symbol = grammar.terminal("x").unwrap().into();
    grammar.rule(s).rhs([x, a.into()]).rule(a).rhs([a.into(), x]);
    grammar.set_start(s);
    assert!(!grammar.is_right_linear());
    assert!(!grammar.is_left_linear());
    assert_eq!(grammar.chomsky_type(), ChomskyType::ContextFree);
}
