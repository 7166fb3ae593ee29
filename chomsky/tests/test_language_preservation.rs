use chomsky::generate::BoundedLanguage;
use chomsky::normalize::GrammarNormalizeExt;
use test_case::test_case;

mod support;

const VARIANT_6: &str = r#"
    S -> A
    A -> aX | bX
    X -> BX | ε | b
    B -> AD
    D -> aD
    C -> Ca
"#;

const ARITHMETIC: &str = r#"
    E -> E + T | T
    T -> T * F | F
    F -> ( E ) | x
"#;

const NULLABLE_START: &str = r#"
    S -> AB | aSb
    A -> a | ε
    B -> bB | ε
"#;

const UNIT_CYCLE: &str = r#"
    S -> A | s
    A -> B | a
    B -> S | b
"#;

const LONG_BODIES: &str = r#"
    S -> abcS | AAA
    A -> a | ε
"#;

#[test_case(VARIANT_6, 6 ; "variant 6")]
#[test_case(support::VARIANT_12, 6 ; "variant 12")]
#[test_case(ARITHMETIC, 5 ; "arithmetic")]
#[test_case(NULLABLE_START, 6 ; "nullable start")]
#[test_case(UNIT_CYCLE, 2 ; "unit cycle")]
#[test_case(LONG_BODIES, 7 ; "long bodies")]
fn test_every_stage_preserves_language(source: &str, max_len: usize) {
    support::init_logging();
    let grammar = support::load(source);
    let expected = BoundedLanguage::new(&grammar, max_len);
    let steps = grammar.to_cnf_with_steps().unwrap();
    for (stage, result) in &steps {
        let actual = BoundedLanguage::new(result, max_len);
        assert_eq!(result.validate(), Ok(()), "{}", stage);
        support::assert_same_language(&expected, &actual, result);
    }
    let (_, last) = steps.last().unwrap();
    assert!(last.is_cnf());
    assert_eq!(last, &grammar.to_cnf().unwrap());
}

#[test]
fn test_empty_string_is_kept_only_when_derivable() {
    let nullable = support::load(NULLABLE_START).to_cnf().unwrap();
    assert!(BoundedLanguage::new(&nullable, 0).contains(&[]));

    let arithmetic = support::load(ARITHMETIC).to_cnf().unwrap();
    assert!(BoundedLanguage::new(&arithmetic, 0).is_empty());
}

#[test]
fn test_epsilon_elimination_is_idempotent() {
    for source in [VARIANT_6, NULLABLE_START, LONG_BODIES] {
        let once = support::load(source).eliminate_epsilon().unwrap();
        let twice = once.eliminate_epsilon().unwrap();
        assert_eq!(once, twice);
    }
}

#[test]
fn test_empty_language() {
    let grammar = support::load("S -> aS | A\nA -> bA");
    let cnf = grammar.to_cnf().unwrap();
    assert!(BoundedLanguage::new(&cnf, 5).is_empty());
    assert!(cnf.is_cnf());
    assert_eq!(cnf.name_of(cnf.start().unwrap()), "S");
}
