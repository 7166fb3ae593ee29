#![allow(dead_code)]

use chomsky_grammar::Grammar;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn assert_bnf(grammar: &Grammar, expected: &str) {
    let actual = grammar.stringify_to_bnf();
    if actual != expected {
        eprintln!("Left:\n{}", actual);
        eprintln!("Right:\n{}", expected);
        panic!("Grammars expected to be equal");
    }
    assert_eq!(grammar.validate(), Ok(()));
}
