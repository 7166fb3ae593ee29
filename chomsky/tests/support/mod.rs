#![allow(dead_code)]

use chomsky::automaton::Automaton;
use chomsky::generate::BoundedLanguage;
use chomsky::load::GrammarLoadExt;
use chomsky::{Grammar, Terminal};

pub const VARIANT_12: &str = r#"
    S -> aF | bS
    F -> bF | cD | a
    D -> cS | a
"#;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn load(source: &str) -> Grammar {
    Grammar::load(source).unwrap()
}

/// Every word over `letters` of length at most `max_len`.
pub fn all_words(letters: &[Terminal], max_len: usize) -> Vec<Vec<Terminal>> {
    let mut result = vec![vec![]];
    let mut frontier: Vec<Vec<Terminal>> = vec![vec![]];
    for _ in 0..max_len {
        let next: Vec<Vec<Terminal>> = frontier
            .iter()
            .flat_map(|prefix| {
                letters.iter().map(move |&letter| {
                    let mut word = prefix.clone();
                    word.push(letter);
                    word
                })
            })
            .collect();
        result.extend(next.iter().cloned());
        frontier = next;
    }
    result
}

pub fn assert_same_language(left: &BoundedLanguage, right: &BoundedLanguage, grammar: &Grammar) {
    if left != right {
        eprintln!("Left:\n{:?}", left.to_strings(grammar));
        eprintln!("Right:\n{:?}", right.to_strings(grammar));
        panic!("Languages expected to be equal");
    }
}

/// Checks the automaton against the bounded language word by word.
pub fn assert_recognizes(automaton: &Automaton, language: &BoundedLanguage) {
    let letters: Vec<Terminal> = automaton.alphabet().collect();
    for word in all_words(&letters[..], language.max_len()) {
        assert_eq!(
            automaton.accepts(&word[..]),
            language.contains(&word[..]),
            "{:?}",
            word.iter()
                .map(|&letter| automaton.letter_name(letter))
                .collect::<String>()
        );
    }
}
