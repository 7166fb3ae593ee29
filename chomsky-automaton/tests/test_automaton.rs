use chomsky_automaton::{Automaton, AutomatonBuilder, AutomatonError, StateId, StateSet};
use chomsky_symbol::{SymbolError, SymbolSource};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use test_case::test_case;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// On `a`, q0 and q3 both go to {q1,q3}.
fn sample() -> Automaton {
    let mut builder = AutomatonBuilder::new();
    let [q0, q1, q2, q3] = builder.states(["q0", "q1", "q2", "q3"]);
    let [a, b] = builder.letters(["a", "b"]).unwrap();
    builder
        .transition(q0, a, q1)
        .transition(q0, a, q3)
        .transition(q0, b, q0)
        .transition(q1, a, q2)
        .transition(q2, b, q2)
        .transition(q3, a, q1)
        .transition(q3, a, q3)
        .start(q0)
        .accepting(q2);
    builder.build().unwrap()
}

#[test]
fn test_display() {
    let expected = "states: q0, q1, q2, q3\n\
                    alphabet: a, b\n\
                    q0 --a--> {q1,q3}\n\
                    q0 --b--> {q0}\n\
                    q1 --a--> {q2}\n\
                    q2 --b--> {q2}\n\
                    q3 --a--> {q1,q3}\n\
                    start: q0\n\
                    final: {q2}\n";
    assert_eq!(sample().to_string(), expected);
}

#[test_case("aa", true ; "two letters")]
#[test_case("baab", true ; "leading and trailing b")]
#[test_case("aaaa", true ; "long run")]
#[test_case("a", false ; "single letter")]
#[test_case("aaba", false ; "dead after b")]
#[test_case("", false ; "empty word")]
#[test_case("ac", false ; "outside alphabet")]
fn test_accepts(input: &str, accepted: bool) {
    init_logging();
    assert_eq!(sample().accepts_str(input), accepted);
}

#[test]
fn test_run_tracks_every_branch() {
    let nfa = sample();
    let a = nfa.letter("a").unwrap();
    let reached = nfa.run(&[a, a]);
    let names: Vec<&str> = reached.iter().map(|state| nfa.state_name(state)).collect();
    assert_eq!(names, ["q1", "q2", "q3"]);
}

#[test]
fn test_determinism_checks() {
    let nfa = sample();
    assert!(!nfa.is_deterministic());
    assert!(!nfa.is_complete());

    let dfa = nfa.determinize();
    assert!(dfa.is_deterministic());
    assert!(!dfa.is_complete());
}

#[test]
fn test_subset_construction() {
    init_logging();
    let nfa = sample();
    let dfa = nfa.determinize();
    let names: Vec<&str> = dfa.states().map(|state| dfa.state_name(state)).collect();
    assert_eq!(names, ["{q0}", "{q1,q3}", "{q1,q2,q3}", "{q2}"]);

    let a = nfa.letter("a").unwrap();
    let after_aa = dfa.reach(&[a, a]).unwrap();
    assert_eq!(dfa.state_name(after_aa), "{q1,q2,q3}");
    assert!(dfa.is_accepting(after_aa));

    let q = |name| nfa.state_by_name(name).unwrap();
    let subset: StateSet = [q("q3"), q("q1"), q("q2")].into_iter().collect();
    assert_eq!(dfa.subset(after_aa), &subset);
    assert_eq!(dfa.state_of(&subset), Some(after_aa));

    let accepting: Vec<&str> = dfa
        .accepting()
        .iter()
        .map(|state| dfa.state_name(state))
        .collect();
    assert_eq!(accepting, ["{q1,q2,q3}", "{q2}"]);
}

/// Over the single letter `a`: q0 -> {q1,q3}, q1 -> {q2}, q3 -> {q1,q3}.
#[test]
fn test_determinized_double_letter() {
    let mut builder = AutomatonBuilder::new();
    let [q0, q1, q2, q3] = builder.states(["q0", "q1", "q2", "q3"]);
    let [a] = builder.letters(["a"]).unwrap();
    builder
        .transition(q0, a, q1)
        .transition(q0, a, q3)
        .transition(q1, a, q2)
        .transition(q3, a, q1)
        .transition(q3, a, q3)
        .start(q0)
        .accepting(q2);
    let nfa = builder.build().unwrap();
    assert!(nfa.accepts(&[a, a]));

    let dfa = nfa.determinize();
    let after_aa = dfa.reach(&[a, a]).unwrap();
    assert!(dfa.is_accepting(after_aa));
    assert_eq!(dfa.state_name(after_aa), "{q1,q2,q3}");
    assert!(!dfa.is_accepting(dfa.reach(&[a]).unwrap()));
}

#[test]
fn test_state_ids_are_dense() {
    let mut builder = AutomatonBuilder::new();
    let states = builder.states(["q0", "q1", "q2"]);
    assert_eq!(states, [StateId::from(0), StateId::from(1), StateId::from(2)]);
    assert_eq!(StateId::from(2).usize(), 2);
}

#[test]
fn test_missing_transition_rejects() {
    let dfa = sample().determinize();
    let b = dfa.letter("b").unwrap();
    let a = dfa.letter("a").unwrap();
    assert_eq!(dfa.reach(&[a, b]), None);
    assert!(!dfa.accepts(&[a, b]));
}

#[test]
fn test_determinized_language_is_preserved() {
    let nfa = sample();
    let dfa = nfa.determinize();
    let letters: Vec<_> = nfa.alphabet().collect();
    let mut rng = SmallRng::seed_from_u64(42);
    for _ in 0..500 {
        let len = rng.gen_range(0..10);
        let word: Vec<_> = (0..len)
            .map(|_| letters[rng.gen_range(0..letters.len())])
            .collect();
        let expected = nfa.accepts(&word[..]);
        assert_eq!(dfa.accepts(&word[..]), expected);
        assert_eq!(
            dfa.reach(&word[..]).map_or(false, |state| dfa.is_accepting(state)),
            expected
        );
    }
}

#[test]
fn test_missing_start() {
    let mut builder = AutomatonBuilder::new();
    builder.state("q0");
    assert_eq!(builder.build(), Err(AutomatonError::MissingStart));
}

#[test]
fn test_unknown_state() {
    let mut builder = AutomatonBuilder::new();
    let q0 = builder.state("q0");
    let stray = StateId::from(5);
    builder.start(q0).accepting(stray);
    assert_eq!(builder.build(), Err(AutomatonError::UnknownState { state: stray }));
}

#[test]
fn test_letter_outside_alphabet() {
    let mut sym_source = SymbolSource::new();
    let z = sym_source.terminal("z").unwrap();
    let mut builder = AutomatonBuilder::with_sym_source(sym_source);
    let q0 = builder.state("q0");
    builder.start(q0).transition(q0, z, q0);
    assert_eq!(
        builder.build(),
        Err(AutomatonError::UnknownLetter {
            letter: "z".to_string()
        })
    );
}

#[test]
fn test_letter_named_like_a_nonterminal() {
    let mut sym_source = SymbolSource::new();
    sym_source.nonterminal("A").unwrap();
    let mut builder = AutomatonBuilder::with_sym_source(sym_source);
    assert!(matches!(
        builder.letter("A"),
        Err(AutomatonError::Symbol(SymbolError::KindMismatch { .. }))
    ));
}

#[test]
fn test_states_are_interned() {
    let mut builder = AutomatonBuilder::new();
    let first = builder.state("q0");
    assert_eq!(builder.state("q0"), first);
    builder.start(first);
    let automaton = builder.build().unwrap();
    assert_eq!(automaton.num_states(), 1);
    assert_eq!(automaton.state_by_name("q0"), Some(first));
    assert!(automaton.is_complete());
}
