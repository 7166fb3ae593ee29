use chomsky_grammar::{Grammar, GrammarError, Symbol, SymbolBitSet};
use test_case::test_case;

fn sample() -> Grammar {
    let mut grammar = Grammar::new();
    let [s, f, d] = grammar.nonterminal_syms(["S", "F", "D"]).unwrap();
    let [a, b, c] = grammar.terminal_syms(["a", "b", "c"]).unwrap().map(Symbol::from);
    grammar
        .rule(s)
        .rhs([a, f.into()])
        .rhs([b, s.into()])
        .rule(f)
        .rhs([b, f.into()])
        .rhs([c, d.into()])
        .rhs([a])
        .rule(d)
        .rhs([c, s.into()])
        .rhs([a]);
    grammar.set_start(s);
    grammar
}

#[test]
fn test_bodies_form_a_set() {
    let mut grammar = sample();
    let s = grammar.start().unwrap();
    let num_rules = grammar.num_rules();
    let [a, f] = [grammar.sym_source().get("a").unwrap(), grammar.sym_source().get("F").unwrap()];
    assert!(!grammar.add_rule(s, &[a, f]));
    assert_eq!(grammar.num_rules(), num_rules);
    assert!(grammar.has_rule(s, &[a, f]));
}

#[test]
fn test_epsilon_is_stripped() {
    let mut grammar = Grammar::new();
    let s = grammar.nonterminal("S").unwrap();
    grammar.set_start(s);
    assert!(grammar.add_rule(s, &[Symbol::Epsilon]));
    assert!(!grammar.add_rule(s, &[]));
    assert!(grammar.has_rule(s, &[]));
    assert_eq!(grammar.stringify_to_bnf(), "S -> ε\n");
}

#[test]
fn test_stringify_to_bnf() {
    let grammar = sample();
    assert_eq!(
        grammar.stringify_to_bnf(),
        "S -> aF | bS\nF -> a | bF | cD\nD -> a | cS\n"
    );
    assert_eq!(grammar.to_string(), grammar.stringify_to_bnf());
}

#[test]
fn test_stringify_long_names() {
    let mut grammar = Grammar::new();
    let expr = grammar.nonterminal("Expr").unwrap();
    let plus: Symbol = grammar.terminal("+").unwrap().into();
    grammar.rule(expr).rhs([expr.into(), plus, expr.into()]);
    grammar.set_start(expr);
    assert_eq!(grammar.stringify_to_bnf(), "Expr -> Expr + Expr\n");
}

#[test]
fn test_validate() {
    assert_eq!(sample().validate(), Ok(()));
    assert_eq!(Grammar::new().validate(), Err(GrammarError::MissingStart));

    let mut grammar = sample();
    let unknown = grammar.sym_source_mut().nonterminal("X").unwrap();
    let s = grammar.start().unwrap();
    grammar.rule(s).rhs([unknown.into()]);
    assert_eq!(
        grammar.validate(),
        Err(GrammarError::UnknownSymbol {
            lhs: "S".to_string(),
            sym: "X".to_string(),
        })
    );

    let mut grammar = sample();
    let z = grammar.sym_source_mut().nonterminal("Z").unwrap();
    grammar.set_start(z);
    assert!(matches!(
        grammar.validate(),
        Err(GrammarError::StartNotInVocabulary { .. })
    ));
}

#[test]
fn test_nullable_and_productive() {
    let mut grammar = Grammar::new();
    let [s, a, b, u] = grammar.nonterminal_syms(["S", "A", "B", "U"]).unwrap();
    let x: Symbol = grammar.terminal("x").unwrap().into();
    grammar
        .rule(s)
        .rhs([a.into(), b.into()])
        .rhs([u.into()])
        .rule(a)
        .rhs([])
        .rhs([x])
        .rule(b)
        .rhs([a.into(), a.into()])
        .rule(u)
        .rhs([u.into(), x]);
    grammar.set_start(s);

    let nulling = grammar.nulling_symbols();
    assert!(nulling[a]);
    assert!(!nulling[b]);

    let nullable = grammar.nullable_symbols();
    assert!(nullable[s] && nullable[a] && nullable[b]);
    assert!(!nullable[u]);
    assert!(!nullable[Symbol::Epsilon]);

    let productive = grammar.productive_symbols();
    assert!(productive[s] && productive[a] && productive[b]);
    assert!(!productive[u]);
    assert!(productive[x]);
}

#[test_case(&[0, 2] ; "sparse")]
#[test_case(&[] ; "empty")]
#[test_case(&[1, 2, 3] ; "dense")]
fn test_bit_set_iter(ids: &[usize]) {
    let mut grammar = Grammar::new();
    let syms: Vec<Symbol> = ["A", "B", "C", "D"]
        .iter()
        .map(|name| grammar.nonterminal(name).unwrap().into())
        .collect();
    let mut set = SymbolBitSet::from_elem(&grammar, false);
    for &id in ids {
        set.set(syms[id], true);
    }
    let collected: Vec<usize> = set.iter().map(|id| id.usize()).collect();
    assert_eq!(collected, ids);
}

#[test]
fn test_retain_and_remove() {
    let mut grammar = sample();
    let d = grammar.sym_source().get("D").unwrap().nonterminal().unwrap();
    grammar.remove_nonterminal(d);
    assert!(!grammar.has_nonterminal(d));
    assert_eq!(grammar.productions(d).count(), 0);
    grammar.retain(|rule| !rule.rhs.contains(&Symbol::NonTerminal(d)));
    assert_eq!(grammar.stringify_to_bnf(), "S -> aF | bS\nF -> a | bF\n");
    assert_eq!(grammar.validate(), Ok(()));
}
