use chomsky_symbol::{NameSpace, Symbol, SymbolError, SymbolId, SymbolKind, SymbolSource};

#[test]
fn test_repr_option_optimization() {
    assert_eq!(::std::mem::size_of::<SymbolId>(), 4);
    assert_eq!(::std::mem::size_of::<Option<SymbolId>>(), 4);
}

#[test]
fn test_interning_is_stable() {
    let mut source = SymbolSource::new();
    let s = source.nonterminal("S").unwrap();
    let a = source.terminal("a").unwrap();
    assert_eq!(source.nonterminal("S").unwrap(), s);
    assert_eq!(source.terminal("a").unwrap(), a);
    assert_eq!(source.num_syms(), 2);
    assert_eq!(source.name_of(s.into()), "S");
    assert_eq!(source.get("a"), Some(Symbol::Terminal(a)));
}

#[test]
fn test_kinds_are_disjoint() {
    let mut source = SymbolSource::new();
    source.terminal("a").unwrap();
    assert_eq!(
        source.nonterminal("a"),
        Err(SymbolError::KindMismatch {
            name: "a".to_string(),
            bound: SymbolKind::Terminal,
        })
    );
    assert_eq!(source.terminal("ε"), Err(SymbolError::ReservedName));
}

#[test]
fn test_fresh_names_skip_existing() {
    let mut source = SymbolSource::new();
    source.nonterminal("0").unwrap();
    source.terminal("1").unwrap();
    let fresh = source.fresh_nonterminal().unwrap();
    assert_eq!(source.name_of(fresh.into()), "2");
    let fresh = source.fresh_nonterminal().unwrap();
    assert_eq!(source.name_of(fresh.into()), "3");
}

#[test]
fn test_fresh_names_exhausted() {
    let mut source = SymbolSource::with_name_space(NameSpace {
        alphabet: "X",
        suffixes: 1,
    });
    source.nonterminal("X").unwrap();
    let x0 = source.fresh_nonterminal().unwrap();
    assert_eq!(source.name_of(x0.into()), "X0");
    assert_eq!(
        source.fresh_nonterminal(),
        Err(SymbolError::NamesExhausted { capacity: 2 })
    );
}

#[test]
fn test_canonical_order() {
    let mut source = SymbolSource::new();
    let s = source.nonterminal("S").unwrap();
    let a = source.terminal("a").unwrap();
    let mut syms = vec![Symbol::Epsilon, s.into(), a.into()];
    syms.sort();
    assert_eq!(syms, [a.into(), s.into(), Symbol::Epsilon]);
}
