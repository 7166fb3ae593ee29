//! Loads grammars written in a line-oriented rule notation:
//!
//! ```text
//! # comment
//! %start S
//! S -> aF | bS
//! F -> bF | cD
//!    | a
//! D → "c" S | ε
//! ```
//!
//! Arrows are `->`, `→` or `::=`. A line starting with `|` continues the rule on
//! the line above. Directives `%start`, `%nonterminals` and `%terminals` declare
//! symbols anywhere in the source.

#![deny(unsafe_code)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]

mod error;
mod lexer;
mod parse;
mod resolve;

use log::debug;

use chomsky_classify::PhraseStructureGrammar;
use chomsky_grammar::{Grammar, Symbol};

pub use self::error::LoadError;

use self::parse::Document;
use self::resolve::Resolver;

/// Loading of context-free grammars.
pub trait GrammarLoadExt: Sized {
    /// Loads a grammar. Every left-hand side is a single nonterminal name.
    fn load(source: &str) -> Result<Self, LoadError>;
}

/// Loading of phrase-structure grammars.
pub trait PhraseStructureLoadExt: Sized {
    /// Loads a grammar whose left-hand sides are sequences of symbols. Names
    /// longer than one character must be declared with `%nonterminals` or
    /// `%terminals`, otherwise they are split into characters.
    fn load(source: &str) -> Result<Self, LoadError>;
}

impl GrammarLoadExt for Grammar {
    fn load(source: &str) -> Result<Self, LoadError> {
        let document = Document::parse(source)?;
        let mut grammar = Grammar::new();
        let resolver = Resolver::new(&document, true);
        resolver.declare(&mut grammar)?;
        let mut first_lhs = None;
        for rule in &document.rules {
            let lhs = resolver.lhs_nonterminal(&mut grammar, rule)?;
            first_lhs.get_or_insert(lhs);
            for alternative in &rule.alternatives {
                let rhs = resolver.body(&mut grammar, alternative)?;
                grammar.add_rule(lhs, &rhs[..]);
            }
        }
        let start = resolver.start(&mut grammar, first_lhs)?;
        grammar.set_start(start);
        debug!("loaded {} rules", grammar.num_rules());
        Ok(grammar)
    }
}

impl PhraseStructureLoadExt for PhraseStructureGrammar {
    fn load(source: &str) -> Result<Self, LoadError> {
        let document = Document::parse(source)?;
        let mut grammar = PhraseStructureGrammar::new();
        let resolver = Resolver::new(&document, false);
        resolver.declare(&mut grammar)?;
        let mut first_lhs = None;
        for (i, rule) in document.rules.iter().enumerate() {
            let lhs = resolver.body(&mut grammar, &rule.lhs)?;
            if let (0, &[Symbol::NonTerminal(nonterminal)]) = (i, &lhs[..]) {
                first_lhs = Some(nonterminal);
            }
            for alternative in &rule.alternatives {
                let rhs = resolver.body(&mut grammar, alternative)?;
                grammar
                    .add_rule(&lhs[..], &rhs[..])
                    .map_err(|error| LoadError::at(&rule.lhs, error.to_string()))?;
            }
        }
        let start = resolver.start(&mut grammar, first_lhs)?;
        grammar.set_start(start);
        Ok(grammar)
    }
}
