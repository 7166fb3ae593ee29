//! Turns tokens into symbols.

use std::collections::BTreeSet;

use chomsky_classify::PhraseStructureGrammar;
use chomsky_grammar::{Grammar, NonTerminal, Symbol, SymbolError, Terminal, EPSILON};

use crate::parse::{Alternative, Document, RawRule, Token};
use crate::LoadError;

/// Anything that names symbols.
pub(crate) trait Vocabulary {
    fn terminal(&mut self, name: &str) -> Result<Terminal, SymbolError>;
    fn nonterminal(&mut self, name: &str) -> Result<NonTerminal, SymbolError>;
}

impl Vocabulary for Grammar {
    fn terminal(&mut self, name: &str) -> Result<Terminal, SymbolError> {
        Grammar::terminal(self, name)
    }

    fn nonterminal(&mut self, name: &str) -> Result<NonTerminal, SymbolError> {
        Grammar::nonterminal(self, name)
    }
}

impl Vocabulary for PhraseStructureGrammar {
    fn terminal(&mut self, name: &str) -> Result<Terminal, SymbolError> {
        PhraseStructureGrammar::terminal(self, name)
    }

    fn nonterminal(&mut self, name: &str) -> Result<NonTerminal, SymbolError> {
        PhraseStructureGrammar::nonterminal(self, name)
    }
}

pub(crate) struct Resolver<'a> {
    document: &'a Document,
    /// Whether single-token left-hand sides name nonterminals.
    lhs_names: bool,
    nonterminal_names: BTreeSet<&'a str>,
    terminal_names: Option<BTreeSet<&'a str>>,
}

impl<'a> Resolver<'a> {
    pub(crate) fn new(document: &'a Document, lhs_names: bool) -> Self {
        let mut nonterminal_names: BTreeSet<&str> = document
            .nonterminals
            .iter()
            .map(|named| &named.name[..])
            .collect();
        if lhs_names {
            nonterminal_names.extend(document.rules.iter().filter_map(single_name));
        }
        let terminal_names = document
            .terminals
            .as_ref()
            .map(|terminals| terminals.iter().map(|named| &named.name[..]).collect());
        Resolver {
            document,
            lhs_names,
            nonterminal_names,
            terminal_names,
        }
    }

    /// Interns declared names first, so that symbol IDs follow the declarations.
    pub(crate) fn declare(&self, vocabulary: &mut impl Vocabulary) -> Result<(), LoadError> {
        for named in &self.document.nonterminals {
            vocabulary
                .nonterminal(&named.name)
                .map_err(|error| LoadError::new(error.to_string(), named.line, named.col))?;
        }
        if self.lhs_names {
            for rule in &self.document.rules {
                self.lhs_nonterminal(vocabulary, rule)?;
            }
        }
        for named in self.document.terminals.iter().flatten() {
            vocabulary
                .terminal(&named.name)
                .map_err(|error| LoadError::new(error.to_string(), named.line, named.col))?;
        }
        Ok(())
    }

    pub(crate) fn lhs_nonterminal(
        &self,
        vocabulary: &mut impl Vocabulary,
        rule: &RawRule,
    ) -> Result<NonTerminal, LoadError> {
        match &rule.lhs.tokens[..] {
            [token] if !token.quoted && token.text != EPSILON => vocabulary
                .nonterminal(&token.text)
                .map_err(|error| LoadError::new(error.to_string(), rule.lhs.line, token.col)),
            _ => Err(LoadError::at(
                &rule.lhs,
                "left-hand side must be a single nonterminal",
            )),
        }
    }

    /// Resolves an alternative. A single unknown name is split into characters,
    /// several tokens are taken whole.
    pub(crate) fn body(
        &self,
        vocabulary: &mut impl Vocabulary,
        alternative: &Alternative,
    ) -> Result<Vec<Symbol>, LoadError> {
        let whole = alternative.tokens.len() > 1;
        let mut rhs = vec![];
        for token in &alternative.tokens {
            let at_token = |reason: String| LoadError::new(reason, alternative.line, token.col);
            if token.quoted {
                let terminal = vocabulary
                    .terminal(&token.text)
                    .map_err(|error| at_token(error.to_string()))?;
                rhs.push(terminal.into());
            } else if token.text == EPSILON {
                continue;
            } else if whole || self.is_known(&token.text) || token.text.chars().count() == 1 {
                rhs.push(self.symbol(vocabulary, &token.text).map_err(at_token)?);
            } else {
                for ch in token.text.chars().filter(|&ch| ch.to_string() != EPSILON) {
                    rhs.push(self.symbol(vocabulary, &ch.to_string()).map_err(at_token)?);
                }
            }
        }
        Ok(rhs)
    }

    /// Returns the start symbol: the one given by `%start`, or else the
    /// left-hand side of the first rule.
    pub(crate) fn start(
        &self,
        vocabulary: &mut impl Vocabulary,
        first_lhs: Option<NonTerminal>,
    ) -> Result<NonTerminal, LoadError> {
        match (&self.document.start, first_lhs) {
            (Some(named), _) => vocabulary
                .nonterminal(&named.name)
                .map_err(|error| LoadError::new(error.to_string(), named.line, named.col)),
            (None, Some(first_lhs)) => Ok(first_lhs),
            (None, None) => Err(LoadError::new(
                "no start symbol, add a rule or `%start`",
                1,
                1,
            )),
        }
    }

    fn is_known(&self, name: &str) -> bool {
        self.nonterminal_names.contains(name)
            || self
                .terminal_names
                .as_ref()
                .map_or(false, |terminals| terminals.contains(name))
    }

    fn symbol(&self, vocabulary: &mut impl Vocabulary, name: &str) -> Result<Symbol, String> {
        let declared_terminal = self
            .terminal_names
            .as_ref()
            .map(|terminals| terminals.contains(name));
        let is_nonterminal = if self.nonterminal_names.contains(name) {
            true
        } else if declared_terminal == Some(true) {
            false
        } else {
            name.chars().next().map_or(false, char::is_uppercase)
        };
        if is_nonterminal {
            vocabulary
                .nonterminal(name)
                .map(Symbol::from)
                .map_err(|error| error.to_string())
        } else if declared_terminal == Some(false) {
            Err(format!("undeclared terminal `{}`", name))
        } else {
            vocabulary
                .terminal(name)
                .map(Symbol::from)
                .map_err(|error| error.to_string())
        }
    }
}

fn single_name(rule: &RawRule) -> Option<&str> {
    match &rule.lhs.tokens[..] {
        [Token {
            text,
            quoted: false,
            ..
        }] => Some(&text[..]),
        _ => None,
    }
}
