//! Recognizes the rule notation with an Earley parser and evaluates the parse
//! forest into rules and directives.

use tiny_earley::{forest, grammar, Recognizer, Symbol};

use crate::lexer::{self, Kind, Lexeme};
use crate::LoadError;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Token {
    pub(crate) text: String,
    pub(crate) quoted: bool,
    pub(crate) col: u32,
}

/// A sequence of tokens on one line, either a body or a left-hand side.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Alternative {
    pub(crate) tokens: Vec<Token>,
    pub(crate) line: u32,
    pub(crate) col: u32,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct RawRule {
    pub(crate) lhs: Alternative,
    pub(crate) alternatives: Vec<Alternative>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Named {
    pub(crate) name: String,
    pub(crate) line: u32,
    pub(crate) col: u32,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct Document {
    pub(crate) rules: Vec<RawRule>,
    pub(crate) start: Option<Named>,
    pub(crate) nonterminals: Vec<Named>,
    /// `None` unless `%terminals` appears.
    pub(crate) terminals: Option<Vec<Named>>,
}

#[derive(Clone, Debug)]
enum Item {
    Rule(RawRule),
    Directive(Named, Vec<Named>),
}

#[derive(Clone, Debug)]
enum Value {
    Token(Token, u32),
    Name(Named),
    Alternative(Alternative),
    Alternatives(Vec<Alternative>),
    Rule(RawRule),
    Directive(Named, Vec<Named>),
    Items(Vec<Item>),
    None,
}

impl Value {
    fn item(self) -> Option<Item> {
        match self {
            Value::Rule(rule) => Some(Item::Rule(rule)),
            Value::Directive(name, args) => Some(Item::Directive(name, args)),
            _ => None,
        }
    }
}

struct Evaluator {
    symbols: [Symbol; 16],
    lexemes: Vec<Lexeme>,
}

impl forest::Eval for Evaluator {
    type Elem = Value;

    fn leaf(&self, terminal: Symbol, values: u32) -> Self::Elem {
        #[allow(unused_variables)]
        let [start, items, item, rule, lhs, alts, alt, sym, directive, word, quoted, arrow, bar, newline, percent, eof] =
            self.symbols;
        let lexeme = &self.lexemes[values as usize];
        match &lexeme.kind {
            Kind::Word(text) | Kind::Quoted(text) if terminal == word || terminal == quoted => {
                let token = Token {
                    text: text.clone(),
                    quoted: terminal == quoted,
                    col: lexeme.col,
                };
                Value::Token(token, lexeme.line)
            }
            Kind::Percent(name) if terminal == percent => Value::Name(Named {
                name: name.clone(),
                line: lexeme.line,
                col: lexeme.col,
            }),
            _ => Value::None,
        }
    }

    fn product(&self, action_num: u32, args: Vec<Self::Elem>) -> Self::Elem {
        let mut args = args.into_iter();
        let mut arg = move || args.next().unwrap_or(Value::None);
        match (action_num, arg(), arg(), arg()) {
            // start ::= items eof;
            (2, Value::Items(items), _, _) => Value::Items(items),
            // start ::= eof;
            (3, ..) => Value::Items(vec![]),
            // items ::= items item;
            (4, Value::Items(mut items), item, _) => {
                items.extend(item.item());
                Value::Items(items)
            }
            // items ::= item;
            (5, item, _, _) => Value::Items(item.item().into_iter().collect()),
            // item ::= newline;
            (6, ..) => Value::None,
            // item ::= directive newline;
            (7, directive, _, _) => directive,
            // item ::= rule;
            (8, rule, _, _) => rule,
            // rule ::= lhs arrow alts newline;
            (9, Value::Alternative(lhs), _, Value::Alternatives(alternatives)) => {
                Value::Rule(RawRule { lhs, alternatives })
            }
            // rule ::= rule bar alts newline;
            (10, Value::Rule(mut rule), _, Value::Alternatives(alternatives)) => {
                rule.alternatives.extend(alternatives);
                Value::Rule(rule)
            }
            // lhs ::= lhs sym;  alt ::= alt sym;
            (11 | 15, Value::Alternative(mut alternative), Value::Token(token, _), _) => {
                alternative.tokens.push(token);
                Value::Alternative(alternative)
            }
            // lhs ::= sym;  alt ::= sym;
            (12 | 16, Value::Token(token, line), _, _) => Value::Alternative(Alternative {
                line,
                col: token.col,
                tokens: vec![token],
            }),
            // alts ::= alts bar alt;
            (13, Value::Alternatives(mut alternatives), _, Value::Alternative(alternative)) => {
                alternatives.push(alternative);
                Value::Alternatives(alternatives)
            }
            // alts ::= alt;
            (14, Value::Alternative(alternative), _, _) => {
                Value::Alternatives(vec![alternative])
            }
            // sym ::= word;  sym ::= quoted;
            (17 | 18, token, _, _) => token,
            // directive ::= directive word;
            (19, Value::Directive(name, mut args), Value::Token(token, line), _) => {
                args.push(Named {
                    name: token.text,
                    line,
                    col: token.col,
                });
                Value::Directive(name, args)
            }
            // directive ::= percent;
            (20, Value::Name(name), _, _) => Value::Directive(name, vec![]),
            (action_num, ..) => unreachable!("unexpected values for rule {}", action_num),
        }
    }
}

impl Document {
    pub(crate) fn parse(source: &str) -> Result<Self, LoadError> {
        use tiny_earley::Grammar;
        let notation = grammar! {
            S = [start, items, item, rule, lhs, alts, alt, sym, directive, word, quoted, arrow, bar, newline, percent, eof]
            R = {
                start ::= items eof; // 2
                start ::= eof; // 3
                items ::= items item; // 4
                items ::= item; // 5
                item ::= newline; // 6
                item ::= directive newline; // 7
                item ::= rule; // 8
                rule ::= lhs arrow alts newline; // 9
                rule ::= rule bar alts newline; // 10
                lhs ::= lhs sym; // 11
                lhs ::= sym; // 12
                alts ::= alts bar alt; // 13
                alts ::= alt; // 14
                alt ::= alt sym; // 15
                alt ::= sym; // 16
                sym ::= word; // 17
                sym ::= quoted; // 18
                directive ::= directive word; // 19
                directive ::= percent; // 20
            }
        };
        let symbols = notation.symbols();
        #[allow(unused_variables)]
        let [start, items, item, rule, lhs, alts, alt, sym, directive, word, quoted, arrow, bar, newline, percent, eof] =
            symbols;
        let lexemes = lexer::tokenize(source)?;
        let mut recognizer = Recognizer::new(&notation);
        for (i, lexeme) in lexemes.iter().enumerate() {
            let terminal = match lexeme.kind {
                Kind::Word(_) => word,
                Kind::Quoted(_) => quoted,
                Kind::Percent(_) => percent,
                Kind::Arrow => arrow,
                Kind::Bar => bar,
                Kind::Newline => newline,
                Kind::Eof => eof,
            };
            recognizer.scan(terminal, i as u32);
            if !recognizer.end_earleme() {
                return Err(unexpected(&lexemes, i));
            }
        }
        let finished_node = recognizer
            .finished_node
            .ok_or_else(|| LoadError::new("incomplete grammar", 1, 1))?;
        let result = recognizer
            .forest
            .evaluator(Evaluator { symbols, lexemes })
            .evaluate(finished_node);
        match result {
            Value::Items(items) => Document::assemble(items),
            _ => Err(LoadError::new("incomplete grammar", 1, 1)),
        }
    }

    fn assemble(items: Vec<Item>) -> Result<Self, LoadError> {
        let mut document = Document::default();
        for item in items {
            match item {
                Item::Rule(rule) => document.rules.push(rule),
                Item::Directive(name, args) => document.directive(name, args)?,
            }
        }
        Ok(document)
    }

    fn directive(&mut self, name: Named, args: Vec<Named>) -> Result<(), LoadError> {
        match &name.name[..] {
            "%start" => {
                if self.start.is_some() {
                    return Err(LoadError::new(
                        "start symbol declared twice",
                        name.line,
                        name.col,
                    ));
                }
                match <[Named; 1]>::try_from(args) {
                    Ok([start]) => self.start = Some(start),
                    Err(_) => {
                        return Err(LoadError::new(
                            "`%start` takes exactly one name",
                            name.line,
                            name.col,
                        ))
                    }
                }
            }
            "%nonterminals" => self.nonterminals.extend(args),
            "%terminals" => self.terminals.get_or_insert_with(Vec::new).extend(args),
            other => {
                return Err(LoadError::new(
                    format!("unknown directive `{}`", other),
                    name.line,
                    name.col,
                ))
            }
        }
        Ok(())
    }
}

/// Explains why the lexeme at `i` cannot continue the grammar.
fn unexpected(lexemes: &[Lexeme], i: usize) -> LoadError {
    let lexeme = &lexemes[i];
    let after_separator = i > 0 && matches!(lexemes[i - 1].kind, Kind::Arrow | Kind::Bar);
    let reason = match lexeme.kind {
        Kind::Bar | Kind::Newline if after_separator => {
            "empty alternative, write `ε` for the empty string".to_string()
        }
        Kind::Bar if i == 0 || lexemes[i - 1].kind == Kind::Newline => {
            "alternative without a rule".to_string()
        }
        Kind::Arrow if i == 0 || lexemes[i - 1].kind == Kind::Newline => {
            "missing left-hand side".to_string()
        }
        Kind::Newline => "expected `->`".to_string(),
        _ => format!("unexpected {}", lexeme.describe()),
    };
    LoadError::new(reason, lexeme.line, lexeme.col)
}
