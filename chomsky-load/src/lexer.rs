//! Splits the source into lexemes. Every line ends with a `Newline` lexeme,
//! and the source with `Eof`.

use crate::LoadError;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Kind {
    Word(String),
    Quoted(String),
    /// A directive name such as `%start`.
    Percent(String),
    Arrow,
    Bar,
    Newline,
    Eof,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Lexeme {
    pub(crate) kind: Kind,
    pub(crate) line: u32,
    pub(crate) col: u32,
}

impl Lexeme {
    /// Describes the lexeme in an error message.
    pub(crate) fn describe(&self) -> String {
        match &self.kind {
            Kind::Word(word) => format!("`{}`", word),
            Kind::Quoted(literal) => format!("literal \"{}\"", literal),
            Kind::Percent(name) => format!("directive `{}`", name),
            Kind::Arrow => "arrow".to_string(),
            Kind::Bar => "`|`".to_string(),
            Kind::Newline => "end of line".to_string(),
            Kind::Eof => "end of input".to_string(),
        }
    }
}

pub(crate) fn tokenize(source: &str) -> Result<Vec<Lexeme>, LoadError> {
    let mut lexemes = vec![];
    let mut num_lines = 0;
    for (index, text) in source.lines().enumerate() {
        let line = index as u32 + 1;
        if text.trim_start().starts_with('%') {
            directive(text, line, &mut lexemes);
        } else {
            rule_line(text, line, &mut lexemes)?;
        }
        lexemes.push(Lexeme {
            kind: Kind::Newline,
            line,
            col: text.chars().count() as u32 + 1,
        });
        num_lines = line;
    }
    lexemes.push(Lexeme {
        kind: Kind::Eof,
        line: num_lines + 1,
        col: 1,
    });
    Ok(lexemes)
}

fn rule_line(text: &str, line: u32, lexemes: &mut Vec<Lexeme>) -> Result<(), LoadError> {
    let chars: Vec<char> = text.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        let col = i as u32 + 1;
        let ch = chars[i];
        if ch.is_whitespace() {
            i += 1;
            continue;
        }
        if ch == '#' {
            break;
        }
        if let Some(len) = arrow_len(&chars[i..]) {
            lexemes.push(Lexeme {
                kind: Kind::Arrow,
                line,
                col,
            });
            i += len;
            continue;
        }
        let kind = match ch {
            '|' => {
                i += 1;
                Kind::Bar
            }
            '"' => {
                let end = chars[i + 1..]
                    .iter()
                    .position(|&c| c == '"')
                    .map(|offset| i + 1 + offset)
                    .ok_or_else(|| LoadError::new("unterminated literal", line, col))?;
                let literal: String = chars[i + 1..end].iter().collect();
                if literal.is_empty() {
                    return Err(LoadError::new("empty literal", line, col));
                }
                i = end + 1;
                Kind::Quoted(literal)
            }
            _ => {
                let start = i;
                while i < chars.len() && !is_boundary(&chars[i..]) {
                    i += 1;
                }
                Kind::Word(chars[start..i].iter().collect())
            }
        };
        lexemes.push(Lexeme { kind, line, col });
    }
    Ok(())
}

/// A directive line is split on whitespace only, up to a comment.
fn directive(text: &str, line: u32, lexemes: &mut Vec<Lexeme>) {
    let mut words: Vec<(String, u32)> = vec![];
    let mut in_word = false;
    for (i, ch) in text.chars().enumerate() {
        if ch == '#' {
            break;
        }
        if ch.is_whitespace() {
            in_word = false;
        } else if in_word {
            if let Some((word, _)) = words.last_mut() {
                word.push(ch);
            }
        } else {
            in_word = true;
            words.push((ch.to_string(), i as u32 + 1));
        }
    }
    for (n, (word, col)) in words.into_iter().enumerate() {
        let kind = if n == 0 {
            Kind::Percent(word)
        } else {
            Kind::Word(word)
        };
        lexemes.push(Lexeme { kind, line, col });
    }
}

fn is_boundary(rest: &[char]) -> bool {
    match rest.first() {
        Some(&ch) => {
            ch.is_whitespace() || matches!(ch, '|' | '"' | '#') || arrow_len(rest).is_some()
        }
        None => true,
    }
}

fn arrow_len(rest: &[char]) -> Option<usize> {
    match rest {
        ['→', ..] => Some(1),
        ['-', '>', ..] => Some(2),
        [':', ':', '=', ..] => Some(3),
        _ => None,
    }
}
