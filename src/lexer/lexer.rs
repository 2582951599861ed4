use lazy_static::lazy_static;
use regex::Regex;

use crate::{errors::errors::Error, MK_PATTERN};

use super::tokens::{Token, TokenKind};

pub struct RegexPattern {
    kind: TokenKind,
    regex: Regex,
}

lazy_static! {
    // Declaration order is match priority: the first pattern to match at the
    // cursor wins, so keyword rules sit above the catch-all Variable rule.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        MK_PATTERN!(TokenKind::Command, "^(rad|deg|grad|reg|sci|eng|clear|cls|exit)"),
        MK_PATTERN!(TokenKind::Number, "^\\d*\\.?\\d+"),
        MK_PATTERN!(TokenKind::Plus, "^\\+"),
        MK_PATTERN!(TokenKind::Minus, "^-"),
        MK_PATTERN!(TokenKind::Exponent, "^\\^"),
        MK_PATTERN!(TokenKind::PrefixOperator, "^(~|sqrt|sin|cos|tan)"),
        MK_PATTERN!(TokenKind::InfixOperator, "^([&%E|*/]|<<|>>)"),
        MK_PATTERN!(TokenKind::PostfixOperator, "^!"),
        MK_PATTERN!(TokenKind::OpenParen, "^\\("),
        MK_PATTERN!(TokenKind::CloseParen, "^\\)"),
        MK_PATTERN!(TokenKind::Constant, "^(e|pi|ans)"),
        MK_PATTERN!(TokenKind::Var, "^(var)"),
        MK_PATTERN!(TokenKind::Variable, "^[a-z_]+"),
        MK_PATTERN!(TokenKind::Equals, "^="),
    ];
}

/// Drops every whitespace character. Token offsets refer to the result.
pub fn strip_whitespace(source: &str) -> String {
    source.chars().filter(|c| !c.is_whitespace()).collect()
}

pub struct Lexer {
    input: String,
    cursor: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            input: strip_whitespace(source),
            cursor: 0,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn has_more_tokens(&self) -> bool {
        self.cursor < self.input.len()
    }

    pub fn next_token(&mut self) -> Result<Option<Token>, Error> {
        let remaining = &self.input[self.cursor..];

        let character = match remaining.chars().next() {
            Some(character) => character,
            None => return Ok(None),
        };

        for pattern in PATTERNS.iter() {
            if let Some(matched) = pattern.regex.find(remaining) {
                let value = matched.as_str().to_string();
                self.cursor += value.len();
                return Ok(Some(Token {
                    kind: pattern.kind,
                    value,
                }));
            }
        }

        Err(Error::Lexical {
            character,
            position: self.cursor,
        })
    }
}
