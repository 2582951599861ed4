use thiserror::Error;

use crate::lexer::tokens::TokenKind;

/// All failures the pipeline can produce, from tokenizing through
/// evaluation. Every variant carries the data its message needs;
/// variants tied to a spot in the input also carry the cursor offset
/// into the whitespace-stripped line.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("unexpected character at index {position}: {character:?}")]
    Lexical { character: char, position: usize },
    #[error("unexpected end of input at index {position}, expected: {expected}")]
    UnexpectedEnd {
        expected: TokenKind,
        position: usize,
    },
    #[error("unexpected token at index {position}: {found}, expected: {expected}")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        position: usize,
    },
    #[error("expected a number at index {position}")]
    ExpectedNumber { position: usize },
    #[error("variable {name:?} is not defined")]
    UndefinedVariable { name: String },
    #[error("invalid operator: {token:?}")]
    InvalidOperator { token: String },
    #[error("factorial of negative number: {operand}")]
    NegativeFactorial { operand: i64 },
    #[error("factorial overflows: {operand}")]
    FactorialOverflow { operand: i64 },
}

impl Error {
    /// The user-facing category this error is reported under.
    pub fn name(&self) -> &'static str {
        match self {
            Error::Lexical { .. } => "LexicalError",
            Error::UnexpectedEnd { .. } => "SyntaxError",
            Error::UnexpectedToken { .. } => "SyntaxError",
            Error::ExpectedNumber { .. } => "SyntaxError",
            Error::UndefinedVariable { .. } => "UndefinedVariableError",
            Error::InvalidOperator { .. } => "InvalidOperatorError",
            Error::NegativeFactorial { .. } => "DomainError",
            Error::FactorialOverflow { .. } => "DomainError",
        }
    }

    /// Offset into the stripped input, for errors that point at one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::Lexical { position, .. }
            | Error::UnexpectedEnd { position, .. }
            | Error::UnexpectedToken { position, .. }
            | Error::ExpectedNumber { position } => Some(*position),
            _ => None,
        }
    }
}
