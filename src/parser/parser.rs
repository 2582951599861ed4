//! Parser implementation for building the expression tree.
//!
//! This module contains the main Parser struct and the parse entry point.
//! The parser is a recursive descent parser with a single token of
//! look-ahead, pulled lazily from the lexer.
//!
//! It maintains:
//! - The lexer that tokens are drawn from, one at a time
//! - The look-ahead token that drives every branch decision

use log::debug;

use crate::{
    ast::ast::Node,
    errors::errors::Error,
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    session::session::Session,
};

use super::expr::parse_expression;

/// The main parser structure that maintains parsing state.
///
/// This struct owns the lexer and a single look-ahead token. Branch
/// decisions peek at the look-ahead; `accept` consumes it and refills
/// it from the lexer.
pub struct Parser {
    /// The lexer the token stream is drawn from
    lexer: Lexer,
    /// The look-ahead token; None once the input is exhausted
    lookahead: Option<Token>,
}

impl Parser {
    /// Creates a new Parser over an input line.
    ///
    /// # Arguments
    ///
    /// * `input` - The raw input line; the lexer strips its whitespace
    ///
    /// # Returns
    ///
    /// A Parser with the look-ahead filled, or a lexical error if the
    /// input starts with an unrecognizable character.
    pub fn new(input: &str) -> Result<Self, Error> {
        let mut lexer = Lexer::new(input);
        let lookahead = lexer.next_token()?;

        Ok(Parser { lexer, lookahead })
    }

    /// Returns true if the look-ahead token has the given kind.
    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.lookahead
            .as_ref()
            .is_some_and(|token| token.kind == kind)
    }

    /// Consumes the look-ahead token, which must have the expected kind,
    /// and refills the look-ahead from the lexer.
    ///
    /// # Arguments
    ///
    /// * `expected` - The TokenKind the look-ahead must have
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the look-ahead matches, otherwise a syntax
    /// error naming the expected kind and the offset where the mismatch
    /// happened.
    pub fn accept(&mut self, expected: TokenKind) -> Result<Token, Error> {
        let token = match self.lookahead.take() {
            Some(token) => token,
            None => {
                return Err(Error::UnexpectedEnd {
                    expected,
                    position: self.position(),
                })
            }
        };

        if token.kind != expected {
            return Err(Error::UnexpectedToken {
                expected,
                found: token.kind,
                position: self.position(),
            });
        }

        self.lookahead = self.lexer.next_token()?;
        Ok(token)
    }

    /// Returns the lexer cursor, which sits just past the look-ahead
    /// token. Error offsets reported by the parser use this value.
    pub fn position(&self) -> usize {
        self.lexer.cursor()
    }
}

/// Parses one input line into an expression tree.
///
/// A line is either a command or an expression. An expression is eagerly
/// evaluated as it is parsed and the result is wrapped as an assignment
/// to `ans`, so evaluating the returned root commits the value to the
/// session. Tokens left over after a complete command or expression are
/// ignored.
///
/// # Arguments
///
/// * `input` - The raw input line
/// * `session` - The session that variables and `ans` resolve against
///
/// # Returns
///
/// The root node, or the first error the pipeline ran into. Nothing is
/// written to the session on the error path before the tree evaluates.
pub fn parse(input: &str, session: &mut Session) -> Result<Node, Error> {
    let mut parser = Parser::new(input)?;

    if parser.peek_is(TokenKind::Command) {
        let token = parser.accept(TokenKind::Command)?;
        return Node::command(&token.value);
    }

    let expression = parse_expression(&mut parser, session)?;
    debug!("expression tree: {}", expression);

    let value = expression.evaluate(session)?;
    Ok(Node::assignment("ans", value))
}
