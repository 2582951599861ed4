use crate::{
    ast::ast::Node, errors::errors::Error, lexer::tokens::TokenKind, session::session::Session,
};

use super::parser::Parser;

/// Expression := "var" Variable "=" Expression | Term { ("+" | "-") Term }
pub fn parse_expression(parser: &mut Parser, session: &mut Session) -> Result<Node, Error> {
    if parser.peek_is(TokenKind::Var) {
        return parse_variable_assignment(parser, session);
    }

    let mut expression = parse_term(parser, session)?;

    while parser.peek_is(TokenKind::Plus) || parser.peek_is(TokenKind::Minus) {
        let operator = if parser.peek_is(TokenKind::Plus) {
            parser.accept(TokenKind::Plus)?
        } else {
            parser.accept(TokenKind::Minus)?
        };

        let right = parse_term(parser, session)?;
        expression = Node::binary(&operator.value, expression, right)?;
    }

    Ok(expression)
}

/// "var" Variable "=" Expression
///
/// The right-hand side is evaluated as soon as it has been parsed and the
/// node stores the resulting value; the variable itself is only written
/// when the node evaluates.
pub fn parse_variable_assignment(parser: &mut Parser, session: &mut Session) -> Result<Node, Error> {
    parser.accept(TokenKind::Var)?;
    let name = parser.accept(TokenKind::Variable)?;
    parser.accept(TokenKind::Equals)?;

    let expression = parse_expression(parser, session)?;
    let value = expression.evaluate(session)?;

    Ok(Node::assignment(&name.value, value))
}

/// Term := Factor { InfixOperator Factor | PostfixOperator }
///
/// One loop handles both, so infix operators and the postfix factorial
/// interleave left to right: 2*3! groups as (2*3)!.
pub fn parse_term(parser: &mut Parser, session: &mut Session) -> Result<Node, Error> {
    let mut term = parse_factor(parser, session)?;

    loop {
        if parser.peek_is(TokenKind::InfixOperator) {
            let operator = parser.accept(TokenKind::InfixOperator)?;
            let right = parse_factor(parser, session)?;
            term = Node::binary(&operator.value, term, right)?;
        } else if parser.peek_is(TokenKind::PostfixOperator) {
            let operator = parser.accept(TokenKind::PostfixOperator)?;
            term = Node::unary(&operator.value, term)?;
        } else {
            break;
        }
    }

    Ok(term)
}

/// Factor := (PrefixOperator | "-") Factor | Base { "^" Exponent }
///
/// A prefixed factor never re-enters the exponent loop at its own level,
/// so -2^2 groups as -(2^2).
pub fn parse_factor(parser: &mut Parser, session: &mut Session) -> Result<Node, Error> {
    if parser.peek_is(TokenKind::PrefixOperator) {
        let operator = parser.accept(TokenKind::PrefixOperator)?;
        let operand = parse_factor(parser, session)?;
        return Node::unary(&operator.value, operand);
    }

    if parser.peek_is(TokenKind::Minus) {
        let operator = parser.accept(TokenKind::Minus)?;
        let operand = parse_factor(parser, session)?;
        return Node::unary(&operator.value, operand);
    }

    let mut base = parse_base(parser, session)?;

    // ^ chains iterate, so they group left to right: 2^3^2 is (2^3)^2.
    while parser.peek_is(TokenKind::Exponent) {
        let operator = parser.accept(TokenKind::Exponent)?;
        let exponent = parse_exponent(parser, session)?;
        base = Node::binary(&operator.value, base, exponent)?;
    }

    Ok(base)
}

/// Base := Exponent
pub fn parse_base(parser: &mut Parser, session: &mut Session) -> Result<Node, Error> {
    parse_exponent(parser, session)
}

/// Exponent := "(" Expression ")" | Number
pub fn parse_exponent(parser: &mut Parser, session: &mut Session) -> Result<Node, Error> {
    if parser.peek_is(TokenKind::OpenParen) {
        parser.accept(TokenKind::OpenParen)?;
        let expression = parse_expression(parser, session)?;
        parser.accept(TokenKind::CloseParen)?;
        return Ok(expression);
    }

    parse_number(parser, session)
}

/// Number := NUMBER | CONSTANT | VARIABLE
pub fn parse_number(parser: &mut Parser, session: &mut Session) -> Result<Node, Error> {
    if parser.peek_is(TokenKind::Number) {
        let token = parser.accept(TokenKind::Number)?;
        return Ok(Node::number(&token.value, session));
    }

    if parser.peek_is(TokenKind::Constant) {
        let token = parser.accept(TokenKind::Constant)?;
        return Ok(Node::number(&token.value, session));
    }

    if parser.peek_is(TokenKind::Variable) {
        let token = parser.accept(TokenKind::Variable)?;
        return Node::variable(&token.value, session);
    }

    Err(Error::ExpectedNumber {
        position: parser.position(),
    })
}
