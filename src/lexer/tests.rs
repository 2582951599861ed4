//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Commands, constants and the `var` keyword
//! - Numeric literals (integers and floats)
//! - Operators and brackets
//! - Pattern priority quirks
//! - Error cases

use super::lexer::{strip_whitespace, Lexer};
use super::tokens::{Token, TokenKind};
use crate::errors::errors::Error;

fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut lexer = Lexer::new(source);
    let mut tokens = vec![];

    while let Some(token) = lexer.next_token()? {
        tokens.push(token);
    }

    Ok(tokens)
}

#[test]
fn test_tokenize_commands() {
    let tokens = tokenize("rad deg grad reg sci eng clear cls exit").unwrap();

    assert_eq!(tokens.len(), 9);
    for (token, value) in tokens.iter().zip([
        "rad", "deg", "grad", "reg", "sci", "eng", "clear", "cls", "exit",
    ]) {
        assert_eq!(token.kind, TokenKind::Command);
        assert_eq!(token.value, value);
    }
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 3.14 0 .5 100.5").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[2].value, "0");
    assert_eq!(tokens[3].kind, TokenKind::Number);
    assert_eq!(tokens[3].value, ".5");
    assert_eq!(tokens[4].kind, TokenKind::Number);
    assert_eq!(tokens[4].value, "100.5");
}

#[test]
fn test_tokenize_operators() {
    let tokens = tokenize("+ - ^ * / % & | << >> ! E").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Plus);
    assert_eq!(tokens[1].kind, TokenKind::Minus);
    assert_eq!(tokens[2].kind, TokenKind::Exponent);
    assert_eq!(tokens[3].kind, TokenKind::InfixOperator);
    assert_eq!(tokens[4].kind, TokenKind::InfixOperator);
    assert_eq!(tokens[5].kind, TokenKind::InfixOperator);
    assert_eq!(tokens[6].kind, TokenKind::InfixOperator);
    assert_eq!(tokens[7].kind, TokenKind::InfixOperator);
    assert_eq!(tokens[8].kind, TokenKind::InfixOperator);
    assert_eq!(tokens[8].value, "<<");
    assert_eq!(tokens[9].kind, TokenKind::InfixOperator);
    assert_eq!(tokens[9].value, ">>");
    assert_eq!(tokens[10].kind, TokenKind::PostfixOperator);
    assert_eq!(tokens[11].kind, TokenKind::InfixOperator);
    assert_eq!(tokens[11].value, "E");
}

#[test]
fn test_tokenize_prefix_operators() {
    let tokens = tokenize("~ sqrt sin cos tan").unwrap();

    assert_eq!(tokens.len(), 5);
    for (token, value) in tokens.iter().zip(["~", "sqrt", "sin", "cos", "tan"]) {
        assert_eq!(token.kind, TokenKind::PrefixOperator);
        assert_eq!(token.value, value);
    }
}

#[test]
fn test_tokenize_constants() {
    let tokens = tokenize("e pi ans").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Constant);
    assert_eq!(tokens[0].value, "e");
    assert_eq!(tokens[1].kind, TokenKind::Constant);
    assert_eq!(tokens[1].value, "pi");
    assert_eq!(tokens[2].kind, TokenKind::Constant);
    assert_eq!(tokens[2].value, "ans");
}

#[test]
fn test_tokenize_brackets() {
    let tokens = tokenize("(1)").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::OpenParen);
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[2].kind, TokenKind::CloseParen);
}

#[test]
fn test_tokenize_variable_assignment() {
    let tokens = tokenize("var x = 5").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Var);
    assert_eq!(tokens[1].kind, TokenKind::Variable);
    assert_eq!(tokens[1].value, "x");
    assert_eq!(tokens[2].kind, TokenKind::Equals);
    assert_eq!(tokens[3].kind, TokenKind::Number);
    assert_eq!(tokens[3].value, "5");
}

#[test]
fn test_tokenize_priority_over_variables() {
    // Keyword patterns are not word-bounded, so they split words that
    // merely start with a keyword.
    let tokens = tokenize("answer").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Constant);
    assert_eq!(tokens[0].value, "ans");
    assert_eq!(tokens[1].kind, TokenKind::Variable);
    assert_eq!(tokens[1].value, "wer");

    let tokens = tokenize("radius").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Command);
    assert_eq!(tokens[0].value, "rad");
    assert_eq!(tokens[1].kind, TokenKind::Variable);
    assert_eq!(tokens[1].value, "ius");

    let tokens = tokenize("pie").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Constant);
    assert_eq!(tokens[0].value, "pi");
    assert_eq!(tokens[1].kind, TokenKind::Constant);
    assert_eq!(tokens[1].value, "e");
}

#[test]
fn test_tokenize_scientific_operator() {
    let tokens = tokenize("2E3").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[1].kind, TokenKind::InfixOperator);
    assert_eq!(tokens[1].value, "E");
    assert_eq!(tokens[2].kind, TokenKind::Number);
}

#[test]
fn test_tokenize_whitespace_handling() {
    let tokens = tokenize("  1   +\t2\n").unwrap();

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[1].kind, TokenKind::Plus);
    assert_eq!(tokens[2].kind, TokenKind::Number);
}

#[test]
fn test_tokenize_unrecognized_character() {
    let result = tokenize("1+$");

    assert_eq!(
        result,
        Err(Error::Lexical {
            character: '$',
            position: 2,
        })
    );
}

#[test]
fn test_tokenize_lone_angle_bracket() {
    // Only the two-character shifts are operators.
    let result = tokenize("1<2");

    assert_eq!(
        result,
        Err(Error::Lexical {
            character: '<',
            position: 1,
        })
    );
}

#[test]
fn test_tokens_are_produced_lazily() {
    let mut lexer = Lexer::new("1+2");

    assert!(lexer.has_more_tokens());
    assert_eq!(lexer.cursor(), 0);

    let token = lexer.next_token().unwrap().unwrap();
    assert_eq!(token.kind, TokenKind::Number);
    assert_eq!(lexer.cursor(), 1);

    let token = lexer.next_token().unwrap().unwrap();
    assert_eq!(token.kind, TokenKind::Plus);
    assert_eq!(lexer.cursor(), 2);

    let token = lexer.next_token().unwrap().unwrap();
    assert_eq!(token.kind, TokenKind::Number);
    assert!(!lexer.has_more_tokens());

    assert_eq!(lexer.next_token().unwrap(), None);
}

#[test]
fn test_token_values_reproduce_stripped_input() {
    let source = " var long_name = sqrt ( 2 ^ 10 ) << 1 ";
    let tokens = tokenize(source).unwrap();

    let concatenated: String = tokens.iter().map(|token| token.value.as_str()).collect();
    assert_eq!(concatenated, strip_whitespace(source));
}
