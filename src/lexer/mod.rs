//! Lexical analysis module for the calculator.
//!
//! This module contains the lexer (tokenizer) that converts an input line
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization using anchored regex patterns tried in priority order
//! - Recognition of commands, numbers, operators, constants and variables
//! - Cursor tracking for error offsets
//! - Whitespace stripping ahead of tokenization
//!
//! Tokens are produced lazily, one per `next_token` call, rather than all
//! at once.

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
