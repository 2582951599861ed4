//! Parser module for building the expression tree.
//!
//! This module contains the recursive descent parser that transforms the
//! token stream into an expression tree, resolving variables and
//! constants against the session as it goes. A single token of
//! look-ahead drives every branch decision.
//!
//! Grammar:
//!
//! ```text
//! Program    := Command | Expression
//! Expression := "var" Variable "=" Expression
//!             | Term { ("+" | "-") Term }
//! Term       := Factor { InfixOperator Factor | PostfixOperator }
//! Factor     := (PrefixOperator | "-") Factor
//!             | Base { "^" Exponent }
//! Exponent   := "(" Expression ")" | Number
//! Base       := Exponent
//! Number     := NUMBER | CONSTANT | VARIABLE
//! ```
//!
//! Expressions are evaluated eagerly during parsing: the root the parser
//! returns is an assignment of the computed value to `ans`.

pub mod expr;
pub mod parser;
