//! Utility macros for the calculator.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_PATTERN!` - Creates an entry for the prioritized pattern table
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a `RegexPattern` entry for the lexer's pattern table.
///
/// The pattern source must be anchored with `^` so that it only ever
/// matches at the lexer's cursor.
///
/// # Arguments
///
/// * `$kind` - The TokenKind the pattern produces
/// * `$pattern` - The anchored regex source
///
/// # Example
///
/// ```ignore
/// MK_PATTERN!(TokenKind::Number, "^\\d*\\.?\\d+")
/// ```
#[macro_export]
macro_rules! MK_PATTERN {
    ($kind:expr, $pattern:literal) => {
        RegexPattern {
            kind: $kind,
            regex: Regex::new($pattern).unwrap(),
        }
    };
}
