//! Error types and error handling for the calculator.
//!
//! This module defines the error type used throughout the pipeline.
//! It includes:
//!
//! - Error variants for every stage (lexing, parsing, evaluation)
//! - The user-facing error category names
//! - Input offsets for errors that point at a spot in the line

pub mod errors;
