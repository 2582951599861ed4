//! Calculator session state.
//!
//! This module contains the state that persists between evaluated lines:
//!
//! - The variable table, including the reserved `ans` variable
//! - The angle mode applied to trig operands (RAD, DEG, GRAD)
//! - The decimal mode used to render results (REG, SCI, ENG)
//!
//! A `Session` is owned by the driver and passed by reference into the
//! parser and evaluator; there is no global state.

pub mod session;

#[cfg(test)]
mod tests;
