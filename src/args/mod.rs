//! Argument values and validation
//!
//! This module turns the six raw command-line fields into a validated
//! [`ParsedArguments`] and its [`Mode`].

pub mod types;
pub mod validate;

// Re-export main types
pub use types::*;
pub use validate::*;
