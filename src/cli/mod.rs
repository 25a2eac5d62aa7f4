//! CLI interface and argument parsing
//!
//! This module builds the clap command and hands validated invocations to
//! the binary.

pub mod app;

// Re-export main types
pub use app::*;
