//! vuln_db - command-line front end for a personal CVE/BID database
//!
//! This crate decides whether an invocation is well-formed and which lookup
//! the caller should perform. Storage, feed downloads and result rendering
//! live elsewhere and consume [`args::ParsedArguments`].

// Public modules
pub mod args;
pub mod cli;
pub mod config;
pub mod error;
pub mod ui;

// Re-export commonly used types
pub use args::{Mode, ParsedArguments};
pub use error::{Result, VulnDbError};

/// Current version of vuln_db
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
