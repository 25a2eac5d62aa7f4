//! Error types for vuln_db

use crate::args::Field;
use std::io;
use thiserror::Error;

/// Result type alias for vuln_db operations
pub type Result<T> = std::result::Result<T, VulnDbError>;

/// Exit status for structural misuse (missing or conflicting arguments)
pub const EXIT_USAGE: i32 = 1;

/// Exit status for values that have the wrong format or range
pub const EXIT_INVALID_VALUE: i32 = 2;

/// Main error type for vuln_db
#[derive(Error, Debug)]
pub enum VulnDbError {
    /// Argument combination or value errors
    #[error(transparent)]
    Args(#[from] ArgsError),

    /// Command-line syntax errors reported by clap (also help and version)
    #[error(transparent)]
    Cli(#[from] clap::Error),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// YAML parsing errors
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl VulnDbError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            VulnDbError::Args(e) => e.exit_code(),
            VulnDbError::Cli(e) => e.exit_code(),
            VulnDbError::Config(_) | VulnDbError::Io(_) | VulnDbError::Yaml(_) => EXIT_USAGE,
        }
    }
}

/// Invalid invocations detected after the command line was tokenized
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    #[error("missing arguments.")]
    MissingArguments,

    #[error("{0} must be alone.")]
    Conflicting(Field),

    #[error("--product_version/--only_check require the --product argument.")]
    MissingDependency,

    #[error("the cve format must look like CVE-2002-1234.")]
    InvalidFormat(String),

    #[error("the bid argument must be greater than zero.")]
    InvalidRange(i64),
}

impl ArgsError {
    /// 1 for structural misuse, 2 for value violations
    pub fn exit_code(&self) -> i32 {
        match self {
            ArgsError::MissingArguments
            | ArgsError::Conflicting(_)
            | ArgsError::MissingDependency => EXIT_USAGE,
            ArgsError::InvalidFormat(_) | ArgsError::InvalidRange(_) => EXIT_INVALID_VALUE,
        }
    }
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Specialized result type for argument validation
pub type ArgsResult<T> = std::result::Result<T, ArgsError>;

/// Specialized result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
