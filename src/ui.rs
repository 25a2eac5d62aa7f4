//! Terminal diagnostics gated by verbosity

use colored::Colorize;
use serde::Deserialize;

/// Verbosity levels for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Silent = 0,
    Quiet = 1,
    #[default]
    Normal = 2,
    Verbose = 3,
}

/// Writes prefixed diagnostics to stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    pub verbosity: Verbosity,
}

impl Reporter {
    pub fn new(verbosity: Verbosity) -> Self {
        Reporter { verbosity }
    }

    /// Log a warning (quiet verbosity and above)
    pub fn warn(&self, message: &str) {
        if self.verbosity >= Verbosity::Quiet {
            eprintln!("{} {}", "[WARN]".yellow(), message);
        }
    }

    /// Log a debug message (verbose only)
    pub fn debug(&self, message: &str) {
        if self.verbosity >= Verbosity::Verbose {
            eprintln!("{} {}", "[DEBUG]".dimmed(), message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_ordering() {
        assert!(Verbosity::Verbose > Verbosity::Normal);
        assert!(Verbosity::Normal > Verbosity::Quiet);
        assert!(Verbosity::Quiet > Verbosity::Silent);
    }

    #[test]
    fn test_default_is_normal() {
        assert_eq!(Reporter::default().verbosity, Verbosity::Normal);
    }

    #[test]
    fn test_deserialize_lowercase() {
        let v: Verbosity = serde_yaml::from_str("verbose").unwrap();
        assert_eq!(v, Verbosity::Verbose);
    }
}
