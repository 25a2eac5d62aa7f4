//! Configuration loading
//!
//! This module finds and parses the optional `vuln_db.yml` file.

pub mod parse;
pub mod types;

// Re-export main types
pub use parse::*;
pub use types::*;

use directories::ProjectDirs;

/// File name of the database inside the user data directory
pub const DEFAULT_DATABASE_NAME: &str = "vuln_db.sqlite";

/// Per-user directories for vuln_db, if a home directory can be resolved
pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "vuln_db")
}
