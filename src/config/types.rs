//! Configuration types

use crate::ui::Verbosity;
use serde::Deserialize;
use std::path::PathBuf;

/// Settings read from `vuln_db.yml`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Local database file handed to the database layer
    #[serde(default)]
    pub database: Option<PathBuf>,

    /// Default verbosity when no `--quiet`/`--verbose` flag is given
    #[serde(default)]
    pub verbosity: Option<Verbosity>,

    /// File this configuration was read from
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Config {
    /// Database path, falling back to the per-user data directory
    pub fn database_path(&self) -> Option<PathBuf> {
        self.database.clone().or_else(|| {
            super::project_dirs().map(|dirs| dirs.data_dir().join(super::DEFAULT_DATABASE_NAME))
        })
    }
}
