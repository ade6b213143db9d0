//! Run configuration — which roots to scan.
//!
//! Roots come from the command line, else from a simple key-value config
//! file, else from the built-in defaults:
//!
//! ```text
//! # tabs2spaces configuration
//! roots = y, yave, editor
//! ```

use std::path::{Path, PathBuf};

use crate::error::{ExpandError, Result};

/// Project directories scanned when nothing else is given.
pub const DEFAULT_ROOTS: &[&str] = &["y", "yave", "editor"];

/// Everything a run needs.  Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub roots: Vec<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            roots: DEFAULT_ROOTS.iter().map(PathBuf::from).collect(),
        }
    }
}

impl RunConfig {
    /// Resolve the root set: CLI roots win, then the config file, then
    /// [`DEFAULT_ROOTS`].
    pub fn resolve(cli_roots: Vec<PathBuf>, config_file: Option<&Path>) -> Result<Self> {
        if !cli_roots.is_empty() {
            return Ok(Self { roots: cli_roots });
        }
        match config_file {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Load from a config file.  An unreadable file is an error; a file
    /// without usable `roots` falls back to the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ExpandError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse_config(&contents))
    }

    fn parse_config(s: &str) -> Self {
        let mut roots = Vec::new();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            if key.trim() != "roots" {
                continue;
            }

            roots = value
                .split(',')
                .map(|part| part.trim().trim_matches('"'))
                .filter(|part| !part.is_empty())
                .map(PathBuf::from)
                .collect();
        }

        if roots.is_empty() {
            Self::default()
        } else {
            Self { roots }
        }
    }
}
