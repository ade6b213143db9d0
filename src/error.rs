//! Error taxonomy for a run.
//!
//! Every variant is an I/O failure of some kind; nothing is recovered
//! locally, the first error aborts the whole run.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExpandError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Missing root, or a directory under it that could not be listed.
    #[error("failed to walk {}", root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to print progress")]
    Progress(#[source] std::io::Error),

    #[error("failed to load config {}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ExpandError>;
