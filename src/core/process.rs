//! In-place rewriting — read, expand, overwrite.
//!
//! There is no per-file isolation: the first failure is returned and every
//! later file is left untouched, while files already rewritten stay
//! rewritten.

use std::io::Write;
use std::path::{Path, PathBuf};

use super::expand::expand_tabs;
use super::walk::files_under;
use crate::error::{ExpandError, Result};

/// Tally of one run, logged once all roots are done.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Report {
    /// Files seen under the roots, matching or not.
    pub visited: usize,
    /// Files rewritten in place.
    pub rewritten: usize,
    /// Files left alone by the extension filter.
    pub skipped: usize,
}

/// Rewrite one file with its tabs expanded.
///
/// The whole content is replaced; no backup is kept.
pub fn process_file(path: &Path) -> Result<()> {
    let content = std::fs::read_to_string(path).map_err(|source| ExpandError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let expanded = expand_tabs(&content);

    std::fs::write(path, expanded).map_err(|source| ExpandError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Walk every root and rewrite each `.h` / `.cpp` file under it.
///
/// Progress notices go to stdout, one start and one done line per file.
pub fn process_files(roots: &[PathBuf]) -> Result<Report> {
    let stdout = std::io::stdout();
    process_files_with(roots, &mut stdout.lock())
}

/// [`process_files`], with progress notices sent to `out`.
pub fn process_files_with(roots: &[PathBuf], out: &mut impl Write) -> Result<Report> {
    let mut report = Report::default();

    for root in roots {
        tracing::info!("scanning {}", root.display());

        for candidate in files_under(root) {
            let candidate = candidate?;
            report.visited += 1;

            if !candidate.is_accepted() {
                tracing::debug!("skip {}", candidate.path.display());
                report.skipped += 1;
                continue;
            }

            writeln!(out, "Starting {}", candidate.name).map_err(ExpandError::Progress)?;
            process_file(&candidate.path)?;
            writeln!(out, "{} Done\n", candidate.name).map_err(ExpandError::Progress)?;

            tracing::debug!("rewrote {}", candidate.path.display());
            report.rewritten += 1;
        }
    }

    Ok(report)
}
