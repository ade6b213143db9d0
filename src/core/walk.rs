//! Root traversal — enumerate every file under a root and keep the C++
//! sources.
//!
//! Directory symlinks are not followed.  Any other symlink, dangling ones
//! included, counts as a file.  A root that is not a directory yields
//! nothing.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::expand::extension;
use crate::error::{ExpandError, Result};

/// Extensions that get rewritten.  Matched exactly, case-sensitive.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["h", "cpp"];

/// A file discovered under a root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    pub name: String,
}

impl Candidate {
    /// Does this file's extension match [`ACCEPTED_EXTENSIONS`]?
    pub fn is_accepted(&self) -> bool {
        ACCEPTED_EXTENSIONS.contains(&extension(&self.name))
    }
}

/// Every file under `root`, depth-first, siblings sorted by name.
///
/// Lazy, so a caller processing files as they arrive only hits a traversal
/// error (missing root, unreadable directory) once the walk reaches it.
pub fn files_under(root: &Path) -> impl Iterator<Item = Result<Candidate>> + '_ {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(move |entry| {
            let entry = match entry {
                Ok(entry) => entry,
                Err(source) => {
                    return Some(Err(ExpandError::Walk {
                        root: root.to_path_buf(),
                        source,
                    }))
                }
            };

            if entry.depth() == 0 {
                return None;
            }

            let ft = entry.file_type();
            let is_file = ft.is_file() || (ft.is_symlink() && !entry.path().is_dir());
            if !is_file {
                return None;
            }

            Some(Ok(Candidate {
                name: entry.file_name().to_string_lossy().into_owned(),
                path: entry.into_path(),
            }))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn candidate(name: &str) -> Candidate {
        Candidate {
            path: PathBuf::from(name),
            name: name.to_string(),
        }
    }

    #[test]
    fn accepts_only_exact_extensions() {
        assert!(candidate("a.h").is_accepted());
        assert!(candidate("a.cpp").is_accepted());
        assert!(candidate("a.b.cpp").is_accepted());
        assert!(!candidate("a.H").is_accepted());
        assert!(!candidate("a.CPP").is_accepted());
        assert!(!candidate("a.hpp").is_accepted());
        assert!(!candidate("main.py").is_accepted());
        // no dot: the whole name is the extension
        assert!(candidate("h").is_accepted());
        assert!(candidate("cpp").is_accepted());
    }

    #[test]
    fn lists_nested_files_only() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("sub/deeper")).unwrap();
        fs::write(dir.path().join("top.h"), "").unwrap();
        fs::write(dir.path().join("sub/mid.cpp"), "").unwrap();
        fs::write(dir.path().join("sub/deeper/low.txt"), "").unwrap();

        let mut names: Vec<String> = files_under(dir.path())
            .map(|c| c.unwrap().name)
            .collect();
        names.sort();
        assert_eq!(names, vec!["low.txt", "mid.cpp", "top.h"]);
    }

    #[test]
    fn candidate_path_is_root_joined() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/a.h"), "").unwrap();

        let files: Vec<Candidate> = files_under(dir.path()).collect::<Result<_>>().unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, dir.path().join("sub").join("a.h"));
    }

    #[test]
    fn file_root_yields_nothing() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("lone.cpp");
        fs::write(&file, "").unwrap();

        assert_eq!(files_under(&file).count(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_is_a_candidate() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("real")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone.h"), dir.path().join("x.h")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("link")).unwrap();

        let files: Vec<Candidate> = files_under(dir.path()).collect::<Result<_>>().unwrap();
        let names: Vec<&str> = files.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["x.h"]);
    }

    #[test]
    fn missing_root_is_an_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = files_under(&missing)
            .collect::<Result<Vec<_>>>()
            .unwrap_err();
        assert!(matches!(err, ExpandError::Walk { .. }));
    }
}
