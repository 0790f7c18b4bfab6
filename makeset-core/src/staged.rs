//! All-or-nothing writes of a group of generated files.
//!
//! Every file is first written to a temporary sibling of its destination.
//! Only when all of them are staged are they moved into place; if a move
//! fails, files already moved are restored to their previous state.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use eyre::{Result, WrapErr};
use tempfile::NamedTempFile;

use crate::{File, WriteResult};

/// Outcome of writing one file of a [`FileSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub result: WriteResult,
}

/// A group of files written together.
#[derive(Debug, Default, Clone)]
pub struct FileSet {
    files: Vec<File>,
}

/// What was at a destination before a staged file replaced it.
enum Previous {
    Absent,
    Content(Vec<u8>),
}

impl FileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file to the set.
    pub fn push(&mut self, file: File) -> &mut Self {
        self.files.push(file);
        self
    }

    pub fn files(&self) -> &[File] {
        &self.files
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Write every file, or none of them.
    ///
    /// Files whose rules say to skip are reported as [`WriteResult::Skipped`]
    /// and left untouched.
    pub fn write_all(&self) -> Result<Vec<WrittenFile>> {
        let mut staged = Vec::new();
        let mut created_dirs = Vec::new();

        for file in &self.files {
            if file.should_skip() {
                tracing::debug!(path = %file.path().display(), "skipping existing file");
                continue;
            }
            match stage(file, &mut created_dirs) {
                Ok(tmp) => staged.push((file.path(), tmp)),
                Err(err) => {
                    drop(staged);
                    remove_dirs(&created_dirs);
                    return Err(err);
                }
            }
        }

        let mut persisted: Vec<(&Path, Previous)> = Vec::new();
        for (path, tmp) in staged {
            let previous = match fs::read(path) {
                Ok(bytes) => Previous::Content(bytes),
                Err(_) => Previous::Absent,
            };
            if let Err(err) = tmp.persist(path) {
                rollback(&persisted);
                remove_dirs(&created_dirs);
                return Err(err.error)
                    .wrap_err_with(|| format!("failed to write '{}'", path.display()));
            }
            tracing::info!(path = %path.display(), "wrote file");
            persisted.push((path, previous));
        }

        Ok(self
            .files
            .iter()
            .map(|file| WrittenFile {
                path: file.path().to_path_buf(),
                result: if persisted.iter().any(|(p, _)| *p == file.path()) {
                    WriteResult::Written
                } else {
                    WriteResult::Skipped
                },
            })
            .collect())
    }
}

fn stage(file: &File, created_dirs: &mut Vec<PathBuf>) -> Result<NamedTempFile> {
    let parent = match file.path().parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    create_dirs(&parent, created_dirs)
        .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;

    let mut tmp = NamedTempFile::new_in(&parent)
        .wrap_err_with(|| format!("failed to stage '{}'", file.path().display()))?;
    tmp.write_all(file.content().as_bytes())
        .and_then(|()| tmp.flush())
        .wrap_err_with(|| format!("failed to stage '{}'", file.path().display()))?;
    Ok(tmp)
}

/// Create `dir` and any missing ancestors, remembering which ones were new.
fn create_dirs(dir: &Path, created: &mut Vec<PathBuf>) -> std::io::Result<()> {
    let mut missing = Vec::new();
    let mut current = Some(dir);
    while let Some(d) = current {
        if d.as_os_str().is_empty() || d.exists() {
            break;
        }
        missing.push(d.to_path_buf());
        current = d.parent();
    }
    for d in missing.into_iter().rev() {
        fs::create_dir(&d)?;
        created.push(d);
    }
    Ok(())
}

fn rollback(persisted: &[(&Path, Previous)]) {
    for (path, previous) in persisted.iter().rev() {
        let outcome = match previous {
            Previous::Absent => fs::remove_file(path),
            Previous::Content(bytes) => fs::write(path, bytes),
        };
        if let Err(err) = outcome {
            tracing::warn!(path = %path.display(), %err, "failed to roll back file");
        }
    }
}

fn remove_dirs(created: &[PathBuf]) {
    // Deepest first; a directory that is not empty stays.
    for dir in created.iter().rev() {
        let _ = fs::remove_dir(dir);
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::{FileRules, Overwrite};

    #[test]
    fn test_write_all_creates_nested_files() {
        let temp = TempDir::new().unwrap();
        let mut set = FileSet::new();
        set.push(File::new(temp.path().join("intset.rs"), "impl"))
            .push(File::new(temp.path().join("intset").join("tests.rs"), "tests"));

        let written = set.write_all().unwrap();

        assert_eq!(written.len(), 2);
        assert!(written.iter().all(|w| w.result == WriteResult::Written));
        assert_eq!(
            fs::read_to_string(temp.path().join("intset.rs")).unwrap(),
            "impl"
        );
        assert_eq!(
            fs::read_to_string(temp.path().join("intset/tests.rs")).unwrap(),
            "tests"
        );
    }

    #[test]
    fn test_write_all_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("set.rs");
        fs::write(&path, "first").unwrap();

        let mut set = FileSet::new();
        set.push(File::new(&path, "second"));
        set.write_all().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_write_all_skips_if_missing_rule() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("keep.rs");
        fs::write(&path, "original").unwrap();

        let mut set = FileSet::new();
        set.push(File::new(&path, "replaced").with_rules(FileRules {
            overwrite: Overwrite::IfMissing,
            header: None,
        }));
        let written = set.write_all().unwrap();

        assert_eq!(written[0].result, WriteResult::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn test_write_all_leaves_nothing_when_staging_fails() {
        let temp = TempDir::new().unwrap();
        // A regular file where a directory is needed makes staging fail.
        let blocker = temp.path().join("blocked");
        fs::write(&blocker, "not a directory").unwrap();

        let good = temp.path().join("good.rs");
        let mut set = FileSet::new();
        set.push(File::new(&good, "impl"))
            .push(File::new(blocker.join("tests.rs"), "tests"));

        assert!(set.write_all().is_err());
        assert!(!good.exists());
        let leftovers: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
        assert_eq!(leftovers.len(), 1);
    }

    #[test]
    fn test_create_dirs_records_new_directories() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("a").join("b");
        let mut created = Vec::new();

        create_dirs(&dir, &mut created).unwrap();

        assert!(dir.is_dir());
        assert_eq!(created, vec![temp.path().join("a"), dir.clone()]);

        remove_dirs(&created);
        assert!(!temp.path().join("a").exists());
    }
}
