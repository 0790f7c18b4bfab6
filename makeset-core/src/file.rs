use std::{
    fs, io,
    path::{Path, PathBuf},
};

use eyre::{Result, WrapErr};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file content, without the header
    fn render(&self) -> String;

    /// Render the file content with the header required by its rules
    fn contents(&self) -> String {
        let body = self.render();
        match self.rules().header {
            Some(header) if body.is_empty() => format!("{header}\n"),
            Some(header) => format!("{header}\n\n{body}"),
            None => body,
        }
    }

    /// Describe the file as a concrete [`File`] rooted at `base`
    fn to_file(&self, base: &Path) -> File {
        File::new(self.path(base), self.contents()).with_rules(self.rules())
    }
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// A file to be generated
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a new file with the given path and content (default rules: always overwrite)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    /// Replace the write rules
    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the write rules
    pub fn rules(&self) -> &FileRules {
        &self.rules
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Whether writing this file should be skipped under its rules
    pub fn should_skip(&self) -> bool {
        self.rules.overwrite == Overwrite::IfMissing && self.exists()
    }

    /// Remove an earlier generated copy of this file.
    ///
    /// Only a file that starts with the header of its rules is removed, so
    /// hand-written files are left alone. The parent directory is removed
    /// too once it is empty. Returns whether a file was removed.
    pub fn remove_generated(&self) -> Result<bool> {
        let Some(header) = self.rules.header else {
            return Ok(false);
        };
        let existing = match fs::read(&self.path) {
            Ok(existing) => existing,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(false),
            Err(err) => {
                return Err(err).wrap_err_with(|| format!("failed to read {}", self.path.display()));
            }
        };
        if !existing.starts_with(header.as_bytes()) {
            tracing::debug!(path = %self.path.display(), "keeping file without generated header");
            return Ok(false);
        }

        fs::remove_file(&self.path)
            .wrap_err_with(|| format!("failed to remove {}", self.path.display()))?;
        if let Some(parent) = self.path.parent() {
            let empty = fs::read_dir(parent)
                .map(|mut entries| entries.next().is_none())
                .unwrap_or(false);
            if empty {
                fs::remove_dir(parent)
                    .wrap_err_with(|| format!("failed to remove {}", parent.display()))?;
            }
        }
        Ok(true)
    }
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRules {
    pub overwrite: Overwrite,
    pub header: Option<&'static str>,
}

impl FileRules {
    /// Generated code: always overwrite and carry the given header.
    pub fn generated(header: &'static str) -> Self {
        Self {
            overwrite: Overwrite::Always,
            header: Some(header),
        }
    }
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (generated code)
    Always,
    /// Only create if file doesn't exist
    IfMissing,
}

impl Default for FileRules {
    fn default() -> Self {
        Self {
            overwrite: Overwrite::Always,
            header: None,
        }
    }
}
