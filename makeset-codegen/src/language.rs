//! Language-agnostic code generation traits.

use std::path::{Path, PathBuf};

use eyre::Result;
use makeset_core::{WriteResult, WrittenFile};

/// Trait for language-specific set generators.
///
/// Implement this trait to emit specialized sets in a new language.
pub trait SetCodegen {
    /// Language identifier (e.g., "rust")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "rs")
    fn file_extension(&self) -> &'static str;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Result<Vec<PreviewFile>>;

    /// Generate all files into the specified output directory.
    ///
    /// Either every file is written or none is.
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files in the order they were generated
    pub files: Vec<WrittenFile>,
    /// Stale generated files removed because the configuration no longer
    /// produces them
    pub removed: Vec<PathBuf>,
}

impl GenerateResult {
    /// Files actually written.
    pub fn written(&self) -> impl Iterator<Item = &WrittenFile> {
        self.files
            .iter()
            .filter(|f| f.result == WriteResult::Written)
    }
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}
