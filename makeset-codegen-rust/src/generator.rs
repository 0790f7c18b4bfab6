use std::path::Path;

use eyre::Result;
use makeset_codegen::{GenerateResult, PreviewFile, SetCodegen};
use makeset_config::ElementSpec;
use makeset_core::{FileSet, GeneratedFile};

use crate::{
    error::GenerateError,
    files::{SetRs, SetTestsRs},
    specializer::{Specialization, specialize_spec},
};

/// Rust generator that emits a set module specialized to one element type
pub struct Generator<'a> {
    spec: &'a ElementSpec,
}

impl SetCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "rust"
    }

    fn file_extension(&self) -> &'static str {
        "rs"
    }

    fn preview(&self) -> Result<Vec<PreviewFile>> {
        let specialization = self.render()?;
        Ok(self.preview_files(&specialization))
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let specialization = self.render()?;
        self.write(&specialization, output_dir)
    }
}

impl<'a> Generator<'a> {
    pub fn new(spec: &'a ElementSpec) -> Self {
        Self { spec }
    }

    /// Specialize and format both artifacts without touching the disk.
    pub fn render(&self) -> std::result::Result<Specialization, GenerateError> {
        specialize_spec(self.spec)
    }

    /// The files of `specialization`, rooted at `base`.
    pub fn files(&self, specialization: &Specialization, base: &Path) -> FileSet {
        let package = specialization.package.as_str();
        let mut files = FileSet::new();
        files.push(SetRs::new(package, &specialization.implementation).to_file(base));
        if let Some(tests) = &specialization.tests {
            files.push(SetTestsRs::new(package, tests).to_file(base));
        }
        files
    }

    /// Preview files, with paths relative to the output directory.
    pub fn preview_files(&self, specialization: &Specialization) -> Vec<PreviewFile> {
        self.files(specialization, Path::new(""))
            .files()
            .iter()
            .map(|file| PreviewFile {
                path: file.path().display().to_string(),
                content: file.content().to_string(),
            })
            .collect()
    }

    /// Write every file of `specialization` under `output_dir`, or none.
    ///
    /// A test module left by an earlier run is removed when the
    /// specialization no longer has one.
    pub fn write(&self, specialization: &Specialization, output_dir: &Path) -> Result<GenerateResult> {
        let files = self.files(specialization, output_dir).write_all()?;

        let mut removed = Vec::new();
        if specialization.tests.is_none() {
            let stale = SetTestsRs::new(&specialization.package, "").to_file(output_dir);
            if stale.remove_generated()? {
                tracing::info!(path = %stale.path().display(), "removed stale test module");
                removed.push(stale.path().to_path_buf());
            }
        }

        tracing::debug!(count = files.len(), "generation complete");
        Ok(GenerateResult { files, removed })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use makeset_core::WriteResult;
    use tempfile::TempDir;

    use super::*;

    fn spec(with_tests: bool) -> ElementSpec {
        let builder = ElementSpec::builder("intset", "i64", "0");
        let builder = if with_tests {
            builder.test_values(0..10_i64)
        } else {
            builder
        };
        builder.build().unwrap()
    }

    #[test]
    fn test_preview_paths() {
        let spec = spec(true);
        let preview = Generator::new(&spec).preview().unwrap();
        let paths: Vec<_> = preview.iter().map(|f| f.path.replace('\\', "/")).collect();
        assert_eq!(paths, vec!["intset.rs", "intset/tests.rs"]);
        assert!(preview[0].content.starts_with("// Code generated by makeset. DO NOT EDIT.\n\n//! "));
    }

    #[test]
    fn test_generate_writes_both_files() {
        let spec = spec(true);
        let temp = TempDir::new().unwrap();
        let result = Generator::new(&spec).generate(temp.path()).unwrap();

        assert_eq!(result.written().count(), 2);
        assert!(result.files.iter().all(|f| f.result == WriteResult::Written));
        let module = fs::read_to_string(temp.path().join("intset.rs")).unwrap();
        assert!(module.contains("mod tests;"));
        assert!(temp.path().join("intset").join("tests.rs").is_file());
    }

    #[test]
    fn test_generate_without_tests() {
        let spec = spec(false);
        let temp = TempDir::new().unwrap();
        let result = Generator::new(&spec).generate(temp.path()).unwrap();

        assert_eq!(result.files.len(), 1);
        assert!(result.removed.is_empty());
        assert!(!temp.path().join("intset").exists());
    }

    #[test]
    fn test_regenerate_without_tests_removes_stale_test_module() {
        let temp = TempDir::new().unwrap();
        let with_tests = spec(true);
        Generator::new(&with_tests).generate(temp.path()).unwrap();
        let stale = temp.path().join("intset").join("tests.rs");
        assert!(stale.is_file());

        let without_tests = spec(false);
        let result = Generator::new(&without_tests).generate(temp.path()).unwrap();

        assert_eq!(result.removed, vec![stale.clone()]);
        assert!(!stale.exists());
        assert!(!temp.path().join("intset").exists());
        let module = fs::read_to_string(temp.path().join("intset.rs")).unwrap();
        assert!(!module.contains("mod tests;"));
    }

    #[test]
    fn test_regenerate_keeps_hand_written_test_module() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("intset");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("tests.rs"), "use super::*;\n").unwrap();

        let spec = spec(false);
        let result = Generator::new(&spec).generate(temp.path()).unwrap();

        assert!(result.removed.is_empty());
        assert!(dir.join("tests.rs").is_file());
    }

    #[test]
    fn test_generate_overwrites_previous_output() {
        let spec = spec(false);
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("intset.rs"), "stale").unwrap();
        Generator::new(&spec).generate(temp.path()).unwrap();
        let module = fs::read_to_string(temp.path().join("intset.rs")).unwrap();
        assert!(module.contains("pub struct Set {"));
    }

    #[test]
    fn test_language() {
        let spec = spec(false);
        let generator = Generator::new(&spec);
        assert_eq!(generator.language(), "rust");
        assert_eq!(generator.file_extension(), "rs");
    }
}
