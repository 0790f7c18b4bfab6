//! Generate command report data structures.

use std::path::PathBuf;

use makeset_codegen::PreviewFile;

use super::output::{Output, Report};

/// Report data from set generation.
#[derive(Debug)]
pub struct GenerateReport {
    pub package: String,
    pub element_type: String,
    pub description: Option<String>,
    pub transforms: bool,
    /// Lint warnings, already formatted.
    pub warnings: Vec<String>,
    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    /// Paths of the written files.
    pub files: Vec<String>,
    /// Paths of stale generated files that were removed.
    pub removed: Vec<String>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.preformatted(&format!("{}: set of {}", self.package, self.element_type));
        if let Some(desc) = &self.description {
            out.preformatted(desc);
        }
        if self.transforms {
            out.preformatted("with transforms");
        }
        out.newline();

        out.section(&format!("Generated in {}", written.output_dir.display()));
        for file in &written.files {
            out.added_item(file);
        }
        if !written.removed.is_empty() {
            out.section("Removed");
            for file in &written.removed {
                out.removed_item(file);
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        let count = preview.files.len();
        out.preformatted(&format!(
            "{} file{} would be generated",
            count,
            if count == 1 { "" } else { "s" }
        ));
    }
}
