//! Generate operation - set code from a validated configuration.

use std::path::Path;

use eyre::{Context, Result};
use makeset_codegen::lint::run_lints;
use makeset_codegen_rust::{Generator, Specialization};
use makeset_config::ElementSpec;

use crate::reports::{GenerateReport, GenerationResult, PreviewResult, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory that receives `<package>.rs`.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// `specialization` must come from `Generator::new(spec).render()`, so every
/// artifact is known to be valid before anything touches the disk.
pub fn generate(
    spec: &ElementSpec,
    specialization: &Specialization,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let warnings = run_lints(spec)
        .into_iter()
        .filter(|d| d.severity.is_warning())
        .map(|d| d.to_string())
        .collect();

    let generator = Generator::new(spec);
    let result = if opts.dry_run {
        GenerationResult::Preview(PreviewResult {
            files: generator.preview_files(specialization),
        })
    } else {
        let written = generator
            .write(specialization, opts.output_dir)
            .wrap_err("i/o: failed to write generated files")?;
        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            files: written.written().map(|f| f.path.display().to_string()).collect(),
            removed: written.removed.iter().map(|p| p.display().to_string()).collect(),
        })
    };

    Ok(GenerateReport {
        package: spec.package_name().to_string(),
        element_type: spec.element_type().to_string(),
        description: spec.description().map(str::to_string),
        transforms: spec.transforms(),
        warnings,
        result,
    })
}
