//! Non-fatal checks over a validated element specification.

mod diagnostic;
mod lints;

pub use diagnostic::{Diagnostic, Severity};
pub use lints::{DuplicateTestValuesLint, MissingDescriptionLint, NoTestsLint, UnusedImportsLint};
use makeset_config::ElementSpec;

/// A lint that checks a specification for likely mistakes.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// Check the specification and add any diagnostics.
    fn check(&self, spec: &ElementSpec, diagnostics: &mut Vec<Diagnostic>);
}

/// Every built-in lint.
pub fn default_lints() -> Vec<Box<dyn Lint>> {
    vec![
        Box::new(MissingDescriptionLint),
        Box::new(UnusedImportsLint),
        Box::new(DuplicateTestValuesLint),
        Box::new(NoTestsLint),
    ]
}

/// Run the built-in lints over a specification.
pub fn run_lints(spec: &ElementSpec) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for lint in default_lints() {
        let before = diagnostics.len();
        lint.check(spec, &mut diagnostics);
        tracing::debug!(
            lint = lint.name(),
            found = diagnostics.len() - before,
            "ran lint"
        );
    }
    diagnostics
}
