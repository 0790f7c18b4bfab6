//! Lint for configurations without a description.

use makeset_config::ElementSpec;

use crate::lint::{Diagnostic, Lint};

/// Lint that warns when a configuration does not say what the set is for.
pub struct MissingDescriptionLint;

impl Lint for MissingDescriptionLint {
    fn name(&self) -> &'static str {
        "missing-description"
    }

    fn check(&self, spec: &ElementSpec, diagnostics: &mut Vec<Diagnostic>) {
        if spec.description().is_none() {
            diagnostics.push(
                Diagnostic::warning(
                    self.name(),
                    format!("set '{}' has no description", spec.package_name()),
                )
                .at("description"),
            );
        }
    }
}
