use makeset_config::ElementSpec;

use crate::lint::{Diagnostic, Lint};

/// Notes that no test module will be generated.
pub struct NoTestsLint;

impl Lint for NoTestsLint {
    fn name(&self) -> &'static str {
        "no-tests"
    }

    fn check(&self, spec: &ElementSpec, diagnostics: &mut Vec<Diagnostic>) {
        if !spec.has_tests() {
            diagnostics.push(
                Diagnostic::info(self.name(), "no testValues given; tests will not be generated")
                    .at("testValues"),
            );
        }
    }
}
