//! Lint for imports that no configured code can use.

use makeset_config::ElementSpec;

use crate::lint::{Diagnostic, Lint};

/// Lint that warns about imports when there is no custom code to use them.
///
/// Imports only serve `less`, `toString` and `decl`; without any of them the
/// generated module would carry unused `use` items.
pub struct UnusedImportsLint;

impl Lint for UnusedImportsLint {
    fn name(&self) -> &'static str {
        "unused-imports"
    }

    fn check(&self, spec: &ElementSpec, diagnostics: &mut Vec<Diagnostic>) {
        let has_custom_code = spec.less_body().is_some()
            || spec.to_string_body().is_some()
            || spec.type_decl().is_some();
        if spec.has_imports() && !has_custom_code {
            let imports: Vec<_> = spec.imports().collect();
            diagnostics.push(
                Diagnostic::warning(
                    self.name(),
                    format!(
                        "imports {} are not used by any custom code",
                        imports.join(", ")
                    ),
                )
                .at("imports"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(spec: &ElementSpec) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        UnusedImportsLint.check(spec, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_imports_without_custom_code() {
        let spec = ElementSpec::builder("intset", "i64", "0")
            .import("std::fmt::Write")
            .build()
            .unwrap();
        let diagnostics = check(&spec);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("std::fmt::Write"));
    }

    #[test]
    fn test_imports_with_to_string() {
        let spec = ElementSpec::builder("intset", "i64", "0")
            .import("std::fmt::Write")
            .to_string_body("let mut s = String::new();\nlet _ = write!(s, \"{x}\");\ns")
            .build()
            .unwrap();
        assert!(check(&spec).is_empty());
    }
}
