//! Check operation - configuration validation and lints.

use makeset_codegen::lint::{Severity, run_lints};
use makeset_config::ElementSpec;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// `spec` is already validated; this runs the lints and summarizes it.
pub fn check(spec: &ElementSpec, config_name: &str) -> CheckReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in run_lints(spec) {
        let msg = match &diag.location {
            Some(loc) => format!("{} [{}]\n  --> {}", diag.message, diag.lint, loc),
            None => format!("{} [{}]", diag.message, diag.lint),
        };

        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    CheckReport {
        config_name: config_name.to_string(),
        package: spec.package_name().to_string(),
        element_type: spec.element_type().to_string(),
        transforms: spec.transforms(),
        has_tests: spec.has_tests(),
        errors,
        warnings,
        infos,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_collects_lints() {
        let spec = ElementSpec::builder("intset", "i64", "0")
            .import("std::rc::Rc")
            .build()
            .unwrap();
        let report = check(&spec, "intset.toml");

        assert!(report.is_valid());
        assert_eq!(report.package, "intset");
        assert!(!report.has_tests);
        assert_eq!(report.warnings.len(), 2, "{:?}", report.warnings);
        assert!(report.warnings.iter().any(|w| w.contains("[unused-imports]")));
        assert!(report.infos.iter().any(|i| i.contains("[no-tests]")));
    }

    #[test]
    fn test_check_clean_spec() {
        let spec = ElementSpec::builder("intset", "i64", "0")
            .description("Sets of integers.")
            .test_values(0..10_i64)
            .build()
            .unwrap();
        let report = check(&spec, "intset.toml");
        assert!(report.warnings.is_empty());
        assert!(report.infos.is_empty());
        assert!(report.has_tests);
    }
}
