//! Lint for repeated fixture entries.

use makeset_config::ElementSpec;

use crate::lint::{Diagnostic, Lint};

/// Lint that warns when two test values are spelled identically.
///
/// The generated tests expect ten distinct values, so a repeat makes them
/// fail. Values that differ in spelling but not in value are not detected.
pub struct DuplicateTestValuesLint;

impl Lint for DuplicateTestValuesLint {
    fn name(&self) -> &'static str {
        "duplicate-test-values"
    }

    fn check(&self, spec: &ElementSpec, diagnostics: &mut Vec<Diagnostic>) {
        let Some(values) = spec.test_values() else {
            return;
        };
        for (i, value) in values.iter().enumerate() {
            if let Some(j) = values[..i].iter().position(|v| v.trim() == value.trim()) {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!("test values {j} and {i} are both `{}`", value.trim()),
                    )
                    .at("testValues"),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_each_repeat() {
        let spec = ElementSpec::builder("intset", "i64", "0")
            .test_values([0, 1, 2, 2, 4, 5, 6, 7, 8, 0_i64])
            .build()
            .unwrap();
        let mut diagnostics = Vec::new();
        DuplicateTestValuesLint.check(&spec, &mut diagnostics);

        let messages: Vec<_> = diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(
            messages,
            vec!["test values 2 and 3 are both `2`", "test values 0 and 9 are both `0`"]
        );
    }

    #[test]
    fn test_distinct_values() {
        let spec = ElementSpec::builder("intset", "i64", "0")
            .test_values(0..10_i64)
            .build()
            .unwrap();
        let mut diagnostics = Vec::new();
        DuplicateTestValuesLint.check(&spec, &mut diagnostics);
        assert!(diagnostics.is_empty());
    }
}
