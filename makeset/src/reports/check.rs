//! Check command report data structures.

use super::output::{Output, Report};

/// Report data from configuration validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path of the configuration, or `<stdin>`.
    pub config_name: String,
    pub package: String,
    pub element_type: String,
    pub transforms: bool,
    /// Whether a test module would be generated.
    pub has_tests: bool,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.warning(&format!("error: {}", error));
        }

        for warning in &self.warnings {
            out.warning(&format!("warning: {}", warning));
        }

        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.config_name));
        out.newline();
        out.key_value_indented("package", &self.package);
        out.key_value_indented("element type", &self.element_type);
        out.key_value_indented("transforms", yes_no(self.transforms));
        out.key_value_indented("tests", yes_no(self.has_tests));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    fn report() -> CheckReport {
        CheckReport {
            config_name: "intset.toml".into(),
            package: "intset".into(),
            element_type: "i64".into(),
            transforms: true,
            has_tests: false,
            errors: vec![],
            warnings: vec!["no description [missing-description]".into()],
            infos: vec![],
        }
    }

    #[test]
    fn test_render_valid() {
        let mut out = RecordingOutput::default();
        report().render(&mut out);
        assert_eq!(
            out.stderr,
            vec!["warning: no description [missing-description]"]
        );
        insta::assert_snapshot!(out.stdout.join("\n"), @r"
        ✓ intset.toml is valid

          package: intset
          element type: i64
          transforms: yes
          tests: no
        ");
    }

    #[test]
    fn test_render_invalid_skips_summary() {
        let mut report = report();
        report.errors.push("broken".into());
        let mut out = RecordingOutput::default();
        report.render(&mut out);
        assert_eq!(out.stderr.len(), 2);
        assert_eq!(out.stdout, vec![String::new()]);
    }
}
