use std::path::{Path, PathBuf};

use makeset_core::{FileRules, GeneratedFile};

use super::GENERATED_HEADER;

/// `<package>/tests.rs`: the test module declared by the set module.
pub struct SetTestsRs<'a> {
    package: &'a str,
    content: &'a str,
}

impl<'a> SetTestsRs<'a> {
    pub fn new(package: &'a str, content: &'a str) -> Self {
        Self { package, content }
    }
}

impl GeneratedFile for SetTestsRs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.package).join("tests.rs")
    }

    fn rules(&self) -> FileRules {
        FileRules::generated(GENERATED_HEADER)
    }

    fn render(&self) -> String {
        self.content.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_is_beside_module() {
        let file = SetTestsRs::new("intset", "use super::*;\n");
        assert_eq!(
            file.path(Path::new("out")),
            Path::new("out").join("intset").join("tests.rs")
        );
        assert!(file.contents().ends_with("\n\nuse super::*;\n"));
    }
}
