use std::path::{Path, PathBuf};

use makeset_core::{FileRules, GeneratedFile};

use super::GENERATED_HEADER;

/// `<package>.rs`: the specialized set module.
pub struct SetRs<'a> {
    package: &'a str,
    content: &'a str,
}

impl<'a> SetRs<'a> {
    pub fn new(package: &'a str, content: &'a str) -> Self {
        Self { package, content }
    }
}

impl GeneratedFile for SetRs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!("{}.rs", self.package))
    }

    fn rules(&self) -> FileRules {
        FileRules::generated(GENERATED_HEADER)
    }

    fn render(&self) -> String {
        self.content.to_string()
    }
}
