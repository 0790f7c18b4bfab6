//! Test utilities for code generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use eyre::{Result, WrapErr};

/// Error from building or testing generated code.
#[derive(Debug)]
pub struct CompileError {
    pub message: String,
    pub output: String,
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n\nOutput:\n{}", self.message, self.output)
    }
}

impl std::error::Error for CompileError {}

/// Trait for verifying that generated code builds and passes its tests.
pub trait CompileChecker {
    /// Run the check in the given crate directory.
    fn check(&self, dir: &Path) -> Result<(), CompileError>;
}

/// Runs `cargo test` on a generated crate.
///
/// Build artifacts go to a `target` directory inside the crate so that
/// scratch crates never touch the workspace's own target directory.
pub struct RustTester;

impl CompileChecker for RustTester {
    fn check(&self, dir: &Path) -> Result<(), CompileError> {
        let output = Command::new("cargo")
            .args(["test", "--quiet"])
            .env("CARGO_TARGET_DIR", dir.join("target"))
            .current_dir(dir)
            .output()
            .map_err(|e| CompileError {
                message: format!("Failed to run cargo test: {}", e),
                output: String::new(),
            })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            Err(CompileError {
                message: "cargo test failed".to_string(),
                output: format!("stderr:\n{}\n\nstdout:\n{}", stderr, stdout),
            })
        }
    }
}

/// A throwaway library crate in a temporary directory.
pub struct ScratchCrate {
    dir: tempfile::TempDir,
}

impl ScratchCrate {
    /// Create a crate named `name` with an empty `src/lib.rs`.
    pub fn new(name: &str) -> Result<Self> {
        let dir = tempfile::TempDir::new().wrap_err("failed to create scratch directory")?;
        let manifest = format!(
            "[package]\nname = \"{name}\"\nversion = \"0.1.0\"\nedition = \"2021\"\npublish = false\n\n[workspace]\n"
        );
        fs::create_dir_all(dir.path().join("src"))?;
        fs::write(dir.path().join("Cargo.toml"), manifest)?;
        fs::write(dir.path().join("src/lib.rs"), "")?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// The crate's `src` directory.
    pub fn src(&self) -> PathBuf {
        self.dir.path().join("src")
    }

    /// Write a file relative to the crate root, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) -> Result<()> {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content).wrap_err_with(|| format!("failed to write {}", path.display()))
    }

    /// Run a checker against the crate.
    pub fn check(&self, checker: &impl CompileChecker) -> Result<(), CompileError> {
        checker.check(self.path())
    }
}

/// Assert that two strings are equal, with a line diff on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        let expected_lines: Vec<&str> = expected.lines().collect();
        let actual_lines: Vec<&str> = actual.lines().collect();

        let mut diff = String::new();
        let max_lines = expected_lines.len().max(actual_lines.len());
        for i in 0..max_lines {
            let e = expected_lines.get(i).copied();
            let a = actual_lines.get(i).copied();
            if e != a {
                diff.push_str(&format!(
                    "line {}:\n  - {}\n  + {}\n",
                    i + 1,
                    e.unwrap_or("<missing>"),
                    a.unwrap_or("<missing>")
                ));
            }
        }
        panic!("content mismatch:\n{diff}");
    }
}
