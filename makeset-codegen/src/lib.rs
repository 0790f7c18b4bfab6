//! Shared code generation utilities for the makeset set specializer.
//!
//! This crate provides language-agnostic abstractions used by the
//! language-specific generators (e.g., `makeset-codegen-rust`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`generation`] - Output management (ImportSet)
//! - [`language`] - The generator trait and its result types
//! - [`lint`] - Non-fatal checks over an element specification
//! - [`testing`] - Test utilities (feature-gated)

pub mod builder;
pub mod generation;
pub mod language;
pub mod lint;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use language::{GenerateResult, PreviewFile, SetCodegen};
