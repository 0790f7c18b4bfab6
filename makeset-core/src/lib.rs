//! Core utilities and types for the makeset set specializer.
//!
//! This crate provides the file primitives shared by the generator and the
//! command-line tool: generated file descriptions, write rules, and staged
//! writes that land every file of a generation or none of them.

mod file;
mod staged;

// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
pub use staged::{FileSet, WrittenFile};

/// Header placed at the top of every generated Rust source file.
pub const GENERATED_HEADER: &str = "// Code generated by makeset. DO NOT EDIT.";
