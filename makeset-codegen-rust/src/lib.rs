//! Rust set specializer for makeset.
//!
//! [`Specializer`] turns a validated [`ElementSpec`] into the text of a Rust
//! module implementing a `Set` of one element type, plus an optional test
//! module. [`Formatter`] checks that the text parses and canonicalizes its
//! whitespace, and [`Generator`] writes both files together.
//!
//! [`ElementSpec`]: makeset_config::ElementSpec

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod emit;
mod error;
mod format;
mod generator;
mod imports;
mod rust_file;
mod specializer;

pub mod ast;
pub mod files;

pub use ast::{Enum, Field, Fn, Impl, Param, Struct, Trait, TypeAlias, Variant};
pub use error::{GenerateError, RenderError, SpecializeError};
pub use format::{Artifact, Formatter, canonicalize};
pub use generator::Generator;
pub use imports::{BASE_IMPORTS, BASE_TEST_IMPORTS, DEBUG_IMPORT, implementation_imports, test_imports};
pub use makeset_codegen::{GenerateResult, PreviewFile, SetCodegen};
pub use rust_file::{RustFile, Use};
pub use specializer::{
    GENERATED_ITEMS, Specialization, Specializer, specialize_config, specialize_spec,
};
