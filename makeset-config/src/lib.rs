//! Element configuration for the makeset set specializer.
//!
//! An [`ElementConfig`] is the raw record read from JSON or TOML. Validating
//! it produces an immutable [`ElementSpec`], the only input the code
//! generators accept.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod parse;
mod spec;
mod validate;

pub use config::{ElementConfig, TestValue};
pub use error::{Error, Result, SourceContext};
pub use parse::{Format, parse_config, parse_spec};
pub use spec::{ElementSpec, ElementSpecBuilder, FIXTURE_LEN, TypeDecl};
pub use validate::ParseContext;
