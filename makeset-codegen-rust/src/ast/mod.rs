//! Builders for the Rust items the specializer emits.

mod fns;
mod impls;
mod items;
mod structs;

pub use fns::{Fn, Param};
pub use impls::Impl;
pub use items::{Enum, Trait, TypeAlias, Variant};
pub use structs::{Field, Struct};
