//! Output management helpers.

mod imports;

pub use imports::ImportSet;
