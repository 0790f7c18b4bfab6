mod duplicate_test_values;
mod missing_description;
mod no_tests;
mod unused_imports;

pub use duplicate_test_values::DuplicateTestValuesLint;
pub use missing_description::MissingDescriptionLint;
pub use no_tests::NoTestsLint;
pub use unused_imports::UnusedImportsLint;
