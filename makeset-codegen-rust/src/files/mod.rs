//! The files written for one specialization.

mod set_rs;
mod set_tests_rs;

pub use makeset_core::GENERATED_HEADER;
pub use set_rs::SetRs;
pub use set_tests_rs::SetTestsRs;
