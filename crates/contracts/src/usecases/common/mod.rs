//! Common types and traits for all UseCases

pub mod usecase_result;

// Re-exports
pub use usecase_result::{UseCaseError, UseCaseResult};
