pub mod adapters;
pub mod application;
pub mod domain;
pub mod infra;

// Test utilities (compiled only for the crate's own tests)
#[cfg(test)]
pub mod test_utils;

// Re-exports for shorter use statements.
pub use application::*;
pub use domain::*;
