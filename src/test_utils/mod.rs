//! Test utilities for unit and HTTP-level testing.
//!
//! This module provides:
//! - Fixture constants and factories for token responses and claims
//! - An in-memory identity provider standing in for GoTrue
//! - A builder for `AppState` wired to test dependencies

mod app_state_builder;
mod factories;
mod provider_mocks;

pub use app_state_builder::*;
pub use factories::*;
pub use provider_mocks::*;
