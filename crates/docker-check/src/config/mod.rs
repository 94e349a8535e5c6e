//! Configuration management for the Docker check
//!
//! Settings are layered (defaults, file, environment, flags) and then frozen
//! into a [`CheckPlan`] that is passed by reference through the run.

pub mod loader;
pub mod types;
pub mod validation;

// Re-exports for convenience
pub use types::*;
pub use validation::ConfigValidation;
