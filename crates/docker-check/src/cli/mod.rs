//! CLI interface for the Docker check

pub mod args;

// Re-export key types for convenience
pub use args::{AppConfigResolver, CheckArgs};
