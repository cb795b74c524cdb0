//! HTTP request handlers.
//!
//! Domain handlers live in the application crate; this module holds the
//! endpoints every deployment needs.

pub mod health;

// Re-export common handler utilities
pub use health::{health_check, readiness_check};
