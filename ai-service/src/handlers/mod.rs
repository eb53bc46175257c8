//! HTTP handlers for ai-service.
//!
//! The AI endpoints are placeholders: each returns a fixed acknowledgement
//! until the inference backends are wired in.

pub mod ai;
pub mod health;

pub use health::{health_check, root};
