//! AI microservice for HR and recruitment workflows.
//!
//! Exposes health probes and the placeholder AI endpoints (candidate
//! summary, candidate matching, interview feedback) over HTTP.

pub mod config;
pub mod error;
pub mod handlers;
pub mod observability;
pub mod startup;
