//! Shared service plumbing: configuration, health checks, request ids,
//! tracing setup, serde helpers and `sea-orm` error classification.

pub mod config;
pub mod health;
pub mod middleware;
pub mod sea_ext;
pub mod serde;
pub mod tracing;
