//! Test utilities for Beerfest services.
//!
//! Import from dev-dependencies only, never from production code.

pub mod auth;
