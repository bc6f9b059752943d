//! Domain values shared across Beerfest crates.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers, and in migrations that need
//! the same validation rules as the service.

pub mod abv;
pub mod rating;
pub mod user;
