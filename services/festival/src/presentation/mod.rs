//! Display helpers for beer listings: pure functions producing strings and
//! table view-models.

pub mod filters;
pub mod table;
