//! Auth types shared across Beerfest services.
//!
//! Provides the `IdentityHeaders` extractor for gateway-injected identity.

pub mod identity;

pub use identity::{IdentityHeaders, USER_ID_HEADER, USER_ROLE_HEADER};
