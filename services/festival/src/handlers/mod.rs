pub mod bar;
pub mod beer;
pub mod brewery;
pub mod health;
pub mod index;
pub mod rating;
pub mod star;
pub mod user;

use beerfest_auth_types::IdentityHeaders;

use crate::error::FestivalError;

/// Catalog writes and user provisioning are staff-only.
pub(crate) fn require_staff(identity: &IdentityHeaders) -> Result<(), FestivalError> {
    if identity.is_staff() {
        Ok(())
    } else {
        Err(FestivalError::Forbidden)
    }
}
