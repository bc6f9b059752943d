//! Mock identity helpers for integration tests.
//!
//! The festival service trusts `x-beerfest-user-id` + `x-beerfest-user-role`
//! headers injected by the gateway. `MockAuth` builds those headers directly.

use axum::http::{HeaderMap, HeaderName, HeaderValue};
use beerfest_auth_types::{USER_ID_HEADER, USER_ROLE_HEADER};
use beerfest_domain::user::UserRole;
use uuid::Uuid;

/// Configurable identity injected into test requests.
pub struct MockAuth {
    pub user_id: Uuid,
    pub user_role: u8,
}

impl MockAuth {
    pub fn new(user_id: Uuid, user_role: u8) -> Self {
        Self { user_id, user_role }
    }

    pub fn attendee() -> Self {
        Self::new(Uuid::new_v4(), UserRole::Attendee.as_u8())
    }

    pub fn staff() -> Self {
        Self::new(Uuid::new_v4(), UserRole::Staff.as_u8())
    }

    /// Return headers as if the gateway injected them.
    pub fn headers(&self) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(
            HeaderName::from_static(USER_ID_HEADER),
            HeaderValue::from_str(&self.user_id.to_string()).unwrap(),
        );
        map.insert(
            HeaderName::from_static(USER_ROLE_HEADER),
            HeaderValue::from(u16::from(self.user_role)),
        );
        map
    }
}
