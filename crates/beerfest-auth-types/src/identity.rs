//! Gateway-injected identity headers extractor.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use beerfest_domain::user::UserRole;
use http::StatusCode;
use http::request::Parts;
use uuid::Uuid;

pub const USER_ID_HEADER: &str = "x-beerfest-user-id";
pub const USER_ROLE_HEADER: &str = "x-beerfest-user-role";

/// User identity injected by the gateway via `x-beerfest-user-id` and
/// `x-beerfest-user-role` headers.
///
/// Returns 403 if either header is absent or malformed, so handlers that take
/// `IdentityHeaders` reject anonymous callers before reading the body.
/// Read endpoints take `Option<IdentityHeaders>` instead.
#[derive(Debug, Clone)]
pub struct IdentityHeaders {
    pub user_id: Uuid,
    pub user_role: u8,
}

impl IdentityHeaders {
    pub fn role(&self) -> Option<UserRole> {
        UserRole::from_u8(self.user_role)
    }

    pub fn is_staff(&self) -> bool {
        self.role().is_some_and(UserRole::can_manage_catalog)
    }

    fn from_parts(parts: &Parts) -> Option<Self> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<Uuid>().ok())?;

        let user_role = parts
            .headers
            .get(USER_ROLE_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<u8>().ok())?;

        Some(Self { user_id, user_role })
    }
}

impl<S> FromRequestParts<S> for IdentityHeaders
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    // axum-core 0.5 declares `fn -> impl Future + Send`; read the headers
    // synchronously and hand back a 'static future.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let identity = Self::from_parts(parts);
        async move { identity.ok_or(StatusCode::FORBIDDEN) }
    }
}

impl<S> OptionalFromRequestParts<S> for IdentityHeaders
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Option<Self>, Self::Rejection>> + Send {
        let identity = Self::from_parts(parts);
        async move { Ok(identity) }
    }
}
