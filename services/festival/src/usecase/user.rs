use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::{UserBeerRepository, UserRepository};
use crate::domain::types::{User, UserBeerLinks};
use crate::error::FestivalError;

// ── CreateUser ───────────────────────────────────────────────────────────────

pub struct CreateUserInput {
    /// Gateway identity to bind; a fresh id is minted when absent.
    pub id: Option<Uuid>,
    pub username: String,
    pub email: String,
}

pub struct CreateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> CreateUserUseCase<R> {
    pub async fn execute(&self, input: CreateUserInput) -> Result<User, FestivalError> {
        if !validate_username(&input.username) {
            return Err(FestivalError::MissingData);
        }
        let user = User {
            id: input.id.unwrap_or_else(Uuid::now_v7),
            username: input.username,
            email: input.email.trim().to_owned(),
            created_at: Utc::now(),
        };
        self.repo.create(&user).await?;
        tracing::info!(user_id = %user.id, "user created");
        Ok(user)
    }
}

/// 1–150 characters of letters, digits and `@.+-_`.
pub fn validate_username(username: &str) -> bool {
    let len = username.chars().count();
    (1..=150).contains(&len)
        && username
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'))
}

// ── GetMe ────────────────────────────────────────────────────────────────────

pub struct GetMeUseCase<R: UserRepository, U: UserBeerRepository> {
    pub users: R,
    pub relations: U,
}

impl<R: UserRepository, U: UserBeerRepository> GetMeUseCase<R, U> {
    pub async fn execute(&self, user_id: Uuid) -> Result<(User, UserBeerLinks), FestivalError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(FestivalError::UserNotFound)?;
        let links = self.relations.links_for_user(user_id).await?;
        Ok((user, links))
    }
}
