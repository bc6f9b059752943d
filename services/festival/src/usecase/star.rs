use uuid::Uuid;

use crate::domain::repository::{BeerRepository, UserBeerRepository};
use crate::domain::types::StarMode;
use crate::error::FestivalError;

// ── SetStar ──────────────────────────────────────────────────────────────────

/// Star or unstar a beer. Idempotent in both directions; unstarring never
/// deletes the relation row.
pub struct SetStarUseCase<B: BeerRepository, U: UserBeerRepository> {
    pub beers: B,
    pub relations: U,
}

impl<B: BeerRepository, U: UserBeerRepository> SetStarUseCase<B, U> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        beer_id: i32,
        mode: StarMode,
    ) -> Result<(), FestivalError> {
        if !self.beers.exists(beer_id).await? {
            return Err(FestivalError::BeerNotFound);
        }
        self.relations
            .set_starred(user_id, beer_id, mode.starred())
            .await?;
        tracing::info!(%user_id, beer_id, ?mode, "beer star updated");
        Ok(())
    }
}

// ── IsStarred ────────────────────────────────────────────────────────────────

pub struct IsStarredUseCase<B: BeerRepository, U: UserBeerRepository> {
    pub beers: B,
    pub relations: U,
}

impl<B: BeerRepository, U: UserBeerRepository> IsStarredUseCase<B, U> {
    pub async fn execute(&self, user_id: Option<Uuid>, beer_id: i32) -> Result<bool, FestivalError> {
        if !self.beers.exists(beer_id).await? {
            return Err(FestivalError::BeerNotFound);
        }
        match user_id {
            Some(user_id) => self.relations.is_starred(user_id, beer_id).await,
            None => Ok(false),
        }
    }
}

// ── SetTried ─────────────────────────────────────────────────────────────────

pub struct SetTriedUseCase<B: BeerRepository, U: UserBeerRepository> {
    pub beers: B,
    pub relations: U,
}

impl<B: BeerRepository, U: UserBeerRepository> SetTriedUseCase<B, U> {
    pub async fn execute(&self, user_id: Uuid, beer_id: i32, tried: bool) -> Result<(), FestivalError> {
        if !self.beers.exists(beer_id).await? {
            return Err(FestivalError::BeerNotFound);
        }
        self.relations.set_tried(user_id, beer_id, tried).await?;
        tracing::info!(%user_id, beer_id, tried, "beer tried updated");
        Ok(())
    }
}
