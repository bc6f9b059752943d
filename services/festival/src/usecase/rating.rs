use uuid::Uuid;

use beerfest_domain::rating::Rating;

use crate::domain::repository::{BeerRepository, UserBeerRepository};
use crate::error::FestivalError;

// ── RateBeer ─────────────────────────────────────────────────────────────────

pub struct RateBeerUseCase<B: BeerRepository, U: UserBeerRepository> {
    pub beers: B,
    pub relations: U,
}

impl<B: BeerRepository, U: UserBeerRepository> RateBeerUseCase<B, U> {
    /// Validates the rating before touching the store.
    pub async fn execute(&self, user_id: Uuid, beer_id: i32, rating: i64) -> Result<(), FestivalError> {
        let rating = Rating::new(rating).map_err(|_| FestivalError::InvalidRating)?;
        if !self.beers.exists(beer_id).await? {
            return Err(FestivalError::BeerNotFound);
        }
        self.relations.set_rating(user_id, beer_id, rating).await?;
        tracing::info!(%user_id, beer_id, rating = rating.get(), "beer rated");
        Ok(())
    }
}

// ── ClearRating ──────────────────────────────────────────────────────────────

pub struct ClearRatingUseCase<B: BeerRepository, U: UserBeerRepository> {
    pub beers: B,
    pub relations: U,
}

impl<B: BeerRepository, U: UserBeerRepository> ClearRatingUseCase<B, U> {
    pub async fn execute(&self, user_id: Uuid, beer_id: i32) -> Result<(), FestivalError> {
        if !self.beers.exists(beer_id).await? {
            return Err(FestivalError::BeerNotFound);
        }
        self.relations.clear_rating(user_id, beer_id).await?;
        tracing::info!(%user_id, beer_id, "beer rating cleared");
        Ok(())
    }
}
