use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;

use beerfest_auth_types::IdentityHeaders;

use crate::error::FestivalError;
use crate::state::AppState;
use crate::usecase::rating::{ClearRatingUseCase, RateBeerUseCase};

// ── PUT /beers/{id}/rating/ ──────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RatingRequest {
    pub rating: i64,
}

/// A body that is not `{"rating": <integer>}` is an invalid rating, not a
/// generic extractor error.
pub async fn rate_beer(
    identity: IdentityHeaders,
    Path(beer_id): Path<i32>,
    State(state): State<AppState>,
    body: Result<Json<RatingRequest>, JsonRejection>,
) -> Result<StatusCode, FestivalError> {
    let Json(body) = body.map_err(|_| FestivalError::InvalidRating)?;
    let usecase = RateBeerUseCase {
        beers: state.beer_repo(),
        relations: state.user_beer_repo(),
    };
    usecase
        .execute(identity.user_id, beer_id, body.rating)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── DELETE /beers/{id}/rating/ ───────────────────────────────────────────────

pub async fn clear_rating(
    identity: IdentityHeaders,
    Path(beer_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<StatusCode, FestivalError> {
    let usecase = ClearRatingUseCase {
        beers: state.beer_repo(),
        relations: state.user_beer_repo(),
    };
    usecase.execute(identity.user_id, beer_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
