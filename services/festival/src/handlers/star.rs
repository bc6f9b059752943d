use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;

use beerfest_auth_types::IdentityHeaders;

use crate::domain::types::StarMode;
use crate::error::FestivalError;
use crate::state::AppState;
use crate::usecase::star::{IsStarredUseCase, SetStarUseCase, SetTriedUseCase};

async fn set_star(
    identity: IdentityHeaders,
    beer_id: i32,
    state: AppState,
    mode: StarMode,
) -> Result<StatusCode, FestivalError> {
    let usecase = SetStarUseCase {
        beers: state.beer_repo(),
        relations: state.user_beer_repo(),
    };
    usecase.execute(identity.user_id, beer_id, mode).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn set_tried(
    identity: IdentityHeaders,
    beer_id: i32,
    state: AppState,
    tried: bool,
) -> Result<StatusCode, FestivalError> {
    let usecase = SetTriedUseCase {
        beers: state.beer_repo(),
        relations: state.user_beer_repo(),
    };
    usecase.execute(identity.user_id, beer_id, tried).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /beers/{id}/star/ ────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct StarResponse {
    pub starred: bool,
}

pub async fn get_star(
    identity: Option<IdentityHeaders>,
    Path(beer_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<StarResponse>, FestivalError> {
    let usecase = IsStarredUseCase {
        beers: state.beer_repo(),
        relations: state.user_beer_repo(),
    };
    let starred = usecase
        .execute(identity.map(|identity| identity.user_id), beer_id)
        .await?;
    Ok(Json(StarResponse { starred }))
}

// ── POST|PUT /beers/{id}/star/ ───────────────────────────────────────────────

pub async fn star_beer(
    identity: IdentityHeaders,
    Path(beer_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<StatusCode, FestivalError> {
    set_star(identity, beer_id, state, StarMode::Star).await
}

// ── DELETE /beers/{id}/star/, POST|DELETE /beers/{id}/unstar/ ────────────────

pub async fn unstar_beer(
    identity: IdentityHeaders,
    Path(beer_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<StatusCode, FestivalError> {
    set_star(identity, beer_id, state, StarMode::Unstar).await
}

// ── POST|PUT|DELETE /beers/{id}/tried/ ───────────────────────────────────────

pub async fn mark_tried(
    identity: IdentityHeaders,
    Path(beer_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<StatusCode, FestivalError> {
    set_tried(identity, beer_id, state, true).await
}

pub async fn unmark_tried(
    identity: IdentityHeaders,
    Path(beer_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<StatusCode, FestivalError> {
    set_tried(identity, beer_id, state, false).await
}
