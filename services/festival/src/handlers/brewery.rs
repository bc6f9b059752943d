use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use beerfest_auth_types::IdentityHeaders;

use crate::domain::types::Brewery;
use crate::error::FestivalError;
use crate::handlers::require_staff;
use crate::state::AppState;
use crate::usecase::catalog::{
    CreateBreweryInput, CreateBreweryUseCase, GetBreweryUseCase, ListBreweriesUseCase,
};

#[derive(Serialize)]
pub struct BreweryResponse {
    pub id: i32,
    pub name: String,
    pub location: String,
}

impl From<Brewery> for BreweryResponse {
    fn from(brewery: Brewery) -> Self {
        Self {
            id: brewery.id,
            name: brewery.name,
            location: brewery.location,
        }
    }
}

// ── GET /breweries/ ──────────────────────────────────────────────────────────

pub async fn list_breweries(
    State(state): State<AppState>,
) -> Result<Json<Vec<BreweryResponse>>, FestivalError> {
    let usecase = ListBreweriesUseCase {
        repo: state.brewery_repo(),
    };
    let breweries = usecase.execute().await?;
    Ok(Json(
        breweries.into_iter().map(BreweryResponse::from).collect(),
    ))
}

// ── GET /breweries/{id}/ ─────────────────────────────────────────────────────

pub async fn get_brewery(
    Path(brewery_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<BreweryResponse>, FestivalError> {
    let usecase = GetBreweryUseCase {
        repo: state.brewery_repo(),
    };
    Ok(Json(usecase.execute(brewery_id).await?.into()))
}

// ── POST /breweries/ ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateBreweryRequest {
    pub name: String,
    #[serde(default)]
    pub location: String,
}

pub async fn create_brewery(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<CreateBreweryRequest>,
) -> Result<(StatusCode, Json<BreweryResponse>), FestivalError> {
    require_staff(&identity)?;
    let usecase = CreateBreweryUseCase {
        repo: state.brewery_repo(),
    };
    let brewery = usecase
        .execute(CreateBreweryInput {
            name: body.name,
            location: body.location,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(brewery.into())))
}
