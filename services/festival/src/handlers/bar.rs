use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use beerfest_auth_types::IdentityHeaders;

use crate::domain::types::Bar;
use crate::error::FestivalError;
use crate::handlers::require_staff;
use crate::state::AppState;
use crate::usecase::catalog::{CreateBarUseCase, GetBarUseCase, ListBarsUseCase};

#[derive(Serialize)]
pub struct BarResponse {
    pub id: i32,
    pub name: String,
}

impl From<Bar> for BarResponse {
    fn from(bar: Bar) -> Self {
        Self {
            id: bar.id,
            name: bar.name,
        }
    }
}

// ── GET /bars/ ───────────────────────────────────────────────────────────────

pub async fn list_bars(
    State(state): State<AppState>,
) -> Result<Json<Vec<BarResponse>>, FestivalError> {
    let usecase = ListBarsUseCase {
        repo: state.bar_repo(),
    };
    let bars = usecase.execute().await?;
    Ok(Json(bars.into_iter().map(BarResponse::from).collect()))
}

// ── GET /bars/{id}/ ──────────────────────────────────────────────────────────

pub async fn get_bar(
    Path(bar_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<BarResponse>, FestivalError> {
    let usecase = GetBarUseCase {
        repo: state.bar_repo(),
    };
    Ok(Json(usecase.execute(bar_id).await?.into()))
}

// ── POST /bars/ ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateBarRequest {
    pub name: String,
}

pub async fn create_bar(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<CreateBarRequest>,
) -> Result<(StatusCode, Json<BarResponse>), FestivalError> {
    require_staff(&identity)?;
    let usecase = CreateBarUseCase {
        repo: state.bar_repo(),
    };
    let bar = usecase.execute(body.name).await?;
    Ok((StatusCode::CREATED, Json(bar.into())))
}
