use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use beerfest_auth_types::IdentityHeaders;

use crate::domain::types::{User, UserBeerLinks};
use crate::error::FestivalError;
use crate::handlers::beer::BeerListingResponse;
use crate::handlers::require_staff;
use crate::presentation::table::beer_url;
use crate::state::AppState;
use crate::usecase::beer::ListMyBeersUseCase;
use crate::usecase::user::{CreateUserInput, CreateUserUseCase, GetMeUseCase};

#[derive(Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(serialize_with = "beerfest_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub starred_beers: Vec<String>,
    pub rated_beers: Vec<String>,
}

impl UserResponse {
    fn new(user: User, links: UserBeerLinks) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username,
            email: user.email,
            created_at: user.created_at,
            starred_beers: links.starred.into_iter().map(beer_url).collect(),
            rated_beers: links.rated.into_iter().map(beer_url).collect(),
        }
    }
}

// ── POST /users ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub id: Option<Uuid>,
    pub username: String,
    #[serde(default)]
    pub email: String,
}

pub async fn create_user(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), FestivalError> {
    require_staff(&identity)?;
    let usecase = CreateUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase
        .execute(CreateUserInput {
            id: body.id,
            username: body.username,
            email: body.email,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(UserResponse::new(user, UserBeerLinks::default())),
    ))
}

// ── GET /users/@me ───────────────────────────────────────────────────────────

pub async fn get_me(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, FestivalError> {
    let usecase = GetMeUseCase {
        users: state.user_repo(),
        relations: state.user_beer_repo(),
    };
    let (user, links) = usecase.execute(identity.user_id).await?;
    Ok(Json(UserResponse::new(user, links)))
}

// ── GET /users/@me/beers ─────────────────────────────────────────────────────

pub async fn get_my_beers(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<Vec<BeerListingResponse>>, FestivalError> {
    let usecase = ListMyBeersUseCase {
        beers: state.beer_repo(),
    };
    let listings = usecase.execute(identity.user_id).await?;
    Ok(Json(
        listings.into_iter().map(BeerListingResponse::from).collect(),
    ))
}
