use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use beerfest_auth_types::IdentityHeaders;
use beerfest_domain::abv::Abv;
use beerfest_domain::rating::Rating;

use crate::domain::types::{Beer, BeerDetail, BeerListing, ViewerState};
use crate::error::FestivalError;
use crate::handlers::require_staff;
use crate::presentation::filters;
use crate::presentation::table::{BeerTable, BeerTableRow, beer_url};
use crate::state::AppState;
use crate::usecase::beer::{
    CreateBeerInput, CreateBeerUseCase, DeleteBeerUseCase, GetBeerUseCase, ListBeersUseCase,
    UpdateBeerInput, UpdateBeerUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

/// A beer row as stored.
#[derive(Serialize)]
pub struct BeerResponse {
    pub id: i32,
    pub url: String,
    pub name: String,
    pub brewery_id: i32,
    pub bar_id: i32,
    pub number: Option<i16>,
    pub reserved: bool,
    pub abv: Option<Abv>,
    pub tasting_notes: String,
    pub notes: String,
}

impl From<Beer> for BeerResponse {
    fn from(beer: Beer) -> Self {
        Self {
            id: beer.id,
            url: beer_url(beer.id),
            name: beer.name,
            brewery_id: beer.brewery_id,
            bar_id: beer.bar_id,
            number: beer.number,
            reserved: beer.reserved,
            abv: beer.abv,
            tasting_notes: beer.tasting_notes,
            notes: beer.notes,
        }
    }
}

#[derive(Serialize)]
pub struct ViewerResponse {
    pub starred: bool,
    pub tried: bool,
    pub rating: Option<Rating>,
}

impl From<ViewerState> for ViewerResponse {
    fn from(viewer: ViewerState) -> Self {
        Self {
            starred: viewer.starred,
            tried: viewer.tried,
            rating: viewer.rating,
        }
    }
}

/// A beer with brewery/bar names and, for signed-in callers, their state.
#[derive(Serialize)]
pub struct BeerListingResponse {
    pub display: String,
    pub brewery: String,
    pub bar: String,
    pub abv_display: String,
    #[serde(flatten)]
    pub beer: BeerResponse,
    #[serde(flatten)]
    pub viewer: Option<ViewerResponse>,
}

impl From<BeerListing> for BeerListingResponse {
    fn from(listing: BeerListing) -> Self {
        Self {
            display: listing.to_string(),
            abv_display: filters::abv(listing.beer.abv.as_ref()),
            brewery: listing.brewery_name,
            bar: listing.bar_name,
            viewer: listing.viewer.map(ViewerResponse::from),
            beer: BeerResponse::from(listing.beer),
        }
    }
}

#[derive(Serialize)]
pub struct BeerDetailResponse {
    #[serde(flatten)]
    pub listing: BeerListingResponse,
    pub star_count: u64,
    pub rating_count: u64,
    pub average_rating: Option<f64>,
    pub average_rating_display: String,
}

impl From<BeerDetail> for BeerDetailResponse {
    fn from(detail: BeerDetail) -> Self {
        let average = detail.summary.average();
        Self {
            listing: BeerListingResponse::from(detail.listing),
            star_count: detail.summary.star_count,
            rating_count: detail.summary.rating_count,
            average_rating: average,
            average_rating_display: filters::average_rating(average),
        }
    }
}

#[derive(Serialize)]
pub struct BeerListResponse {
    pub show_stars: bool,
    pub show_ratings: bool,
    pub beers: Vec<BeerTableRow>,
}

// ── GET /beers/ ──────────────────────────────────────────────────────────────

pub async fn list_beers(
    identity: Option<IdentityHeaders>,
    State(state): State<AppState>,
) -> Result<Json<BeerListResponse>, FestivalError> {
    let viewer = identity.map(|identity| identity.user_id);
    let usecase = ListBeersUseCase {
        beers: state.beer_repo(),
    };
    let listings = usecase.execute(viewer).await?;
    let table = if viewer.is_some() {
        BeerTable::with_stars_and_ratings()
    } else {
        BeerTable::plain()
    };
    Ok(Json(BeerListResponse {
        show_stars: table.show_stars,
        show_ratings: table.show_ratings,
        beers: table.rows(&listings),
    }))
}

// ── GET /beers/{id}/ ─────────────────────────────────────────────────────────

pub async fn get_beer(
    identity: Option<IdentityHeaders>,
    Path(beer_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<BeerDetailResponse>, FestivalError> {
    let usecase = GetBeerUseCase {
        beers: state.beer_repo(),
        relations: state.user_beer_repo(),
    };
    let detail = usecase
        .execute(beer_id, identity.map(|identity| identity.user_id))
        .await?;
    Ok(Json(BeerDetailResponse::from(detail)))
}

// ── POST /beers/ ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateBeerRequest {
    pub name: String,
    pub brewery_id: i32,
    pub bar_id: i32,
    pub number: Option<i16>,
    #[serde(default)]
    pub reserved: bool,
    pub abv: Option<Decimal>,
    #[serde(default)]
    pub tasting_notes: String,
    #[serde(default)]
    pub notes: String,
}

pub async fn create_beer(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<CreateBeerRequest>,
) -> Result<(StatusCode, Json<BeerResponse>), FestivalError> {
    require_staff(&identity)?;
    let usecase = CreateBeerUseCase {
        beers: state.beer_repo(),
        breweries: state.brewery_repo(),
        bars: state.bar_repo(),
    };
    let beer = usecase
        .execute(CreateBeerInput {
            name: body.name,
            brewery_id: body.brewery_id,
            bar_id: body.bar_id,
            number: body.number,
            reserved: body.reserved,
            abv: body.abv,
            tasting_notes: body.tasting_notes,
            notes: body.notes,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(BeerResponse::from(beer))))
}

// ── PATCH /beers/{id}/ ───────────────────────────────────────────────────────

/// Present-but-null becomes `Some(None)`; absent stays `None` via `default`.
fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Deserialize, Default)]
pub struct UpdateBeerRequest {
    pub name: Option<String>,
    pub brewery_id: Option<i32>,
    pub bar_id: Option<i32>,
    #[serde(default, deserialize_with = "nullable")]
    pub number: Option<Option<i16>>,
    pub reserved: Option<bool>,
    #[serde(default, deserialize_with = "nullable")]
    pub abv: Option<Option<Decimal>>,
    pub tasting_notes: Option<String>,
    pub notes: Option<String>,
}

pub async fn update_beer(
    identity: IdentityHeaders,
    Path(beer_id): Path<i32>,
    State(state): State<AppState>,
    Json(body): Json<UpdateBeerRequest>,
) -> Result<StatusCode, FestivalError> {
    require_staff(&identity)?;
    let usecase = UpdateBeerUseCase {
        beers: state.beer_repo(),
        breweries: state.brewery_repo(),
        bars: state.bar_repo(),
    };
    usecase
        .execute(
            beer_id,
            UpdateBeerInput {
                name: body.name,
                brewery_id: body.brewery_id,
                bar_id: body.bar_id,
                number: body.number,
                reserved: body.reserved,
                abv: body.abv,
                tasting_notes: body.tasting_notes,
                notes: body.notes,
            },
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── DELETE /beers/{id}/ ──────────────────────────────────────────────────────

pub async fn delete_beer(
    identity: IdentityHeaders,
    Path(beer_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<StatusCode, FestivalError> {
    require_staff(&identity)?;
    let usecase = DeleteBeerUseCase {
        beers: state.beer_repo(),
    };
    usecase.execute(beer_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
