use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Festival service error variants.
#[derive(Debug, thiserror::Error)]
pub enum FestivalError {
    #[error("beer not found")]
    BeerNotFound,
    #[error("bar not found")]
    BarNotFound,
    #[error("brewery not found")]
    BreweryNotFound,
    #[error("user not found")]
    UserNotFound,
    #[error("brewery already exists")]
    BreweryAlreadyExists,
    #[error("bar already exists")]
    BarAlreadyExists,
    #[error("beer already exists")]
    BeerAlreadyExists,
    #[error("user already exists")]
    UserAlreadyExists,
    #[error("rating must be an integer between 1 and 5")]
    InvalidRating,
    #[error("invalid abv: {0}")]
    InvalidAbv(#[from] beerfest_domain::abv::AbvError),
    #[error("invalid beer: {0}")]
    InvalidBeer(&'static str),
    #[error("missing data")]
    MissingData,
    #[error("forbidden")]
    Forbidden,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl FestivalError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::BeerNotFound => "BEER_NOT_FOUND",
            Self::BarNotFound => "BAR_NOT_FOUND",
            Self::BreweryNotFound => "BREWERY_NOT_FOUND",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::BreweryAlreadyExists => "BREWERY_ALREADY_EXISTS",
            Self::BarAlreadyExists => "BAR_ALREADY_EXISTS",
            Self::BeerAlreadyExists => "BEER_ALREADY_EXISTS",
            Self::UserAlreadyExists => "USER_ALREADY_EXISTS",
            Self::InvalidRating => "INVALID_RATING",
            Self::InvalidAbv(_) => "INVALID_ABV",
            Self::InvalidBeer(_) => "INVALID_BEER",
            Self::MissingData => "MISSING_DATA",
            Self::Forbidden => "FORBIDDEN",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for FestivalError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::BeerNotFound | Self::BarNotFound | Self::BreweryNotFound | Self::UserNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::BreweryAlreadyExists
            | Self::BarAlreadyExists
            | Self::BeerAlreadyExists
            | Self::UserAlreadyExists => StatusCode::CONFLICT,
            Self::InvalidRating | Self::InvalidAbv(_) | Self::InvalidBeer(_) | Self::MissingData => {
                StatusCode::BAD_REQUEST
            }
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Internal(ref e) = self {
            tracing::error!(error = ?e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
