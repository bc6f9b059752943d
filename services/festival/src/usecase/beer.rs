use rust_decimal::Decimal;
use uuid::Uuid;

use beerfest_domain::abv::Abv;

use crate::domain::repository::{BarRepository, BeerRepository, BreweryRepository, UserBeerRepository};
use crate::domain::types::{Beer, BeerDetail, BeerListing, BeerPatch, NewBeer};
use crate::error::FestivalError;

// ── ListBeers ────────────────────────────────────────────────────────────────

pub struct ListBeersUseCase<B: BeerRepository> {
    pub beers: B,
}

impl<B: BeerRepository> ListBeersUseCase<B> {
    pub async fn execute(&self, viewer: Option<Uuid>) -> Result<Vec<BeerListing>, FestivalError> {
        self.beers.list_annotated(viewer).await
    }
}

// ── GetBeer ──────────────────────────────────────────────────────────────────

pub struct GetBeerUseCase<B: BeerRepository, U: UserBeerRepository> {
    pub beers: B,
    pub relations: U,
}

impl<B: BeerRepository, U: UserBeerRepository> GetBeerUseCase<B, U> {
    pub async fn execute(
        &self,
        beer_id: i32,
        viewer: Option<Uuid>,
    ) -> Result<BeerDetail, FestivalError> {
        let listing = self
            .beers
            .find_annotated(beer_id, viewer)
            .await?
            .ok_or(FestivalError::BeerNotFound)?;
        let summary = self.relations.rating_summary(beer_id).await?;
        Ok(BeerDetail { listing, summary })
    }
}

// ── ListMyBeers ──────────────────────────────────────────────────────────────

pub struct ListMyBeersUseCase<B: BeerRepository> {
    pub beers: B,
}

impl<B: BeerRepository> ListMyBeersUseCase<B> {
    pub async fn execute(&self, user_id: Uuid) -> Result<Vec<BeerListing>, FestivalError> {
        self.beers.list_for_user(user_id).await
    }
}

// ── CreateBeer ───────────────────────────────────────────────────────────────

pub struct CreateBeerInput {
    pub name: String,
    pub brewery_id: i32,
    pub bar_id: i32,
    pub number: Option<i16>,
    pub reserved: bool,
    pub abv: Option<Decimal>,
    pub tasting_notes: String,
    pub notes: String,
}

pub struct CreateBeerUseCase<B: BeerRepository, W: BreweryRepository, R: BarRepository> {
    pub beers: B,
    pub breweries: W,
    pub bars: R,
}

impl<B: BeerRepository, W: BreweryRepository, R: BarRepository> CreateBeerUseCase<B, W, R> {
    pub async fn execute(&self, input: CreateBeerInput) -> Result<Beer, FestivalError> {
        let name = validate_name(input.name)?;
        validate_number(input.number)?;
        let abv = input.abv.map(Abv::new).transpose()?;

        if self.breweries.find_by_id(input.brewery_id).await?.is_none() {
            return Err(FestivalError::BreweryNotFound);
        }
        if self.bars.find_by_id(input.bar_id).await?.is_none() {
            return Err(FestivalError::BarNotFound);
        }

        let beer = self
            .beers
            .create(&NewBeer {
                name,
                brewery_id: input.brewery_id,
                bar_id: input.bar_id,
                number: input.number,
                reserved: input.reserved,
                abv,
                tasting_notes: input.tasting_notes,
                notes: input.notes,
            })
            .await?;
        tracing::info!(beer_id = beer.id, brewery_id = beer.brewery_id, "beer created");
        Ok(beer)
    }
}

// ── UpdateBeer ───────────────────────────────────────────────────────────────

/// Raw partial update. Nullable columns use `Option<Option<_>>` so an explicit
/// `null` clears them.
#[derive(Default)]
pub struct UpdateBeerInput {
    pub name: Option<String>,
    pub brewery_id: Option<i32>,
    pub bar_id: Option<i32>,
    pub number: Option<Option<i16>>,
    pub reserved: Option<bool>,
    pub abv: Option<Option<Decimal>>,
    pub tasting_notes: Option<String>,
    pub notes: Option<String>,
}

pub struct UpdateBeerUseCase<B: BeerRepository, W: BreweryRepository, R: BarRepository> {
    pub beers: B,
    pub breweries: W,
    pub bars: R,
}

impl<B: BeerRepository, W: BreweryRepository, R: BarRepository> UpdateBeerUseCase<B, W, R> {
    pub async fn execute(&self, beer_id: i32, input: UpdateBeerInput) -> Result<(), FestivalError> {
        let patch = BeerPatch {
            name: input.name.map(validate_name).transpose()?,
            brewery_id: input.brewery_id,
            bar_id: input.bar_id,
            number: input.number,
            reserved: input.reserved,
            abv: input
                .abv
                .map(|abv| abv.map(Abv::new).transpose())
                .transpose()?,
            tasting_notes: input.tasting_notes,
            notes: input.notes,
        };
        if patch.is_empty() {
            return Err(FestivalError::MissingData);
        }
        validate_number(patch.number.flatten())?;

        if let Some(brewery_id) = patch.brewery_id {
            if self.breweries.find_by_id(brewery_id).await?.is_none() {
                return Err(FestivalError::BreweryNotFound);
            }
        }
        if let Some(bar_id) = patch.bar_id {
            if self.bars.find_by_id(bar_id).await?.is_none() {
                return Err(FestivalError::BarNotFound);
            }
        }

        if !self.beers.update(beer_id, &patch).await? {
            return Err(FestivalError::BeerNotFound);
        }
        tracing::info!(beer_id, "beer updated");
        Ok(())
    }
}

// ── DeleteBeer ───────────────────────────────────────────────────────────────

pub struct DeleteBeerUseCase<B: BeerRepository> {
    pub beers: B,
}

impl<B: BeerRepository> DeleteBeerUseCase<B> {
    pub async fn execute(&self, beer_id: i32) -> Result<(), FestivalError> {
        if !self.beers.delete(beer_id).await? {
            return Err(FestivalError::BeerNotFound);
        }
        tracing::info!(beer_id, "beer deleted");
        Ok(())
    }
}

fn validate_name(name: String) -> Result<String, FestivalError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(FestivalError::InvalidBeer("name must not be empty"));
    }
    if trimmed.chars().count() > 200 {
        return Err(FestivalError::InvalidBeer("name must be at most 200 characters"));
    }
    Ok(trimmed.to_owned())
}

fn validate_number(number: Option<i16>) -> Result<(), FestivalError> {
    match number {
        Some(n) if n < 0 => Err(FestivalError::InvalidBeer("number must not be negative")),
        _ => Ok(()),
    }
}
