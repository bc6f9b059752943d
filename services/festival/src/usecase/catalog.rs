use crate::domain::repository::{BarRepository, BreweryRepository};
use crate::domain::types::{Bar, Brewery};
use crate::error::FestivalError;

const MAX_NAME_LEN: usize = 200;

fn validate_name(name: &str) -> Result<&str, FestivalError> {
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed.chars().count() > MAX_NAME_LEN {
        return Err(FestivalError::MissingData);
    }
    Ok(trimmed)
}

// ── Breweries ────────────────────────────────────────────────────────────────

pub struct ListBreweriesUseCase<R: BreweryRepository> {
    pub repo: R,
}

impl<R: BreweryRepository> ListBreweriesUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Brewery>, FestivalError> {
        self.repo.list().await
    }
}

pub struct GetBreweryUseCase<R: BreweryRepository> {
    pub repo: R,
}

impl<R: BreweryRepository> GetBreweryUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<Brewery, FestivalError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(FestivalError::BreweryNotFound)
    }
}

pub struct CreateBreweryInput {
    pub name: String,
    pub location: String,
}

pub struct CreateBreweryUseCase<R: BreweryRepository> {
    pub repo: R,
}

impl<R: BreweryRepository> CreateBreweryUseCase<R> {
    pub async fn execute(&self, input: CreateBreweryInput) -> Result<Brewery, FestivalError> {
        let name = validate_name(&input.name)?;
        let brewery = self.repo.create(name, input.location.trim()).await?;
        tracing::info!(brewery_id = brewery.id, "brewery created");
        Ok(brewery)
    }
}

// ── Bars ─────────────────────────────────────────────────────────────────────

pub struct ListBarsUseCase<R: BarRepository> {
    pub repo: R,
}

impl<R: BarRepository> ListBarsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Bar>, FestivalError> {
        self.repo.list().await
    }
}

pub struct GetBarUseCase<R: BarRepository> {
    pub repo: R,
}

impl<R: BarRepository> GetBarUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<Bar, FestivalError> {
        self.repo.find_by_id(id).await?.ok_or(FestivalError::BarNotFound)
    }
}

pub struct CreateBarUseCase<R: BarRepository> {
    pub repo: R,
}

impl<R: BarRepository> CreateBarUseCase<R> {
    pub async fn execute(&self, name: String) -> Result<Bar, FestivalError> {
        let bar = self.repo.create(validate_name(&name)?).await?;
        tracing::info!(bar_id = bar.id, "bar created");
        Ok(bar)
    }
}
