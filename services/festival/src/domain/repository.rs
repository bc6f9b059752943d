#![allow(async_fn_in_trait)]

use uuid::Uuid;

use beerfest_domain::rating::{Rating, RatingSummary};

use crate::domain::types::{
    Bar, Beer, BeerListing, BeerPatch, Brewery, NewBeer, User, UserBeerLinks,
};
use crate::error::FestivalError;

/// Repository for festival accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, FestivalError>;
    /// Fails with `UserAlreadyExists` on a duplicate username.
    async fn create(&self, user: &User) -> Result<(), FestivalError>;
}

pub trait BreweryRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Brewery>, FestivalError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Brewery>, FestivalError>;
    /// Fails with `BreweryAlreadyExists` on a duplicate name.
    async fn create(&self, name: &str, location: &str) -> Result<Brewery, FestivalError>;
}

pub trait BarRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Bar>, FestivalError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Bar>, FestivalError>;
    /// Fails with `BarAlreadyExists` on a duplicate name.
    async fn create(&self, name: &str) -> Result<Bar, FestivalError>;
}

/// Repository for beers and the annotated beer listing.
///
/// Every listing method attaches the viewer's state through one correlated
/// subquery, so a beer appears at most once regardless of relation rows.
pub trait BeerRepository: Send + Sync {
    /// All beers ordered by id.
    async fn list_annotated(
        &self,
        viewer: Option<Uuid>,
    ) -> Result<Vec<BeerListing>, FestivalError>;

    async fn find_annotated(
        &self,
        id: i32,
        viewer: Option<Uuid>,
    ) -> Result<Option<BeerListing>, FestivalError>;

    /// Beers the user has starred, tried or rated.
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<BeerListing>, FestivalError>;

    async fn exists(&self, id: i32) -> Result<bool, FestivalError>;

    /// Fails with `BeerAlreadyExists` on a duplicate `(brewery, name)`.
    async fn create(&self, beer: &NewBeer) -> Result<Beer, FestivalError>;

    /// Returns `false` if no beer has this id.
    async fn update(&self, id: i32, patch: &BeerPatch) -> Result<bool, FestivalError>;

    /// Delete a beer and, by cascade, its relation rows. Returns `true` if a
    /// row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, FestivalError>;
}

/// Repository for per-(user, beer) relation rows.
///
/// Each write is one upsert on the `(user_id, beer_id)` key; an unknown user
/// surfaces as `UserNotFound`.
pub trait UserBeerRepository: Send + Sync {
    async fn set_starred(
        &self,
        user_id: Uuid,
        beer_id: i32,
        starred: bool,
    ) -> Result<(), FestivalError>;

    async fn set_tried(&self, user_id: Uuid, beer_id: i32, tried: bool)
    -> Result<(), FestivalError>;

    async fn set_rating(
        &self,
        user_id: Uuid,
        beer_id: i32,
        rating: Rating,
    ) -> Result<(), FestivalError>;

    /// Null out the rating of an existing row. No row, no write.
    async fn clear_rating(&self, user_id: Uuid, beer_id: i32) -> Result<(), FestivalError>;

    async fn is_starred(&self, user_id: Uuid, beer_id: i32) -> Result<bool, FestivalError>;

    async fn rating_summary(&self, beer_id: i32) -> Result<RatingSummary, FestivalError>;

    async fn links_for_user(&self, user_id: Uuid) -> Result<UserBeerLinks, FestivalError>;
}
