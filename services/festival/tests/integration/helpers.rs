#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use beerfest_domain::rating::{Rating, RatingSummary};
use beerfest_festival::domain::repository::{
    BarRepository, BeerRepository, BreweryRepository, UserBeerRepository, UserRepository,
};
use beerfest_festival::domain::types::{
    Bar, Beer, BeerListing, BeerPatch, Brewery, NewBeer, User, UserBeerLinks, ViewerState,
};
use beerfest_festival::error::FestivalError;

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub fn test_user() -> User {
    User {
        id: Uuid::now_v7(),
        username: "taster".to_owned(),
        email: "taster@example.com".to_owned(),
        created_at: Utc::now(),
    }
}

pub fn test_beer(id: i32) -> Beer {
    Beer {
        id,
        name: format!("Beer {id}"),
        brewery_id: 1,
        bar_id: 1,
        number: Some(id as i16),
        reserved: false,
        abv: None,
        tasting_notes: String::new(),
        notes: String::new(),
    }
}

pub fn test_listing(id: i32) -> BeerListing {
    BeerListing {
        beer: test_beer(id),
        brewery_name: "Magic Rock".to_owned(),
        bar_name: "Main Bar".to_owned(),
        viewer: None,
    }
}

/// In-memory stand-in for a `user_beers` row.
#[derive(Debug, Clone)]
pub struct UserBeer {
    pub user_id: Uuid,
    pub beer_id: i32,
    pub starred: bool,
    pub tried: bool,
    pub rating: Option<Rating>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub type Relations = Arc<Mutex<Vec<UserBeer>>>;

pub fn relations() -> Relations {
    Arc::new(Mutex::new(vec![]))
}

// ── MockBeerRepo ─────────────────────────────────────────────────────────────

/// In-memory beers. Listings are annotated from the shared relation rows the
/// same way the lateral subquery does: at most one row per (user, beer).
pub struct MockBeerRepo {
    pub beers: Arc<Mutex<Vec<BeerListing>>>,
    pub relations: Relations,
}

impl MockBeerRepo {
    pub fn new(beers: Vec<BeerListing>, relations: Relations) -> Self {
        Self {
            beers: Arc::new(Mutex::new(beers)),
            relations,
        }
    }

    pub fn with_ids(ids: &[i32], relations: Relations) -> Self {
        Self::new(ids.iter().copied().map(test_listing).collect(), relations)
    }

    pub fn beers_handle(&self) -> Arc<Mutex<Vec<BeerListing>>> {
        Arc::clone(&self.beers)
    }

    fn annotate(&self, mut listing: BeerListing, viewer: Option<Uuid>) -> BeerListing {
        listing.viewer = viewer.map(|user_id| {
            let rows = self.relations.lock().unwrap();
            rows.iter()
                .find(|r| r.user_id == user_id && r.beer_id == listing.beer.id)
                .map(|r| ViewerState {
                    starred: r.starred,
                    tried: r.tried,
                    rating: r.rating,
                })
                .unwrap_or_default()
        });
        listing
    }
}

impl BeerRepository for MockBeerRepo {
    async fn list_annotated(
        &self,
        viewer: Option<Uuid>,
    ) -> Result<Vec<BeerListing>, FestivalError> {
        let beers = self.beers.lock().unwrap().clone();
        Ok(beers
            .into_iter()
            .map(|listing| self.annotate(listing, viewer))
            .collect())
    }

    async fn find_annotated(
        &self,
        id: i32,
        viewer: Option<Uuid>,
    ) -> Result<Option<BeerListing>, FestivalError> {
        let beer = self
            .beers
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.beer.id == id)
            .cloned();
        Ok(beer.map(|listing| self.annotate(listing, viewer)))
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<BeerListing>, FestivalError> {
        let all = self.list_annotated(Some(user_id)).await?;
        Ok(all
            .into_iter()
            .filter(|l| {
                l.viewer
                    .is_some_and(|v| v.starred || v.tried || v.rating.is_some())
            })
            .collect())
    }

    async fn exists(&self, id: i32) -> Result<bool, FestivalError> {
        Ok(self.beers.lock().unwrap().iter().any(|l| l.beer.id == id))
    }

    async fn create(&self, beer: &NewBeer) -> Result<Beer, FestivalError> {
        let mut beers = self.beers.lock().unwrap();
        if beers
            .iter()
            .any(|l| l.beer.brewery_id == beer.brewery_id && l.beer.name == beer.name)
        {
            return Err(FestivalError::BeerAlreadyExists);
        }
        let id = beers.iter().map(|l| l.beer.id).max().unwrap_or(0) + 1;
        let created = Beer {
            id,
            name: beer.name.clone(),
            brewery_id: beer.brewery_id,
            bar_id: beer.bar_id,
            number: beer.number,
            reserved: beer.reserved,
            abv: beer.abv,
            tasting_notes: beer.tasting_notes.clone(),
            notes: beer.notes.clone(),
        };
        beers.push(BeerListing {
            beer: created.clone(),
            brewery_name: String::new(),
            bar_name: String::new(),
            viewer: None,
        });
        Ok(created)
    }

    async fn update(&self, id: i32, patch: &BeerPatch) -> Result<bool, FestivalError> {
        let mut beers = self.beers.lock().unwrap();
        let Some(listing) = beers.iter_mut().find(|l| l.beer.id == id) else {
            return Ok(false);
        };
        let beer = &mut listing.beer;
        if let Some(name) = &patch.name {
            beer.name = name.clone();
        }
        if let Some(brewery_id) = patch.brewery_id {
            beer.brewery_id = brewery_id;
        }
        if let Some(bar_id) = patch.bar_id {
            beer.bar_id = bar_id;
        }
        if let Some(number) = patch.number {
            beer.number = number;
        }
        if let Some(reserved) = patch.reserved {
            beer.reserved = reserved;
        }
        if let Some(abv) = patch.abv {
            beer.abv = abv;
        }
        if let Some(tasting_notes) = &patch.tasting_notes {
            beer.tasting_notes = tasting_notes.clone();
        }
        if let Some(notes) = &patch.notes {
            beer.notes = notes.clone();
        }
        Ok(true)
    }

    async fn delete(&self, id: i32) -> Result<bool, FestivalError> {
        let mut beers = self.beers.lock().unwrap();
        let before = beers.len();
        beers.retain(|l| l.beer.id != id);
        let deleted = beers.len() < before;
        if deleted {
            self.relations.lock().unwrap().retain(|r| r.beer_id != id);
        }
        Ok(deleted)
    }
}

// ── MockUserBeerRepo ─────────────────────────────────────────────────────────

/// Keyed on (user, beer) like the composite primary key. `known_users`, when
/// set, simulates the foreign key to `users`.
pub struct MockUserBeerRepo {
    pub rows: Relations,
    pub known_users: Option<Vec<Uuid>>,
}

impl MockUserBeerRepo {
    pub fn new(rows: Relations) -> Self {
        Self {
            rows,
            known_users: None,
        }
    }

    pub fn with_known_users(rows: Relations, users: Vec<Uuid>) -> Self {
        Self {
            rows,
            known_users: Some(users),
        }
    }

    fn upsert(
        &self,
        user_id: Uuid,
        beer_id: i32,
        apply: impl FnOnce(&mut UserBeer),
    ) -> Result<(), FestivalError> {
        if let Some(users) = &self.known_users {
            if !users.contains(&user_id) {
                return Err(FestivalError::UserNotFound);
            }
        }
        let mut rows = self.rows.lock().unwrap();
        let now = Utc::now();
        match rows
            .iter_mut()
            .find(|r| r.user_id == user_id && r.beer_id == beer_id)
        {
            Some(row) => {
                apply(row);
                row.updated_at = now;
            }
            None => {
                let mut row = UserBeer {
                    user_id,
                    beer_id,
                    starred: false,
                    tried: false,
                    rating: None,
                    created_at: now,
                    updated_at: now,
                };
                apply(&mut row);
                rows.push(row);
            }
        }
        Ok(())
    }
}

impl UserBeerRepository for MockUserBeerRepo {
    async fn set_starred(
        &self,
        user_id: Uuid,
        beer_id: i32,
        starred: bool,
    ) -> Result<(), FestivalError> {
        self.upsert(user_id, beer_id, |row| row.starred = starred)
    }

    async fn set_tried(
        &self,
        user_id: Uuid,
        beer_id: i32,
        tried: bool,
    ) -> Result<(), FestivalError> {
        self.upsert(user_id, beer_id, |row| row.tried = tried)
    }

    async fn set_rating(
        &self,
        user_id: Uuid,
        beer_id: i32,
        rating: Rating,
    ) -> Result<(), FestivalError> {
        self.upsert(user_id, beer_id, |row| row.rating = Some(rating))
    }

    async fn clear_rating(&self, user_id: Uuid, beer_id: i32) -> Result<(), FestivalError> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(row) = rows
            .iter_mut()
            .find(|r| r.user_id == user_id && r.beer_id == beer_id)
        {
            row.rating = None;
        }
        Ok(())
    }

    async fn is_starred(&self, user_id: Uuid, beer_id: i32) -> Result<bool, FestivalError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .any(|r| r.user_id == user_id && r.beer_id == beer_id && r.starred))
    }

    async fn rating_summary(&self, beer_id: i32) -> Result<RatingSummary, FestivalError> {
        let rows = self.rows.lock().unwrap();
        Ok(RatingSummary::from_rows(
            rows.iter()
                .filter(|r| r.beer_id == beer_id)
                .map(|r| (r.starred, r.rating)),
        ))
    }

    async fn links_for_user(&self, user_id: Uuid) -> Result<UserBeerLinks, FestivalError> {
        let mut rows: Vec<UserBeer> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by_key(|r| r.beer_id);
        Ok(UserBeerLinks {
            starred: rows.iter().filter(|r| r.starred).map(|r| r.beer_id).collect(),
            rated: rows
                .iter()
                .filter(|r| r.rating.is_some())
                .map(|r| r.beer_id)
                .collect(),
        })
    }
}

// ── MockUserRepo ─────────────────────────────────────────────────────────────

pub struct MockUserRepo {
    pub users: Arc<Mutex<Vec<User>>>,
}

impl MockUserRepo {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn users_handle(&self) -> Arc<Mutex<Vec<User>>> {
        Arc::clone(&self.users)
    }
}

impl UserRepository for MockUserRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, FestivalError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn create(&self, user: &User) -> Result<(), FestivalError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.username == user.username) {
            return Err(FestivalError::UserAlreadyExists);
        }
        users.push(user.clone());
        Ok(())
    }
}

// ── MockBreweryRepo / MockBarRepo ────────────────────────────────────────────

pub struct MockBreweryRepo {
    pub breweries: Arc<Mutex<Vec<Brewery>>>,
}

impl MockBreweryRepo {
    pub fn new(breweries: Vec<Brewery>) -> Self {
        Self {
            breweries: Arc::new(Mutex::new(breweries)),
        }
    }

    pub fn with_ids(ids: &[i32]) -> Self {
        Self::new(
            ids.iter()
                .map(|&id| Brewery {
                    id,
                    name: format!("Brewery {id}"),
                    location: String::new(),
                })
                .collect(),
        )
    }
}

impl BreweryRepository for MockBreweryRepo {
    async fn list(&self) -> Result<Vec<Brewery>, FestivalError> {
        Ok(self.breweries.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Brewery>, FestivalError> {
        Ok(self
            .breweries
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.id == id)
            .cloned())
    }

    async fn create(&self, name: &str, location: &str) -> Result<Brewery, FestivalError> {
        let mut breweries = self.breweries.lock().unwrap();
        if breweries.iter().any(|b| b.name == name) {
            return Err(FestivalError::BreweryAlreadyExists);
        }
        let brewery = Brewery {
            id: breweries.iter().map(|b| b.id).max().unwrap_or(0) + 1,
            name: name.to_owned(),
            location: location.to_owned(),
        };
        breweries.push(brewery.clone());
        Ok(brewery)
    }
}

pub struct MockBarRepo {
    pub bars: Arc<Mutex<Vec<Bar>>>,
}

impl MockBarRepo {
    pub fn with_ids(ids: &[i32]) -> Self {
        Self {
            bars: Arc::new(Mutex::new(
                ids.iter()
                    .map(|&id| Bar {
                        id,
                        name: format!("Bar {id}"),
                    })
                    .collect(),
            )),
        }
    }
}

impl BarRepository for MockBarRepo {
    async fn list(&self) -> Result<Vec<Bar>, FestivalError> {
        Ok(self.bars.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Bar>, FestivalError> {
        Ok(self.bars.lock().unwrap().iter().find(|b| b.id == id).cloned())
    }

    async fn create(&self, name: &str) -> Result<Bar, FestivalError> {
        let mut bars = self.bars.lock().unwrap();
        if bars.iter().any(|b| b.name == name) {
            return Err(FestivalError::BarAlreadyExists);
        }
        let bar = Bar {
            id: bars.iter().map(|b| b.id).max().unwrap_or(0) + 1,
            name: name.to_owned(),
        };
        bars.push(bar.clone());
        Ok(bar)
    }
}
