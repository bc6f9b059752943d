use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use beerfest_domain::abv::Abv;
use beerfest_domain::rating::{Rating, RatingSummary};

/// Festival account. Identity itself comes from the gateway headers.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Brewery {
    pub id: i32,
    pub name: String,
    pub location: String,
}

impl fmt::Display for Brewery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bar {
    pub id: i32,
    pub name: String,
}

impl fmt::Display for Bar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Beer {
    pub id: i32,
    pub name: String,
    pub brewery_id: i32,
    pub bar_id: i32,
    pub number: Option<i16>,
    pub reserved: bool,
    pub abv: Option<Abv>,
    pub tasting_notes: String,
    pub notes: String,
}

/// The caller's own relation to a beer. Absent row means all defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewerState {
    pub starred: bool,
    pub tried: bool,
    pub rating: Option<Rating>,
}

/// A beer joined with its brewery and bar names, annotated with the
/// caller's state. `viewer` is `None` for anonymous callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeerListing {
    pub beer: Beer,
    pub brewery_name: String,
    pub bar_name: String,
    pub viewer: Option<ViewerState>,
}

impl fmt::Display for BeerListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.beer.name, self.brewery_name)
    }
}

/// Beer detail: the annotated listing plus every user's aggregate.
#[derive(Debug, Clone)]
pub struct BeerDetail {
    pub listing: BeerListing,
    pub summary: RatingSummary,
}

/// Beers a user has starred or rated, by id, ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserBeerLinks {
    pub starred: Vec<i32>,
    pub rated: Vec<i32>,
}

/// Which way a star mutation goes. Fixed per route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarMode {
    Star,
    Unstar,
}

impl StarMode {
    pub fn starred(self) -> bool {
        matches!(self, Self::Star)
    }
}

/// Validated input for creating a beer.
#[derive(Debug, Clone)]
pub struct NewBeer {
    pub name: String,
    pub brewery_id: i32,
    pub bar_id: i32,
    pub number: Option<i16>,
    pub reserved: bool,
    pub abv: Option<Abv>,
    pub tasting_notes: String,
    pub notes: String,
}

/// Validated partial update. Nullable columns use `Option<Option<_>>`:
/// outer `None` leaves the column alone, `Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct BeerPatch {
    pub name: Option<String>,
    pub brewery_id: Option<i32>,
    pub bar_id: Option<i32>,
    pub number: Option<Option<i16>>,
    pub reserved: Option<bool>,
    pub abv: Option<Option<Abv>>,
    pub tasting_notes: Option<String>,
    pub notes: Option<String>,
}

impl BeerPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.brewery_id.is_none()
            && self.bar_id.is_none()
            && self.number.is_none()
            && self.reserved.is_none()
            && self.abv.is_none()
            && self.tasting_notes.is_none()
            && self.notes.is_none()
    }
}
