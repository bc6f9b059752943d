use serde::Serialize;

use crate::domain::types::BeerListing;
use crate::presentation::filters;

/// Beer table view-model. Star and rating columns are switched on per page.
#[derive(Debug, Clone, Copy, Default)]
pub struct BeerTable {
    pub show_stars: bool,
    pub show_ratings: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BeerTableRow {
    pub id: i32,
    pub url: String,
    pub number: String,
    pub name: String,
    pub brewery: String,
    pub bar: String,
    pub abv: String,
    pub reserved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starred: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
}

impl BeerTable {
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn with_stars_and_ratings() -> Self {
        Self {
            show_stars: true,
            show_ratings: true,
        }
    }

    pub fn rows(&self, listings: &[BeerListing]) -> Vec<BeerTableRow> {
        listings.iter().map(|listing| self.row(listing)).collect()
    }

    fn row(&self, listing: &BeerListing) -> BeerTableRow {
        let viewer = listing.viewer.unwrap_or_default();
        BeerTableRow {
            id: listing.beer.id,
            url: beer_url(listing.beer.id),
            number: filters::nullable_number(listing.beer.number),
            name: listing.beer.name.clone(),
            brewery: listing.brewery_name.clone(),
            bar: listing.bar_name.clone(),
            abv: filters::abv(listing.beer.abv.as_ref()),
            reserved: listing.beer.reserved,
            starred: self.show_stars.then_some(viewer.starred),
            rating: self.show_ratings.then(|| filters::rating(viewer.rating)),
        }
    }
}

pub fn beer_url(id: i32) -> String {
    format!("/beers/{id}/")
}
