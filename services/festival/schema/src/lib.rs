//! `sea-orm` entities for the festival service.

pub mod bars;
pub mod beers;
pub mod breweries;
pub mod user_beers;
pub mod users;
