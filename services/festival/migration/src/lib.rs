use sea_orm_migration::prelude::*;

mod m20260301_000001_create_users;
mod m20260301_000002_create_breweries;
mod m20260301_000003_create_bars;
mod m20260301_000004_create_beers;
mod m20260301_000005_create_user_beers;
mod m20260315_000006_rescale_beer_abv;

pub use m20260301_000005_create_user_beers::FK_USER_BEERS_BEER_ID;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_users::Migration),
            Box::new(m20260301_000002_create_breweries::Migration),
            Box::new(m20260301_000003_create_bars::Migration),
            Box::new(m20260301_000004_create_beers::Migration),
            Box::new(m20260301_000005_create_user_beers::Migration),
            Box::new(m20260315_000006_rescale_beer_abv::Migration),
        ]
    }
}
