//! Rescale `beers.abv` from a tenths-of-a-percent `smallint` to a
//! `numeric(3,1)` percentage (`45` becomes `4.5`).

use beerfest_domain::abv::Abv;
use rust_decimal::Decimal;
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{ConnectionTrait, Statement};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        let rows = db
            .query_all(Statement::from_string(
                manager.get_database_backend(),
                "SELECT abv FROM beers WHERE abv IS NOT NULL",
            ))
            .await?;
        let legacy = rows
            .iter()
            .map(|row| row.try_get::<i16>("", "abv"))
            .collect::<Result<Vec<_>, _>>()?;
        check_legacy_values(legacy)?;

        db.execute_unprepared(
            "ALTER TABLE beers ALTER COLUMN abv TYPE numeric(3,1) USING (abv::numeric / 10)",
        )
        .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        let rows = db
            .query_all(Statement::from_string(
                manager.get_database_backend(),
                "SELECT abv FROM beers WHERE abv IS NOT NULL",
            ))
            .await?;
        let current = rows
            .iter()
            .map(|row| row.try_get::<Decimal>("", "abv"))
            .collect::<Result<Vec<_>, _>>()?;
        to_legacy_values(current)?;

        db.execute_unprepared(
            "ALTER TABLE beers ALTER COLUMN abv TYPE smallint USING (abv * 10)::smallint",
        )
        .await?;
        Ok(())
    }
}

/// Fails on the first value that would rescale to 100% or more, before any
/// column is altered.
fn check_legacy_values<I>(values: I) -> Result<(), DbErr>
where
    I: IntoIterator<Item = i16>,
{
    for tenths in values {
        Abv::from_legacy_tenths(i64::from(tenths))
            .map_err(|e| DbErr::Migration(e.to_string()))?;
    }
    Ok(())
}

/// Tenths for each stored percentage; fails on any value that would not
/// survive the trip back to `smallint` unchanged.
fn to_legacy_values<I>(values: I) -> Result<Vec<i64>, DbErr>
where
    I: IntoIterator<Item = Decimal>,
{
    values
        .into_iter()
        .map(|value| {
            Abv::new(value)
                .map(|abv| abv.to_legacy_tenths())
                .map_err(|e| DbErr::Migration(format!("cannot restore abv {value}: {e}")))
        })
        .collect()
}
