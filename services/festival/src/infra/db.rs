use anyhow::Context as _;
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, ConnectionTrait,
    DatabaseConnection, DbErr, EntityTrait, FromQueryResult, PaginatorTrait, QueryFilter,
    QueryOrder, Statement, Value,
    sea_query::{Expr, OnConflict},
};
use uuid::Uuid;

use beerfest_core::sea_ext::DbErrExt as _;
use beerfest_domain::abv::Abv;
use beerfest_domain::rating::{Rating, RatingSummary};
use beerfest_festival_migration::FK_USER_BEERS_BEER_ID;
use beerfest_festival_schema::{bars, beers, breweries, user_beers, users};

use crate::domain::repository::{
    BarRepository, BeerRepository, BreweryRepository, UserBeerRepository, UserRepository,
};
use crate::domain::types::{
    Bar, Beer, BeerListing, BeerPatch, Brewery, NewBeer, User, UserBeerLinks, ViewerState,
};
use crate::error::FestivalError;

/// Unique-key violations become `conflict`; anything else is internal.
fn unique_or_internal(err: DbErr, conflict: FestivalError, context: &'static str) -> FestivalError {
    if err.is_unique_violation() {
        conflict
    } else {
        anyhow::Error::new(err).context(context).into()
    }
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, FestivalError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, user: &User) -> Result<(), FestivalError> {
        users::ActiveModel {
            id: Set(user.id),
            username: Set(user.username.clone()),
            email: Set(user.email.clone()),
            created_at: Set(user.created_at),
        }
        .insert(&self.db)
        .await
        .map_err(|e| unique_or_internal(e, FestivalError::UserAlreadyExists, "create user"))?;
        Ok(())
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        username: model.username,
        email: model.email,
        created_at: model.created_at,
    }
}

// ── Brewery repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbBreweryRepository {
    pub db: DatabaseConnection,
}

impl BreweryRepository for DbBreweryRepository {
    async fn list(&self) -> Result<Vec<Brewery>, FestivalError> {
        let models = breweries::Entity::find()
            .order_by_asc(breweries::Column::Id)
            .all(&self.db)
            .await
            .context("list breweries")?;
        Ok(models.into_iter().map(brewery_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Brewery>, FestivalError> {
        let model = breweries::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find brewery by id")?;
        Ok(model.map(brewery_from_model))
    }

    async fn create(&self, name: &str, location: &str) -> Result<Brewery, FestivalError> {
        let model = breweries::ActiveModel {
            name: Set(name.to_owned()),
            location: Set(location.to_owned()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| {
            unique_or_internal(e, FestivalError::BreweryAlreadyExists, "create brewery")
        })?;
        Ok(brewery_from_model(model))
    }
}

fn brewery_from_model(model: breweries::Model) -> Brewery {
    Brewery {
        id: model.id,
        name: model.name,
        location: model.location,
    }
}

// ── Bar repository ───────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbBarRepository {
    pub db: DatabaseConnection,
}

impl BarRepository for DbBarRepository {
    async fn list(&self) -> Result<Vec<Bar>, FestivalError> {
        let models = bars::Entity::find()
            .order_by_asc(bars::Column::Id)
            .all(&self.db)
            .await
            .context("list bars")?;
        Ok(models.into_iter().map(bar_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Bar>, FestivalError> {
        let model = bars::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find bar by id")?;
        Ok(model.map(bar_from_model))
    }

    async fn create(&self, name: &str) -> Result<Bar, FestivalError> {
        let model = bars::ActiveModel {
            name: Set(name.to_owned()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| unique_or_internal(e, FestivalError::BarAlreadyExists, "create bar"))?;
        Ok(bar_from_model(model))
    }
}

fn bar_from_model(model: bars::Model) -> Bar {
    Bar {
        id: model.id,
        name: model.name,
    }
}

// ── Beer repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbBeerRepository {
    pub db: DatabaseConnection,
}

/// Row restriction applied on top of the annotated listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListingFilter {
    All,
    /// `$2` is the beer id.
    ById,
    /// Beers the viewer (`$1`) has any state for.
    Interacted,
}

/// Annotated beer listing. `$1` is the viewer id and may be NULL, in which
/// case the lateral subquery matches nothing and every flag defaults.
fn listing_sql(filter: ListingFilter) -> String {
    let where_clause = match filter {
        ListingFilter::All => "",
        ListingFilter::ById => "WHERE b.id = $2",
        ListingFilter::Interacted => {
            "WHERE mine.starred OR mine.tried OR mine.rating IS NOT NULL"
        }
    };
    format!(
        r#"
        SELECT
            b.id, b.name, b.brewery_id, br.name AS brewery_name,
            b.bar_id, ba.name AS bar_name, b.number, b.reserved, b.abv,
            b.tasting_notes, b.notes,
            COALESCE(mine.starred, FALSE) AS starred,
            COALESCE(mine.tried, FALSE) AS tried,
            mine.rating AS rating
        FROM beers b
        JOIN breweries br ON br.id = b.brewery_id
        JOIN bars ba ON ba.id = b.bar_id
        LEFT JOIN LATERAL (
            SELECT ub.starred, ub.tried, ub.rating
            FROM user_beers ub
            WHERE ub.user_id = $1 AND ub.beer_id = b.id
            LIMIT 1
        ) AS mine ON TRUE
        {where_clause}
        ORDER BY b.id
        "#,
    )
}

#[derive(Debug, FromQueryResult)]
struct BeerListingRow {
    id: i32,
    name: String,
    brewery_id: i32,
    brewery_name: String,
    bar_id: i32,
    bar_name: String,
    number: Option<i16>,
    reserved: bool,
    abv: Option<Decimal>,
    tasting_notes: String,
    notes: String,
    starred: bool,
    tried: bool,
    rating: Option<i16>,
}

impl DbBeerRepository {
    async fn query_listing(
        &self,
        filter: ListingFilter,
        viewer: Option<Uuid>,
        beer_id: Option<i32>,
    ) -> Result<Vec<BeerListing>, FestivalError> {
        let mut values: Vec<Value> = vec![viewer.into()];
        if let Some(id) = beer_id {
            values.push(id.into());
        }
        let rows = BeerListingRow::find_by_statement(Statement::from_sql_and_values(
            self.db.get_database_backend(),
            listing_sql(filter),
            values,
        ))
        .all(&self.db)
        .await
        .context("list annotated beers")?;

        let listings = rows
            .into_iter()
            .map(|row| listing_from_row(row, viewer.is_some()))
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(listings)
    }
}

impl BeerRepository for DbBeerRepository {
    async fn list_annotated(
        &self,
        viewer: Option<Uuid>,
    ) -> Result<Vec<BeerListing>, FestivalError> {
        self.query_listing(ListingFilter::All, viewer, None).await
    }

    async fn find_annotated(
        &self,
        id: i32,
        viewer: Option<Uuid>,
    ) -> Result<Option<BeerListing>, FestivalError> {
        let mut listings = self
            .query_listing(ListingFilter::ById, viewer, Some(id))
            .await?;
        Ok(listings.pop())
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<BeerListing>, FestivalError> {
        self.query_listing(ListingFilter::Interacted, Some(user_id), None)
            .await
    }

    async fn exists(&self, id: i32) -> Result<bool, FestivalError> {
        let count = beers::Entity::find_by_id(id)
            .count(&self.db)
            .await
            .context("check beer exists")?;
        Ok(count > 0)
    }

    async fn create(&self, beer: &NewBeer) -> Result<Beer, FestivalError> {
        let model = beers::ActiveModel {
            name: Set(beer.name.clone()),
            brewery_id: Set(beer.brewery_id),
            bar_id: Set(beer.bar_id),
            number: Set(beer.number),
            reserved: Set(beer.reserved),
            abv: Set(beer.abv.map(|abv| abv.value())),
            tasting_notes: Set(beer.tasting_notes.clone()),
            notes: Set(beer.notes.clone()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| unique_or_internal(e, FestivalError::BeerAlreadyExists, "create beer"))?;
        Ok(beer_from_model(model)?)
    }

    async fn update(&self, id: i32, patch: &BeerPatch) -> Result<bool, FestivalError> {
        let mut am = beers::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(name) = &patch.name {
            am.name = Set(name.clone());
        }
        if let Some(brewery_id) = patch.brewery_id {
            am.brewery_id = Set(brewery_id);
        }
        if let Some(bar_id) = patch.bar_id {
            am.bar_id = Set(bar_id);
        }
        if let Some(number) = patch.number {
            am.number = Set(number);
        }
        if let Some(reserved) = patch.reserved {
            am.reserved = Set(reserved);
        }
        if let Some(abv) = patch.abv {
            am.abv = Set(abv.map(|abv| abv.value()));
        }
        if let Some(tasting_notes) = &patch.tasting_notes {
            am.tasting_notes = Set(tasting_notes.clone());
        }
        if let Some(notes) = &patch.notes {
            am.notes = Set(notes.clone());
        }
        match am.update(&self.db).await {
            Ok(_) => Ok(true),
            Err(DbErr::RecordNotUpdated) => Ok(false),
            Err(e) => Err(unique_or_internal(
                e,
                FestivalError::BeerAlreadyExists,
                "update beer",
            )),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, FestivalError> {
        let result = beers::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete beer")?;
        Ok(result.rows_affected > 0)
    }
}

fn beer_from_model(model: beers::Model) -> anyhow::Result<Beer> {
    Ok(Beer {
        id: model.id,
        name: model.name,
        brewery_id: model.brewery_id,
        bar_id: model.bar_id,
        number: model.number,
        reserved: model.reserved,
        abv: model
            .abv
            .map(Abv::new)
            .transpose()
            .context("stored abv out of range")?,
        tasting_notes: model.tasting_notes,
        notes: model.notes,
    })
}

fn listing_from_row(row: BeerListingRow, annotate: bool) -> anyhow::Result<BeerListing> {
    let viewer = if annotate {
        let rating = row
            .rating
            .map(|r| Rating::new(i64::from(r)))
            .transpose()
            .context("stored rating out of range")?;
        Some(ViewerState {
            starred: row.starred,
            tried: row.tried,
            rating,
        })
    } else {
        None
    };
    let abv = row
        .abv
        .map(Abv::new)
        .transpose()
        .context("stored abv out of range")?;
    Ok(BeerListing {
        beer: Beer {
            id: row.id,
            name: row.name,
            brewery_id: row.brewery_id,
            bar_id: row.bar_id,
            number: row.number,
            reserved: row.reserved,
            abv,
            tasting_notes: row.tasting_notes,
            notes: row.notes,
        },
        brewery_name: row.brewery_name,
        bar_name: row.bar_name,
        viewer,
    })
}

// ── UserBeer repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserBeerRepository {
    pub db: DatabaseConnection,
}

fn relation_write_err(err: DbErr, context: &'static str) -> FestivalError {
    match err.foreign_key_violation() {
        Some(message) => missing_relation_target(&message),
        None => anyhow::Error::new(err).context(context).into(),
    }
}

/// The beer can vanish between the existence check and the write; any other
/// dangling reference is the user.
fn missing_relation_target(message: &str) -> FestivalError {
    if message.contains(FK_USER_BEERS_BEER_ID) {
        FestivalError::BeerNotFound
    } else {
        FestivalError::UserNotFound
    }
}

fn new_relation(user_id: Uuid, beer_id: i32) -> user_beers::ActiveModel {
    let now = Utc::now();
    user_beers::ActiveModel {
        user_id: Set(user_id),
        beer_id: Set(beer_id),
        starred: Set(false),
        tried: Set(false),
        rating: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

impl DbUserBeerRepository {
    /// `INSERT … ON CONFLICT (user_id, beer_id) DO UPDATE` touching only
    /// `column` and `updated_at`, leaving the row's other flags intact.
    async fn upsert(
        &self,
        row: user_beers::ActiveModel,
        column: user_beers::Column,
        context: &'static str,
    ) -> Result<(), FestivalError> {
        user_beers::Entity::insert(row)
            .on_conflict(
                OnConflict::columns([user_beers::Column::UserId, user_beers::Column::BeerId])
                    .update_columns([column, user_beers::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| relation_write_err(e, context))?;
        Ok(())
    }
}

impl UserBeerRepository for DbUserBeerRepository {
    async fn set_starred(
        &self,
        user_id: Uuid,
        beer_id: i32,
        starred: bool,
    ) -> Result<(), FestivalError> {
        let mut row = new_relation(user_id, beer_id);
        row.starred = Set(starred);
        self.upsert(row, user_beers::Column::Starred, "upsert starred")
            .await
    }

    async fn set_tried(
        &self,
        user_id: Uuid,
        beer_id: i32,
        tried: bool,
    ) -> Result<(), FestivalError> {
        let mut row = new_relation(user_id, beer_id);
        row.tried = Set(tried);
        self.upsert(row, user_beers::Column::Tried, "upsert tried").await
    }

    async fn set_rating(
        &self,
        user_id: Uuid,
        beer_id: i32,
        rating: Rating,
    ) -> Result<(), FestivalError> {
        let mut row = new_relation(user_id, beer_id);
        row.rating = Set(Some(i16::from(rating)));
        self.upsert(row, user_beers::Column::Rating, "upsert rating")
            .await
    }

    async fn clear_rating(&self, user_id: Uuid, beer_id: i32) -> Result<(), FestivalError> {
        user_beers::Entity::update_many()
            .col_expr(user_beers::Column::Rating, Expr::value(Option::<i16>::None))
            .col_expr(user_beers::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(user_beers::Column::UserId.eq(user_id))
            .filter(user_beers::Column::BeerId.eq(beer_id))
            .exec(&self.db)
            .await
            .context("clear rating")?;
        Ok(())
    }

    async fn is_starred(&self, user_id: Uuid, beer_id: i32) -> Result<bool, FestivalError> {
        let model = user_beers::Entity::find_by_id((user_id, beer_id))
            .one(&self.db)
            .await
            .context("find user beer")?;
        Ok(model.is_some_and(|row| row.starred))
    }

    async fn rating_summary(&self, beer_id: i32) -> Result<RatingSummary, FestivalError> {
        #[derive(Debug, FromQueryResult)]
        struct SummaryRow {
            star_count: i64,
            rating_count: i64,
            rating_sum: i64,
        }

        let row = SummaryRow::find_by_statement(Statement::from_sql_and_values(
            self.db.get_database_backend(),
            r#"
            SELECT
                COUNT(*) FILTER (WHERE starred) AS star_count,
                COUNT(rating) AS rating_count,
                COALESCE(SUM(rating), 0)::BIGINT AS rating_sum
            FROM user_beers
            WHERE beer_id = $1
            "#,
            [beer_id.into()],
        ))
        .one(&self.db)
        .await
        .context("summarize beer ratings")?;

        Ok(row
            .map(|row| RatingSummary {
                star_count: row.star_count as u64,
                rating_count: row.rating_count as u64,
                rating_sum: row.rating_sum as u64,
            })
            .unwrap_or_default())
    }

    async fn links_for_user(&self, user_id: Uuid) -> Result<UserBeerLinks, FestivalError> {
        let rows = user_beers::Entity::find()
            .filter(user_beers::Column::UserId.eq(user_id))
            .filter(
                Condition::any()
                    .add(user_beers::Column::Starred.eq(true))
                    .add(user_beers::Column::Rating.is_not_null()),
            )
            .order_by_asc(user_beers::Column::BeerId)
            .all(&self.db)
            .await
            .context("list user beer links")?;

        let mut links = UserBeerLinks::default();
        for row in rows {
            if row.starred {
                links.starred.push(row.beer_id);
            }
            if row.rating.is_some() {
                links.rated.push(row.beer_id);
            }
        }
        Ok(links)
    }
}
