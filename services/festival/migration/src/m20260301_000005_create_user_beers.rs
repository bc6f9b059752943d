use sea_orm_migration::prelude::*;

pub const FK_USER_BEERS_USER_ID: &str = "fk_user_beers_user_id";
pub const FK_USER_BEERS_BEER_ID: &str = "fk_user_beers_beer_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserBeers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(UserBeers::UserId).uuid().not_null())
                    .col(ColumnDef::new(UserBeers::BeerId).integer().not_null())
                    .col(
                        ColumnDef::new(UserBeers::Starred)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(UserBeers::Tried)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(UserBeers::Rating)
                            .small_integer()
                            .null()
                            .check(Expr::col(UserBeers::Rating).between(1, 5)),
                    )
                    .col(
                        ColumnDef::new(UserBeers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(UserBeers::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(UserBeers::UserId)
                            .col(UserBeers::BeerId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_BEERS_USER_ID)
                            .from(UserBeers::Table, UserBeers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_BEERS_BEER_ID)
                            .from(UserBeers::Table, UserBeers::BeerId)
                            .to(Beers::Table, Beers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(UserBeers::Table)
                    .col(UserBeers::BeerId)
                    .name("idx_user_beers_beer_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserBeers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum UserBeers {
    Table,
    UserId,
    BeerId,
    Starred,
    Tried,
    Rating,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

#[derive(Iden)]
enum Beers {
    Table,
    Id,
}
