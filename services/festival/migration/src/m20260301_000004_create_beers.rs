use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Beers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Beers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Beers::Name).string_len(200).not_null())
                    .col(ColumnDef::new(Beers::BreweryId).integer().not_null())
                    .col(ColumnDef::new(Beers::BarId).integer().not_null())
                    .col(ColumnDef::new(Beers::Number).small_integer().null())
                    .col(
                        ColumnDef::new(Beers::Reserved)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    // Tenths of a percent; rescaled by a later migration.
                    .col(ColumnDef::new(Beers::Abv).small_integer().null())
                    .col(
                        ColumnDef::new(Beers::TastingNotes)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Beers::Notes).text().not_null().default(""))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Beers::Table, Beers::BreweryId)
                            .to(Breweries::Table, Breweries::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Beers::Table, Beers::BarId)
                            .to(Bars::Table, Bars::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Beers::Table)
                    .col(Beers::BreweryId)
                    .col(Beers::Name)
                    .unique()
                    .name("uq_beers_brewery_id_name")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Beers::Table)
                    .col(Beers::BarId)
                    .name("idx_beers_bar_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Beers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Beers {
    Table,
    Id,
    Name,
    BreweryId,
    BarId,
    Number,
    Reserved,
    Abv,
    TastingNotes,
    Notes,
}

#[derive(Iden)]
enum Breweries {
    Table,
    Id,
}

#[derive(Iden)]
enum Bars {
    Table,
    Id,
}
