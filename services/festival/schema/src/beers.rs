use sea_orm::entity::prelude::*;

/// A beer served at one bar. `(brewery_id, name)` is unique.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "beers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub brewery_id: i32,
    pub bar_id: i32,
    /// Position in the printed festival programme.
    pub number: Option<i16>,
    pub reserved: bool,
    #[sea_orm(column_type = "Decimal(Some((3, 1)))", nullable)]
    pub abv: Option<Decimal>,
    pub tasting_notes: String,
    pub notes: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::breweries::Entity",
        from = "Column::BreweryId",
        to = "super::breweries::Column::Id",
        on_delete = "Cascade"
    )]
    Brewery,
    #[sea_orm(
        belongs_to = "super::bars::Entity",
        from = "Column::BarId",
        to = "super::bars::Column::Id",
        on_delete = "Cascade"
    )]
    Bar,
    #[sea_orm(has_many = "super::user_beers::Entity")]
    UserBeers,
}

impl Related<super::breweries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Brewery.def()
    }
}

impl Related<super::bars::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bar.def()
    }
}

impl Related<super::user_beers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserBeers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
