use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "breweries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub location: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::beers::Entity")]
    Beers,
}

impl Related<super::beers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Beers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
