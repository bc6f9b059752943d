use sea_orm::entity::prelude::*;

/// Festival attendee or staff account, provisioned by staff.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    pub email: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_beers::Entity")]
    UserBeers,
}

impl Related<super::user_beers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserBeers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
