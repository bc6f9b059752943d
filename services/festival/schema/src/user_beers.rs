use sea_orm::entity::prelude::*;

/// One user's state for one beer. Created on the first star, tried or
/// rating interaction and updated in place afterwards.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_beers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub beer_id: i32,
    pub starred: bool,
    pub tried: bool,
    /// 1 to 5, enforced by a CHECK constraint.
    pub rating: Option<i16>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::beers::Entity",
        from = "Column::BeerId",
        to = "super::beers::Column::Id",
        on_delete = "Cascade"
    )]
    Beer,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::beers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Beer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
