use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbBarRepository, DbBeerRepository, DbBreweryRepository, DbUserBeerRepository,
    DbUserRepository,
};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn brewery_repo(&self) -> DbBreweryRepository {
        DbBreweryRepository {
            db: self.db.clone(),
        }
    }

    pub fn bar_repo(&self) -> DbBarRepository {
        DbBarRepository {
            db: self.db.clone(),
        }
    }

    pub fn beer_repo(&self) -> DbBeerRepository {
        DbBeerRepository {
            db: self.db.clone(),
        }
    }

    pub fn user_beer_repo(&self) -> DbUserBeerRepository {
        DbUserBeerRepository {
            db: self.db.clone(),
        }
    }
}
