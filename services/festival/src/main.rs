use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use tracing::info;

use beerfest_core::config::Config;
use beerfest_core::tracing::init_tracing;
use beerfest_festival::config::FestivalConfig;
use beerfest_festival::router::build_router;
use beerfest_festival::state::AppState;
use beerfest_festival_migration::Migrator;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = FestivalConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    if config.migrate_on_startup {
        Migrator::up(&db, None)
            .await
            .expect("failed to apply migrations");
        info!("migrations applied");
    }

    let router = build_router(AppState { db });
    let http_addr = format!("0.0.0.0:{}", config.festival_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("festival service listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
