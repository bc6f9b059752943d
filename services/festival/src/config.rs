use serde::Deserialize;

use beerfest_core::config::Config;

/// Festival service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct FestivalConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3000). Env var: `FESTIVAL_PORT`.
    #[serde(default = "default_port")]
    pub festival_port: u16,
    /// Apply pending migrations before serving. Env var: `MIGRATE_ON_STARTUP`.
    #[serde(default)]
    pub migrate_on_startup: bool,
}

fn default_port() -> u16 {
    3000
}

impl Config for FestivalConfig {}
