//! Shared application state

use crate::{
    config::Config,
    db::{self, CardReader, PgCardStore},
    Result,
};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Debug, Clone, Copy)]
pub struct AppStateOptions {
    pub run_migrations: bool,
}

impl AppStateOptions {
    fn from_config(config: &Config) -> Self {
        Self {
            run_migrations: config.database.run_migrations,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db_pool: PgPool,
    pub store: PgCardStore,
    pub cards: Arc<dyn CardReader>,
}

impl AppState {
    pub async fn new(config: Config) -> Result<Self> {
        let options = AppStateOptions::from_config(&config);
        Self::new_with_options(config, options).await
    }

    pub async fn new_with_options(config: Config, options: AppStateOptions) -> Result<Self> {
        let db_pool = db::create_pool(&config.database).await?;

        if options.run_migrations {
            db::run_migrations(&db_pool).await?;
        }

        let store = PgCardStore::new(db_pool.clone());

        Ok(Self {
            config: Arc::new(config),
            db_pool,
            cards: Arc::new(store.clone()),
            store,
        })
    }

    /// Base URL for absolute links: the configured public URL, else the request origin.
    pub fn public_base_url(&self, request_origin: &str) -> String {
        self.config
            .server
            .public_base_url
            .clone()
            .unwrap_or_else(|| request_origin.to_string())
    }
}
