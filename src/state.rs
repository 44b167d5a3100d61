use sqlx::PgPool;
use std::sync::Arc;

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub postgres: PgPool,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(postgres: PgPool, config: Config) -> Self {
        Self {
            postgres,
            config: Arc::new(config),
        }
    }

    pub fn jwt_secret(&self) -> &str {
        &self.config.jwt_secret
    }
}
