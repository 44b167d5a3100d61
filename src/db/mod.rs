pub mod profile;
pub mod rating;
pub mod rating_period;
pub mod user;

use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::{config::Config, errors::AppError};

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

pub async fn connect(config: &Config) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to connect to database: {}", e)))?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to run migrations: {}", e)))?;

    Ok(pool)
}

fn has_error_code(e: &sqlx::Error, code: &str) -> bool {
    e.as_database_error()
        .and_then(|db| db.code())
        .is_some_and(|c| c == code)
}

pub(crate) fn is_unique_violation(e: &sqlx::Error) -> bool {
    has_error_code(e, UNIQUE_VIOLATION)
}

pub(crate) fn is_foreign_key_violation(e: &sqlx::Error) -> bool {
    has_error_code(e, FOREIGN_KEY_VIOLATION)
}
