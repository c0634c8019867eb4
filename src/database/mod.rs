use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use thiserror::Error;
use tracing::info;

pub mod products;

pub use products::{NewProduct, Product, ProductStore};

/// Errors from pool construction and schema setup
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Invalid database URL: {0}")]
    InvalidDatabaseUrl(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Open a connection pool to the configured SQLite database, creating the
/// file on first run.
pub async fn connect(database_url: &str) -> Result<SqlitePool, DatabaseError> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|_| DatabaseError::InvalidDatabaseUrl(database_url.to_string()))?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new().connect_with(options).await?;

    info!("Connected database pool for: {}", database_url);
    Ok(pool)
}

/// Create the products table if it does not exist yet.
///
/// AUTOINCREMENT keeps the rowid sequence monotonic so deleted ids are
/// never reused.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), DatabaseError> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS products (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            price REAL NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Pings the pool to ensure connectivity
pub async fn health_check(pool: &SqlitePool) -> Result<(), DatabaseError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
