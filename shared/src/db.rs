//! Database connection management.

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

use crate::secrets::DatabaseCredentials;
use crate::{Config, Error, Result};

/// Create a database connection pool.
///
/// Host and database name from the credentials secret win over the
/// environment when both are present.
pub async fn create_pool(config: &Config, creds: &DatabaseCredentials) -> Result<PgPool> {
    let host = creds.host.as_deref().unwrap_or(&config.db_host);
    let dbname = creds.dbname.as_deref().unwrap_or(&config.db_name);
    let database_url = format!(
        "postgres://{}:{}@{}:{}/{}",
        creds.username,
        creds.password,
        host,
        creds.port.unwrap_or(5432),
        dbname,
    );

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(3))
        .connect(&database_url)
        .await
        .map_err(Error::Database)?;

    Ok(pool)
}
