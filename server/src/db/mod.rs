//! Connection pool setup and embedded migrations.
//!
//! SYSTEM CONTEXT
//! ==============
//! `main` resolves the pool size from the environment with
//! `parse_max_connections` and hands both settings to `init_pool`, which
//! connects and brings the schema (items, points, point_items, item seed)
//! up to date before any API traffic is accepted.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

/// Small default: traffic is form submissions and reference reads.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Resolve the pool size from a raw `DB_MAX_CONNECTIONS` value. Unset,
/// unparsable, or zero values fall back to the default.
pub fn parse_max_connections(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(DEFAULT_MAX_CONNECTIONS)
}

/// Connect to `PostgreSQL` with a pool of `max_connections` and run the
/// embedded migrations.
///
/// # Errors
///
/// Returns an error if the connection or migrations fail.
pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    sqlx::migrate!("src/db/migrations").run(&pool).await?;

    Ok(pool)
}
