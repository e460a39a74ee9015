//! Bundled table schema
//!
//! The tables are normally provisioned ahead of time. `ensure_schema` applies
//! the idempotent DDL for local setups and tests.

use sqlx::PgPool;
use tracing::info;

/// `CREATE TABLE IF NOT EXISTS` statements for `comments` and `image_likes`
pub const SCHEMA_SQL: &str = include_str!("../migrations/0001_create_gallery_tables.sql");

/// Create the gallery tables and indexes if they do not exist yet
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA_SQL).execute(pool).await?;
    info!("Gallery schema ensured");
    Ok(())
}
