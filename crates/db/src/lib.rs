//! Persistence layer for the produto catalog.
//!
//! Holds the row models and DTOs (`models`), the repositories (`repositories`),
//! and pool/migration helpers used by the API binary and integration tests.

use serde::Serialize;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Migrations embedded from `db/migrations` at compile time.
static MIGRATOR: Migrator = sqlx::migrate!("../../db/migrations");

/// State of the produto schema as seen by the running binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SchemaStatus {
    /// Whether the `produtos` table exists.
    pub produtos_table: bool,
    /// Embedded migrations not yet recorded as applied.
    pub pending_migrations: usize,
}

impl SchemaStatus {
    pub fn is_ready(&self) -> bool {
        self.produtos_table && self.pending_migrations == 0
    }
}

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Compare the database against the embedded migrations.
///
/// A database that was never migrated (no `_sqlx_migrations` table) reports
/// every embedded migration as pending.
pub async fn schema_status(pool: &DbPool) -> Result<SchemaStatus, sqlx::Error> {
    let produtos_table: bool = sqlx::query_scalar("SELECT to_regclass('produtos') IS NOT NULL")
        .fetch_one(pool)
        .await?;

    let tracked: bool = sqlx::query_scalar("SELECT to_regclass('_sqlx_migrations') IS NOT NULL")
        .fetch_one(pool)
        .await?;
    let applied: Vec<i64> = if tracked {
        sqlx::query_scalar("SELECT version FROM _sqlx_migrations WHERE success")
            .fetch_all(pool)
            .await?
    } else {
        Vec::new()
    };

    let pending_migrations = MIGRATOR
        .iter()
        .filter(|m| !m.migration_type.is_down_migration())
        .filter(|m| !applied.contains(&m.version))
        .count();

    Ok(SchemaStatus {
        produtos_table,
        pending_migrations,
    })
}

/// Apply any pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}
