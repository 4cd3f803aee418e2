//! Embedded database migrations.
//!
//! Migrations are compiled into the binary with `include_str!` and run
//! programmatically, tracked in the `_sharebin_migrations` table.
//!
//! # Example
//!
//! ```rust,ignore
//! use sharebin::postgres::migrations;
//! use sqlx::PgPool;
//!
//! async fn setup_database(pool: &PgPool) -> Result<(), sqlx::Error> {
//!     migrations::run(pool).await?;
//!     Ok(())
//! }
//! ```

use sqlx::{Executor, PgPool};

const CORE_MIGRATIONS: &[(&str, &str)] = &[
    (
        "20260101000001_create_users_table",
        include_str!("../../migrations/core/20260101000001_create_users_table.sql"),
    ),
    (
        "20260101000002_create_sessions_table",
        include_str!("../../migrations/core/20260101000002_create_sessions_table.sql"),
    ),
    (
        "20260101000003_create_shares_table",
        include_str!("../../migrations/core/20260101000003_create_shares_table.sql"),
    ),
];

/// Runs all pending migrations.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    pool.execute(
        r"
        CREATE TABLE IF NOT EXISTS _sharebin_migrations (
            name TEXT PRIMARY KEY,
            applied_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        ",
    )
    .await?;

    run_migrations(pool, CORE_MIGRATIONS).await
}

async fn run_migrations(pool: &PgPool, migrations: &[(&str, &str)]) -> Result<(), sqlx::Error> {
    for (name, sql) in migrations {
        let applied: Option<(String,)> =
            sqlx::query_as("SELECT name FROM _sharebin_migrations WHERE name = $1")
                .bind(name)
                .fetch_optional(pool)
                .await?;
        if applied.is_some() {
            continue;
        }

        pool.execute(*sql).await?;
        sqlx::query("INSERT INTO _sharebin_migrations (name) VALUES ($1)")
            .bind(name)
            .execute(pool)
            .await?;
    }
    Ok(())
}
