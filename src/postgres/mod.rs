pub mod migrations;
mod session;
mod share;
mod user;

pub use session::PostgresSessionRepository;
pub use share::PostgresShareRepository;
pub use user::PostgresUserRepository;

use sqlx::PgPool;

/// Creates all Postgres repository instances from a connection pool.
pub fn create_repositories(
    pool: PgPool,
) -> (
    PostgresUserRepository,
    PostgresSessionRepository,
    PostgresShareRepository,
) {
    (
        PostgresUserRepository::new(pool.clone()),
        PostgresSessionRepository::new(pool.clone()),
        PostgresShareRepository::new(pool),
    )
}
