use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use crate::repository::Role;
use crate::{ShareError, User, UserRepository};

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct UserRecord {
    id: i64,
    name: String,
    password_hash: String,
    role: i16,
}

impl From<UserRecord> for User {
    fn from(row: UserRecord) -> Self {
        User {
            id: row.id,
            name: row.name,
            password_hash: row.password_hash,
            role: Role::from_stored(row.role),
        }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn find_user_by_id(&self, id: i64) -> Result<Option<User>, ShareError> {
        let row: Option<UserRecord> =
            sqlx::query_as("SELECT id, name, password_hash, role FROM users WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    log::error!(target: "sharebin", "msg=\"database error\", operation=\"find_user_by_id\", error=\"{e}\"");
                    ShareError::DatabaseError(e.to_string())
                })?;

        Ok(row.map(Into::into))
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, name), err))]
    async fn find_user_by_name(&self, name: &str) -> Result<Option<User>, ShareError> {
        let row: Option<UserRecord> =
            sqlx::query_as("SELECT id, name, password_hash, role FROM users WHERE name = $1")
                .bind(name)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    log::error!(target: "sharebin", "msg=\"database error\", operation=\"find_user_by_name\", error=\"{e}\"");
                    ShareError::DatabaseError(e.to_string())
                })?;

        Ok(row.map(Into::into))
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, user), err))]
    async fn create_user(&self, user: &User) -> Result<(), ShareError> {
        sqlx::query("INSERT INTO users (id, name, password_hash, role) VALUES ($1, $2, $3, $4)")
            .bind(user.id)
            .bind(&user.name)
            .bind(&user.password_hash)
            .bind(user.role.as_stored())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                // The caller's existence pre-check is not atomic with this
                // insert; the unique index on name is the authority.
                if e.as_database_error()
                    .is_some_and(|db| db.is_unique_violation())
                {
                    return ShareError::UserAlreadyExists;
                }
                log::error!(target: "sharebin", "msg=\"database error\", operation=\"create_user\", error=\"{e}\"");
                ShareError::DatabaseError(e.to_string())
            })?;

        Ok(())
    }
}
