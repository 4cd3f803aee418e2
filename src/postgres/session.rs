use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::{Session, SessionRepository, ShareError};

#[derive(Clone)]
pub struct PostgresSessionRepository {
    pool: PgPool,
}

impl PostgresSessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct SessionRecord {
    session_id: String,
    user_id: i64,
    expires_at: DateTime<Utc>,
}

impl From<SessionRecord> for Session {
    fn from(row: SessionRecord) -> Self {
        Session {
            session_id: row.session_id,
            user_id: row.user_id,
            expires_at: row.expires_at,
        }
    }
}

#[async_trait]
impl SessionRepository for PostgresSessionRepository {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn find_live_session_for_user(
        &self,
        user_id: i64,
    ) -> Result<Option<Session>, ShareError> {
        let row: Option<SessionRecord> = sqlx::query_as(
            "SELECT session_id, user_id, expires_at FROM sessions WHERE user_id = $1 AND expires_at > NOW() LIMIT 1"
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            log::error!(target: "sharebin", "msg=\"database error\", operation=\"find_live_session_for_user\", error=\"{e}\"");
            ShareError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Into::into))
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, session_id), err))]
    async fn find_live_session(&self, session_id: &str) -> Result<Option<Session>, ShareError> {
        let row: Option<SessionRecord> = sqlx::query_as(
            "SELECT session_id, user_id, expires_at FROM sessions WHERE session_id = $1 AND expires_at > NOW()"
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            log::error!(target: "sharebin", "msg=\"database error\", operation=\"find_live_session\", error=\"{e}\"");
            ShareError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Into::into))
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, session), err))]
    async fn create_session(&self, session: &Session) -> Result<(), ShareError> {
        sqlx::query("INSERT INTO sessions (session_id, user_id, expires_at) VALUES ($1, $2, $3)")
            .bind(&session.session_id)
            .bind(session.user_id)
            .bind(session.expires_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                log::error!(target: "sharebin", "msg=\"database error\", operation=\"create_session\", error=\"{e}\"");
                ShareError::DatabaseError(e.to_string())
            })?;

        Ok(())
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn delete_sessions_for_user(&self, user_id: i64) -> Result<u64, ShareError> {
        let result = sqlx::query("DELETE FROM sessions WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                log::error!(target: "sharebin", "msg=\"database error\", operation=\"delete_sessions_for_user\", error=\"{e}\"");
                ShareError::DatabaseError(e.to_string())
            })?;

        Ok(result.rows_affected())
    }
}
