use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, QueryBuilder};

use crate::repository::ShareChanges;
use crate::{Share, ShareError, ShareRepository};

const SHARE_COLUMNS: &str = "id, title, content, password_hash, expires_at, author_id, hide_author";

#[derive(Clone)]
pub struct PostgresShareRepository {
    pool: PgPool,
}

impl PostgresShareRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct ShareRecord {
    id: String,
    title: Option<String>,
    content: String,
    password_hash: Option<String>,
    expires_at: Option<DateTime<Utc>>,
    author_id: Option<i64>,
    hide_author: bool,
}

impl From<ShareRecord> for Share {
    fn from(row: ShareRecord) -> Self {
        Share {
            id: row.id,
            title: row.title,
            content: row.content,
            password_hash: row.password_hash,
            expires_at: row.expires_at,
            author_id: row.author_id,
            hide_author: row.hide_author,
        }
    }
}

#[async_trait]
impl ShareRepository for PostgresShareRepository {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, share), err))]
    async fn create_share(&self, share: &Share) -> Result<(), ShareError> {
        // Absent optionals bind as NULL, which keeps "no title" distinct
        // from an empty title.
        sqlx::query(
            "INSERT INTO shares (id, title, content, password_hash, expires_at, author_id, hide_author) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(&share.id)
        .bind(&share.title)
        .bind(&share.content)
        .bind(&share.password_hash)
        .bind(share.expires_at)
        .bind(share.author_id)
        .bind(share.hide_author)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            log::error!(target: "sharebin", "msg=\"database error\", operation=\"create_share\", error=\"{e}\"");
            ShareError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn find_share(&self, id: &str) -> Result<Option<Share>, ShareError> {
        let row: Option<ShareRecord> =
            sqlx::query_as(&format!("SELECT {SHARE_COLUMNS} FROM shares WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    log::error!(target: "sharebin", "msg=\"database error\", operation=\"find_share\", error=\"{e}\"");
                    ShareError::DatabaseError(e.to_string())
                })?;

        Ok(row.map(Into::into))
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn find_share_for_author(
        &self,
        id: &str,
        author_id: i64,
    ) -> Result<Option<Share>, ShareError> {
        let row: Option<ShareRecord> = sqlx::query_as(&format!(
            "SELECT {SHARE_COLUMNS} FROM shares WHERE id = $1 AND author_id = $2"
        ))
        .bind(id)
        .bind(author_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            log::error!(target: "sharebin", "msg=\"database error\", operation=\"find_share_for_author\", error=\"{e}\"");
            ShareError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Into::into))
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn list_shares_for_author(&self, author_id: i64) -> Result<Vec<Share>, ShareError> {
        // No expiry filter: owners manage their expired shares here.
        let rows: Vec<ShareRecord> = sqlx::query_as(&format!(
            "SELECT {SHARE_COLUMNS} FROM shares WHERE author_id = $1"
        ))
        .bind(author_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            log::error!(target: "sharebin", "msg=\"database error\", operation=\"list_shares_for_author\", error=\"{e}\"");
            ShareError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, changes), err))]
    async fn update_share(
        &self,
        id: &str,
        author_filter: Option<i64>,
        changes: &ShareChanges,
    ) -> Result<u64, ShareError> {
        let mut builder: QueryBuilder<sqlx::Postgres> =
            QueryBuilder::new("UPDATE shares SET title = ");
        builder.push_bind(changes.title.as_deref());
        builder.push(", content = ");
        builder.push_bind(&changes.content);
        if let Some(password_hash) = &changes.password_hash {
            builder.push(", password_hash = ");
            builder.push_bind(password_hash.as_deref());
        }
        if let Some(expires_at) = &changes.expires_at {
            builder.push(", expires_at = ");
            builder.push_bind(*expires_at);
        }
        builder.push(", hide_author = ");
        builder.push_bind(changes.hide_author);
        builder.push(" WHERE id = ");
        builder.push_bind(id);
        if let Some(author_id) = author_filter {
            builder.push(" AND author_id = ");
            builder.push_bind(author_id);
        }

        let result = builder.build().execute(&self.pool).await.map_err(|e| {
            log::error!(target: "sharebin", "msg=\"database error\", operation=\"update_share\", error=\"{e}\"");
            ShareError::DatabaseError(e.to_string())
        })?;

        Ok(result.rows_affected())
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn delete_share(&self, id: &str, author_filter: Option<i64>) -> Result<u64, ShareError> {
        let result = match author_filter {
            Some(author_id) => {
                sqlx::query("DELETE FROM shares WHERE id = $1 AND author_id = $2")
                    .bind(id)
                    .bind(author_id)
                    .execute(&self.pool)
                    .await
            }
            None => {
                sqlx::query("DELETE FROM shares WHERE id = $1")
                    .bind(id)
                    .execute(&self.pool)
                    .await
            }
        }
        .map_err(|e| {
            log::error!(target: "sharebin", "msg=\"database error\", operation=\"delete_share\", error=\"{e}\"");
            ShareError::DatabaseError(e.to_string())
        })?;

        Ok(result.rows_affected())
    }
}
