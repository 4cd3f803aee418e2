use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ShareError;

/// A stored text artifact retrievable by opaque id.
///
/// Optional fields map to SQL NULL, preserving "absent" as distinct from
/// empty-string. An absent `password_hash` means public read; an absent
/// `expires_at` means the share never expires; an absent `author_id` marks
/// an anonymous share.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Share {
    pub id: String,
    pub title: Option<String>,
    pub content: String,
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub author_id: Option<i64>,
    pub hide_author: bool,
}

impl Share {
    /// True once a set expiry has passed. Expired shares are treated as
    /// absent on every public-facing read path, even though the row still
    /// exists until deleted.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => Utc::now() >= expires_at,
            None => false,
        }
    }

    pub fn is_password_protected(&self) -> bool {
        self.password_hash.is_some()
    }
}

/// Field updates for an existing share.
///
/// Title, content and the hide-author flag are always written. The two-level
/// options distinguish "leave unchanged" (outer `None`) from "set" and
/// "clear" (inner `Some`/`None`).
#[derive(Debug, Clone, Default)]
pub struct ShareChanges {
    pub title: Option<String>,
    pub content: String,
    pub password_hash: Option<Option<String>>,
    pub expires_at: Option<Option<DateTime<Utc>>>,
    pub hide_author: bool,
}

#[async_trait]
pub trait ShareRepository: Send + Sync {
    async fn create_share(&self, share: &Share) -> Result<(), ShareError>;

    async fn find_share(&self, id: &str) -> Result<Option<Share>, ShareError>;

    /// Finds a share matching both id and author, for ownership checks.
    async fn find_share_for_author(
        &self,
        id: &str,
        author_id: i64,
    ) -> Result<Option<Share>, ShareError>;

    /// Every share authored by the user, expired ones included so owners can
    /// still manage them.
    async fn list_shares_for_author(&self, author_id: i64) -> Result<Vec<Share>, ShareError>;

    /// Applies changes to the share matching `id`, and `author_id` when a
    /// filter is given (`None` is the admin path). Returns the number of
    /// rows that matched.
    async fn update_share(
        &self,
        id: &str,
        author_filter: Option<i64>,
        changes: &ShareChanges,
    ) -> Result<u64, ShareError>;

    /// Deletes the share matching `id` (and `author_id` when filtered).
    /// Returns the number of rows deleted.
    async fn delete_share(&self, id: &str, author_filter: Option<i64>) -> Result<u64, ShareError>;
}
