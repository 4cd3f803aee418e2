use serde::Deserialize;

use super::optional_field;
use crate::config::ShareConfig;
use crate::crypto::{generate_id, Argon2Hasher, PasswordHasher};
use crate::expiry::compute_expiry;
use crate::repository::{Share, ShareRepository};
use crate::ShareError;

/// Submission for a new share, from an owner or anonymously.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewShare {
    #[serde(default)]
    pub title: Option<String>,
    pub content: String,
    /// Empty or absent means public read.
    #[serde(default)]
    pub password: Option<String>,
    /// Expiration spec, e.g. `"1_days"`; absent or `"never"` means no
    /// expiration.
    #[serde(default)]
    pub expire_in: Option<String>,
    #[serde(default)]
    pub author_id: Option<i64>,
    #[serde(default)]
    pub hide_author: bool,
}

pub struct CreateShareAction<R> {
    shares: R,
    hasher: Box<dyn PasswordHasher>,
    config: ShareConfig,
}

impl<R: ShareRepository> CreateShareAction<R> {
    pub fn new(shares: R) -> Self {
        CreateShareAction {
            shares,
            hasher: Box::new(Argon2Hasher::default()),
            config: ShareConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ShareConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_hasher(mut self, hasher: Box<dyn PasswordHasher>) -> Self {
        self.hasher = hasher;
        self
    }

    /// Persists a new share and returns its generated id.
    ///
    /// Absent optional fields are stored as NULL, never as empty strings.
    pub async fn execute(&self, request: NewShare) -> Result<String, ShareError> {
        let password_hash = match request.password.as_deref() {
            Some(password) if !password.is_empty() => Some(self.hasher.hash(password)?),
            _ => None,
        };

        let expires_at = match request.expire_in.as_deref() {
            Some(spec) => compute_expiry(spec)?,
            None => None,
        };

        let share = Share {
            id: generate_id(self.config.share_id_length),
            title: optional_field(request.title),
            content: request.content,
            password_hash,
            expires_at,
            author_id: request.author_id,
            hide_author: request.hide_author,
        };
        self.shares.create_share(&share).await?;
        Ok(share.id)
    }
}
