use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ShareError;

/// A time-limited bearer credential binding a request to a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub session_id: String,
    pub user_id: i64,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_live(&self) -> bool {
        Utc::now() < self.expires_at
    }
}

#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Finds a live (non-expired) session for a user, if one exists.
    ///
    /// At most one live session per user exists when the login flow is the
    /// only writer; this is application-enforced, not a store constraint.
    async fn find_live_session_for_user(&self, user_id: i64)
        -> Result<Option<Session>, ShareError>;

    /// Finds a live session by its id. Expired rows are treated as absent.
    async fn find_live_session(&self, session_id: &str) -> Result<Option<Session>, ShareError>;

    async fn create_session(&self, session: &Session) -> Result<(), ShareError>;

    /// Deletes every session row for a user, live or expired. Invoked by the
    /// login flow as lazy cleanup; there is no sweeper.
    async fn delete_sessions_for_user(&self, user_id: i64) -> Result<u64, ShareError>;
}
