use chrono::Utc;

use crate::config::ShareConfig;
use crate::crypto::{generate_id, Argon2Hasher, PasswordHasher};
use crate::repository::{Session, SessionRepository, UserRepository};
use crate::ShareError;

pub struct LoginAction<U, S> {
    users: U,
    sessions: S,
    hasher: Box<dyn PasswordHasher>,
    config: ShareConfig,
}

impl<U: UserRepository, S: SessionRepository> LoginAction<U, S> {
    pub fn new(users: U, sessions: S) -> Self {
        LoginAction {
            users,
            sessions,
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

    /// Authenticates by name and password and returns a session id.
    ///
    /// A live session is returned unchanged, so re-login is idempotent.
    /// When none exists, every session row for the user is deleted before a
    /// new one is created; expired sessions are only ever cleaned up here,
    /// on the affected user's own next login.
    pub async fn execute(&self, name: &str, password: &str) -> Result<String, ShareError> {
        let user = self.users.find_user_by_name(name).await?;
        // Unknown name and wrong password must be indistinguishable.
        let user = match user {
            Some(user) => user,
            None => return Err(ShareError::InvalidCredentials),
        };
        let verified = self
            .hasher
            .verify(password, &user.password_hash)
            .unwrap_or(false);
        if !verified {
            return Err(ShareError::InvalidCredentials);
        }

        if let Some(session) = self.sessions.find_live_session_for_user(user.id).await? {
            return Ok(session.session_id);
        }

        self.sessions.delete_sessions_for_user(user.id).await?;

        let session = Session {
            session_id: generate_id(self.config.session_id_length),
            user_id: user.id,
            expires_at: Utc::now() + self.config.session_lifetime,
        };
        self.sessions.create_session(&session).await?;
        Ok(session.session_id)
    }
}
