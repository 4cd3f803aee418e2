use crate::repository::{SessionRepository, User, UserRepository};
use crate::ShareError;

/// Turns a bearer session id back into the authenticated user.
///
/// This is the sole authentication check the rest of the engine relies on;
/// the HTTP layer calls it on every authenticated request. Nothing is
/// cached: both lookups hit the store each time.
pub struct ResolveSessionAction<U, S> {
    users: U,
    sessions: S,
}

impl<U: UserRepository, S: SessionRepository> ResolveSessionAction<U, S> {
    pub fn new(users: U, sessions: S) -> Self {
        ResolveSessionAction { users, sessions }
    }

    pub async fn execute(&self, session_id: &str) -> Result<User, ShareError> {
        let session = self
            .sessions
            .find_live_session(session_id)
            .await?
            .ok_or(ShareError::InvalidSession)?;

        self.users
            .find_user_by_id(session.user_id)
            .await?
            .ok_or(ShareError::InvalidSession)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{MockSessionRepository, MockUserRepository, Session};
    use chrono::{Duration, Utc};

    fn session(session_id: &str, user_id: i64, ttl: Duration) -> Session {
        Session {
            session_id: session_id.to_owned(),
            user_id,
            expires_at: Utc::now() + ttl,
        }
    }

    #[tokio::test]
    async fn test_resolve_live_session() {
        let users = MockUserRepository::with_users(vec![User::mock()]);
        let sessions = MockSessionRepository::new();
        sessions
            .sessions
            .lock()
            .unwrap()
            .push(session("abcde12345", 1, Duration::days(7)));

        let resolve = ResolveSessionAction::new(users, sessions);
        let user = resolve.execute("abcde12345").await.unwrap();
        assert_eq!(user.id, 1);
    }

    #[tokio::test]
    async fn test_resolve_expired_session() {
        let users = MockUserRepository::with_users(vec![User::mock()]);
        let sessions = MockSessionRepository::new();
        sessions
            .sessions
            .lock()
            .unwrap()
            .push(session("abcde12345", 1, Duration::seconds(-1)));

        let resolve = ResolveSessionAction::new(users, sessions);
        let result = resolve.execute("abcde12345").await;
        assert_eq!(result.unwrap_err(), ShareError::InvalidSession);
    }

    #[tokio::test]
    async fn test_resolve_unknown_session() {
        let resolve =
            ResolveSessionAction::new(MockUserRepository::new(), MockSessionRepository::new());
        let result = resolve.execute("nosuchsess").await;
        assert_eq!(result.unwrap_err(), ShareError::InvalidSession);
    }
}
