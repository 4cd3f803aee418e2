#![allow(clippy::unwrap_used)]

use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};

use crate::ShareError;

use super::session::{Session, SessionRepository};

#[derive(Clone, Default)]
pub struct MockSessionRepository {
    pub sessions: Arc<Mutex<Vec<Session>>>,
}

impl MockSessionRepository {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(Mutex::new(vec![])),
        }
    }
}

#[async_trait]
impl SessionRepository for MockSessionRepository {
    async fn find_live_session_for_user(
        &self,
        user_id: i64,
    ) -> Result<Option<Session>, ShareError> {
        let now = Utc::now();
        let sessions = self.sessions.lock().unwrap();
        Ok(sessions
            .iter()
            .find(|s| s.user_id == user_id && s.expires_at > now)
            .cloned())
    }

    async fn find_live_session(&self, session_id: &str) -> Result<Option<Session>, ShareError> {
        let now = Utc::now();
        let sessions = self.sessions.lock().unwrap();
        Ok(sessions
            .iter()
            .find(|s| s.session_id == session_id && s.expires_at > now)
            .cloned())
    }

    async fn create_session(&self, session: &Session) -> Result<(), ShareError> {
        let mut sessions = self.sessions.lock().unwrap();
        sessions.push(session.clone());
        Ok(())
    }

    async fn delete_sessions_for_user(&self, user_id: i64) -> Result<u64, ShareError> {
        let mut sessions = self.sessions.lock().unwrap();
        let len_before = sessions.len();
        sessions.retain(|s| s.user_id != user_id);
        Ok((len_before - sessions.len()) as u64)
    }
}
