#![allow(clippy::unwrap_used)]

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::ShareError;

use super::user::{User, UserRepository};

#[derive(Clone, Default)]
pub struct MockUserRepository {
    pub users: Arc<Mutex<Vec<User>>>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
        }
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_user_by_id(&self, id: i64) -> Result<Option<User>, ShareError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_user_by_name(&self, name: &str) -> Result<Option<User>, ShareError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.name == name).cloned())
    }

    async fn create_user(&self, user: &User) -> Result<(), ShareError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.name == user.name) {
            return Err(ShareError::UserAlreadyExists);
        }
        users.push(user.clone());
        Ok(())
    }
}
