use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::ShareError;

/// Authorization tier of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn is_admin(self) -> bool {
        self == Role::Admin
    }

    /// Stored representation: 0 = user, 1 = admin. Unknown values degrade to
    /// the least privileged role.
    pub fn from_stored(value: i16) -> Self {
        match value {
            1 => Role::Admin,
            _ => Role::User,
        }
    }

    pub fn as_stored(self) -> i16 {
        match self {
            Role::User => 0,
            Role::Admin => 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
}

#[cfg(any(test, feature = "mocks"))]
impl User {
    pub fn mock() -> Self {
        User {
            id: 1,
            name: "testuser".to_owned(),
            password_hash: "fakehashedpassword".to_owned(),
            role: Role::User,
        }
    }

    pub fn mock_from_credentials(name: &str, password_hash: &str) -> Self {
        User {
            id: 1,
            name: name.to_owned(),
            password_hash: password_hash.to_owned(),
            role: Role::User,
        }
    }
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_user_by_id(&self, id: i64) -> Result<Option<User>, ShareError>;
    async fn find_user_by_name(&self, name: &str) -> Result<Option<User>, ShareError>;

    /// Inserts a new user row.
    ///
    /// Implementations must translate a uniqueness violation on `name` into
    /// `ShareError::UserAlreadyExists`, since the caller's existence
    /// pre-check is not atomic with the insert.
    async fn create_user(&self, user: &User) -> Result<(), ShareError>;
}
