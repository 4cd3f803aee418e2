pub mod actions;
pub mod config;
pub mod crypto;
pub mod expiry;
#[cfg(feature = "sqlx_postgres")]
pub mod postgres;
pub mod repository;
pub mod view;

pub use config::ShareConfig;
pub use crypto::{Argon2Hasher, PasswordHasher};
pub use repository::Role;
pub use repository::Session;
pub use repository::SessionRepository;
pub use repository::Share;
pub use repository::ShareRepository;
pub use repository::User;
pub use repository::UserRepository;
pub use view::ShareView;

#[cfg(any(test, feature = "mocks"))]
pub use repository::MockSessionRepository;
#[cfg(any(test, feature = "mocks"))]
pub use repository::MockShareRepository;
#[cfg(any(test, feature = "mocks"))]
pub use repository::MockUserRepository;

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareError {
    /// Resource absent, expired, or access denied. Deliberately conflated
    /// for shares so callers cannot probe for existence.
    NotFound,
    /// Unknown user name or wrong login password, indistinguishably.
    InvalidCredentials,
    /// Wrong password supplied for a protected share.
    PasswordIncorrect,
    UserAlreadyExists,
    /// Malformed expiration spec, carrying the offending input.
    InvalidExpirySpec(String),
    /// Missing or expired session.
    InvalidSession,
    PasswordHashError,
    DatabaseError(String),
}

impl std::error::Error for ShareError {}

impl fmt::Display for ShareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShareError::NotFound => write!(f, "Resource not found"),
            ShareError::InvalidCredentials => write!(f, "Username or password is incorrect"),
            ShareError::PasswordIncorrect => write!(f, "Password is incorrect"),
            ShareError::UserAlreadyExists => write!(f, "User already exists"),
            ShareError::InvalidExpirySpec(spec) => {
                write!(
                    f,
                    "Expiration period '{spec}' is not of the correct format, expected e.g. '5_days'"
                )
            }
            ShareError::InvalidSession => write!(f, "Invalid session token"),
            ShareError::PasswordHashError => write!(f, "Failed to hash password"),
            ShareError::DatabaseError(msg) => write!(f, "Database error: {msg}"),
        }
    }
}
