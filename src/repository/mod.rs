//! Repository traits and data types.
//!
//! Storage abstractions for the three logical tables the engine owns:
//! `users`, `sessions` and `shares`. Implement these traits to plug in a
//! different backend; the crate ships Postgres implementations behind the
//! `sqlx_postgres` feature and in-memory mocks behind the `mocks` feature.
//!
//! The engine holds no cache of any row: every check re-queries the store,
//! trading latency for correctness under multiple service instances.

mod session;
mod share;
mod user;

#[cfg(any(test, feature = "mocks"))]
mod session_mock;
#[cfg(any(test, feature = "mocks"))]
mod share_mock;
#[cfg(any(test, feature = "mocks"))]
mod user_mock;

pub use session::Session;
pub use session::SessionRepository;
pub use share::Share;
pub use share::ShareChanges;
pub use share::ShareRepository;
pub use user::Role;
pub use user::User;
pub use user::UserRepository;

#[cfg(any(test, feature = "mocks"))]
pub use session_mock::MockSessionRepository;
#[cfg(any(test, feature = "mocks"))]
pub use share_mock::MockShareRepository;
#[cfg(any(test, feature = "mocks"))]
pub use user_mock::MockUserRepository;
