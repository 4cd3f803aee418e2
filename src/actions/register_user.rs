use rand::rngs::OsRng;
use rand::Rng;

use crate::crypto::{Argon2Hasher, PasswordHasher};
use crate::repository::{Role, User, UserRepository};
use crate::ShareError;

pub struct RegisterUserAction<U> {
    users: U,
    hasher: Box<dyn PasswordHasher>,
}

impl<U: UserRepository> RegisterUserAction<U> {
    pub fn new(users: U) -> Self {
        RegisterUserAction {
            users,
            hasher: Box::new(Argon2Hasher::default()),
        }
    }

    pub fn with_hasher(mut self, hasher: Box<dyn PasswordHasher>) -> Self {
        self.hasher = hasher;
        self
    }

    /// Registers a new user with a randomly chosen numeric id.
    ///
    /// The existence pre-check and the insert are separate statements, so
    /// the repository additionally maps a name uniqueness violation to
    /// `UserAlreadyExists` to close the race between concurrent
    /// registrations.
    pub async fn execute(
        &self,
        name: &str,
        password: &str,
        role: Role,
    ) -> Result<(), ShareError> {
        if self.users.find_user_by_name(name).await?.is_some() {
            return Err(ShareError::UserAlreadyExists);
        }

        let password_hash = self.hasher.hash(password)?;
        let user = User {
            id: OsRng.gen_range(1..i64::MAX),
            name: name.to_owned(),
            password_hash,
            role,
        };
        self.users.create_user(&user).await
    }
}
