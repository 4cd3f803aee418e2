use crate::crypto::{Argon2Hasher, PasswordHasher};
use crate::repository::{ShareRepository, UserRepository};
use crate::view::{build_share_view, ShareView};
use crate::ShareError;

/// Password-gated share read.
pub struct UnlockShareAction<R, U> {
    shares: R,
    users: U,
    hasher: Box<dyn PasswordHasher>,
}

impl<R: ShareRepository, U: UserRepository> UnlockShareAction<R, U> {
    pub fn new(shares: R, users: U) -> Self {
        UnlockShareAction {
            shares,
            users,
            hasher: Box::new(Argon2Hasher::default()),
        }
    }

    pub fn with_hasher(mut self, hasher: Box<dyn PasswordHasher>) -> Self {
        self.hasher = hasher;
        self
    }

    /// Returns the full view of a protected share once the supplied password
    /// verifies against the stored hash.
    ///
    /// Expired shares are absent here exactly as on the public path. A share
    /// without a password has nothing to unlock and reports
    /// `PasswordIncorrect`.
    pub async fn execute(&self, id: &str, password: &str) -> Result<ShareView, ShareError> {
        let share = self
            .shares
            .find_share(id)
            .await?
            .ok_or(ShareError::NotFound)?;
        if share.is_expired() {
            return Err(ShareError::NotFound);
        }

        let hash = share
            .password_hash
            .as_deref()
            .ok_or(ShareError::PasswordIncorrect)?;
        let verified = self.hasher.verify(password, hash).unwrap_or(false);
        if !verified {
            return Err(ShareError::PasswordIncorrect);
        }

        build_share_view(&self.users, &share).await
    }
}
