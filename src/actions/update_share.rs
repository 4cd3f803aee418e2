use serde::Deserialize;

use super::optional_field;
use crate::crypto::{Argon2Hasher, PasswordHasher};
use crate::expiry::compute_expiry;
use crate::repository::{Role, ShareChanges, ShareRepository};
use crate::ShareError;

/// Sentinel for "leave the expiration untouched".
pub const EXPIRY_NO_CHANGE: &str = "no-change";

/// Edit submission for an existing share.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareEdit {
    #[serde(default)]
    pub title: Option<String>,
    pub content: String,
    /// The password is only touched when this flag is asserted; an empty
    /// new password then clears protection.
    #[serde(default)]
    pub set_password: bool,
    #[serde(default)]
    pub password: Option<String>,
    /// Expiration spec, or `"no-change"` to keep the current one.
    pub expire_in: String,
    #[serde(default)]
    pub hide_author: bool,
}

pub struct UpdateShareAction<R> {
    shares: R,
    hasher: Box<dyn PasswordHasher>,
}

impl<R: ShareRepository> UpdateShareAction<R> {
    pub fn new(shares: R) -> Self {
        UpdateShareAction {
            shares,
            hasher: Box::new(Argon2Hasher::default()),
        }
    }

    pub fn with_hasher(mut self, hasher: Box<dyn PasswordHasher>) -> Self {
        self.hasher = hasher;
        self
    }

    /// Applies an edit to a share.
    ///
    /// Ownership is enforced at the query level: the update only touches the
    /// row matching both id and author (admins match on id alone). When no
    /// row matches this reports `NotFound` rather than silently succeeding.
    pub async fn execute(
        &self,
        id: &str,
        user_id: i64,
        role: Role,
        edit: ShareEdit,
    ) -> Result<(), ShareError> {
        let password_hash = if edit.set_password {
            match edit.password.as_deref() {
                Some(password) if !password.is_empty() => {
                    Some(Some(self.hasher.hash(password)?))
                }
                _ => Some(None),
            }
        } else {
            None
        };

        let expires_at = if edit.expire_in == EXPIRY_NO_CHANGE {
            None
        } else {
            Some(compute_expiry(&edit.expire_in)?)
        };

        let changes = ShareChanges {
            title: optional_field(edit.title),
            content: edit.content,
            password_hash,
            expires_at,
            hide_author: edit.hide_author,
        };

        let author_filter = if role.is_admin() { None } else { Some(user_id) };
        let matched = self.shares.update_share(id, author_filter, &changes).await?;
        if matched == 0 {
            return Err(ShareError::NotFound);
        }
        Ok(())
    }
}
