use crate::repository::{ShareRepository, UserRepository};
use crate::view::{build_share_view, ShareView};
use crate::ShareError;

/// Public, unauthenticated share read.
pub struct GetShareAction<R, U> {
    shares: R,
    users: U,
}

impl<R: ShareRepository, U: UserRepository> GetShareAction<R, U> {
    pub fn new(shares: R, users: U) -> Self {
        GetShareAction { shares, users }
    }

    /// Returns the public view of a share.
    ///
    /// Expired shares are absent on this path. A protected share is still
    /// described (so callers can prompt for the password), but its content
    /// is withheld until unlocked.
    pub async fn execute(&self, id: &str) -> Result<ShareView, ShareError> {
        let share = self
            .shares
            .find_share(id)
            .await?
            .ok_or(ShareError::NotFound)?;
        if share.is_expired() {
            return Err(ShareError::NotFound);
        }

        let mut view = build_share_view(&self.users, &share).await?;
        if view.is_password_protected {
            view.content = String::new();
        }
        Ok(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{MockShareRepository, MockUserRepository, Share, User};
    use chrono::{Duration, Utc};

    fn share(id: &str) -> Share {
        Share {
            id: id.to_owned(),
            title: Some("notes".to_owned()),
            content: "hello".to_owned(),
            password_hash: None,
            expires_at: None,
            author_id: None,
            hide_author: false,
        }
    }

    #[tokio::test]
    async fn test_get_public_share() {
        let shares = MockShareRepository::with_shares(vec![share("abc1234")]);
        let action = GetShareAction::new(shares, MockUserRepository::new());

        let view = action.execute("abc1234").await.unwrap();
        assert_eq!(view.content, "hello");
        assert!(!view.is_password_protected);
        assert_eq!(view.expires_in, None);
    }

    #[tokio::test]
    async fn test_get_missing_share() {
        let action =
            GetShareAction::new(MockShareRepository::new(), MockUserRepository::new());
        let result = action.execute("missing").await;
        assert_eq!(result, Err(ShareError::NotFound));
    }

    #[tokio::test]
    async fn test_get_expired_share_is_not_found() {
        let mut expired = share("abc1234");
        expired.expires_at = Some(Utc::now() - Duration::seconds(1));
        let shares = MockShareRepository::with_shares(vec![expired]);
        let action = GetShareAction::new(shares, MockUserRepository::new());

        let result = action.execute("abc1234").await;
        assert_eq!(result, Err(ShareError::NotFound));
    }

    #[tokio::test]
    async fn test_get_protected_share_withholds_content() {
        let mut protected = share("abc1234");
        protected.password_hash = Some("$argon2id$fake".to_owned());
        let shares = MockShareRepository::with_shares(vec![protected]);
        let action = GetShareAction::new(shares, MockUserRepository::new());

        let view = action.execute("abc1234").await.unwrap();
        assert!(view.is_password_protected);
        assert_eq!(view.content, "");
        // Metadata still comes through so the caller can prompt.
        assert_eq!(view.title.as_deref(), Some("notes"));
    }

    #[tokio::test]
    async fn test_get_share_with_hidden_author() {
        let mut hidden = share("abc1234");
        hidden.author_id = Some(1);
        hidden.hide_author = true;
        let shares = MockShareRepository::with_shares(vec![hidden]);
        let users = MockUserRepository::with_users(vec![User::mock()]);
        let action = GetShareAction::new(shares, users);

        let view = action.execute("abc1234").await.unwrap();
        assert_eq!(view.author_name, None);
    }
}
