use crate::repository::{ShareRepository, UserRepository};
use crate::view::{build_share_view, ShareView};
use crate::ShareError;

/// Lists every share authored by a user.
pub struct ListSharesAction<R, U> {
    shares: R,
    users: U,
}

impl<R: ShareRepository, U: UserRepository> ListSharesAction<R, U> {
    pub fn new(shares: R, users: U) -> Self {
        ListSharesAction { shares, users }
    }

    /// Expired shares are included, unlike on the public read paths: owners
    /// can still see and manage them, with the countdown rendered as
    /// "Already expired".
    pub async fn execute(&self, user_id: i64) -> Result<Vec<ShareView>, ShareError> {
        let shares = self.shares.list_shares_for_author(user_id).await?;
        let mut views = Vec::with_capacity(shares.len());
        for share in &shares {
            views.push(build_share_view(&self.users, share).await?);
        }
        Ok(views)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{MockShareRepository, MockUserRepository, Share, User};
    use chrono::{Duration, Utc};

    fn share(id: &str, author_id: i64, expires_at: Option<chrono::DateTime<Utc>>) -> Share {
        Share {
            id: id.to_owned(),
            title: None,
            content: "content".to_owned(),
            password_hash: None,
            expires_at,
            author_id: Some(author_id),
            hide_author: false,
        }
    }

    #[tokio::test]
    async fn test_list_includes_expired_shares() {
        let shares = MockShareRepository::with_shares(vec![
            share("live_one", 1, None),
            share("dead_one", 1, Some(Utc::now() - Duration::days(1))),
            share("someone_", 2, None),
        ]);
        let users = MockUserRepository::with_users(vec![User::mock()]);
        let list = ListSharesAction::new(shares, users);

        let views = list.execute(1).await.unwrap();
        assert_eq!(views.len(), 2);

        let expired = views.iter().find(|v| v.id == "dead_one").unwrap();
        assert_eq!(expired.expires_in.as_deref(), Some("Already expired"));
    }

    #[tokio::test]
    async fn test_list_empty_for_user_without_shares() {
        let list = ListSharesAction::new(MockShareRepository::new(), MockUserRepository::new());
        let views = list.execute(1).await.unwrap();
        assert!(views.is_empty());
    }
}
