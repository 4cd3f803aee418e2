use crate::repository::{Role, ShareRepository};
use crate::ShareError;

pub struct DeleteShareAction<R> {
    shares: R,
}

impl<R: ShareRepository> DeleteShareAction<R> {
    pub fn new(shares: R) -> Self {
        DeleteShareAction { shares }
    }

    /// Deletes a share owned by the caller (admins delete any share).
    ///
    /// Matching happens in the delete statement itself; zero rows deleted
    /// reports `NotFound` so the caller can render the outcome correctly.
    pub async fn execute(&self, id: &str, user_id: i64, role: Role) -> Result<(), ShareError> {
        let author_filter = if role.is_admin() { None } else { Some(user_id) };
        let deleted = self.shares.delete_share(id, author_filter).await?;
        if deleted == 0 {
            return Err(ShareError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{MockShareRepository, Share};

    fn owned_share(id: &str, author_id: i64) -> Share {
        Share {
            id: id.to_owned(),
            title: None,
            content: "content".to_owned(),
            password_hash: None,
            expires_at: None,
            author_id: Some(author_id),
            hide_author: false,
        }
    }

    #[tokio::test]
    async fn test_owner_deletes_share() {
        let shares = MockShareRepository::with_shares(vec![owned_share("abc1234", 1)]);
        let delete = DeleteShareAction::new(shares.clone());

        delete.execute("abc1234", 1, Role::User).await.unwrap();
        assert!(shares.find_share("abc1234").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_non_owner_cannot_delete() {
        let shares = MockShareRepository::with_shares(vec![owned_share("abc1234", 1)]);
        let delete = DeleteShareAction::new(shares.clone());

        let result = delete.execute("abc1234", 2, Role::User).await;
        assert_eq!(result, Err(ShareError::NotFound));
        assert!(shares.find_share("abc1234").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_admin_deletes_any_share() {
        let shares = MockShareRepository::with_shares(vec![owned_share("abc1234", 1)]);
        let delete = DeleteShareAction::new(shares.clone());

        delete.execute("abc1234", 99, Role::Admin).await.unwrap();
        assert!(shares.find_share("abc1234").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_share() {
        let delete = DeleteShareAction::new(MockShareRepository::new());
        let result = delete.execute("missing1", 1, Role::User).await;
        assert_eq!(result, Err(ShareError::NotFound));
    }
}
