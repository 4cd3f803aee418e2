use crate::repository::{Role, ShareRepository};
use crate::ShareError;

/// Decides whether a user may view, edit or delete a share.
///
/// Ownership is exclusive and binary: either the caller is an admin, or a
/// share row must exist with the caller as its author. There is no shared
/// or collaborative access.
pub struct ShareAccessPolicy<R> {
    shares: R,
}

impl<R: ShareRepository> ShareAccessPolicy<R> {
    pub fn new(shares: R) -> Self {
        ShareAccessPolicy { shares }
    }

    /// Admins are granted without a store lookup.
    pub async fn can_access(
        &self,
        user_id: i64,
        share_id: &str,
        role: Role,
    ) -> Result<bool, ShareError> {
        if role.is_admin() {
            return Ok(true);
        }
        Ok(self
            .shares
            .find_share_for_author(share_id, user_id)
            .await?
            .is_some())
    }
}
