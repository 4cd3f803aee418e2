use super::access::ShareAccessPolicy;
use crate::repository::{Role, ShareRepository, UserRepository};
use crate::view::{build_share_view, ShareView};
use crate::ShareError;

/// Owner (or admin) share read, for the edit screen.
pub struct GetShareForEditAction<R, U> {
    shares: R,
    users: U,
    access: ShareAccessPolicy<R>,
}

impl<R: ShareRepository + Clone, U: UserRepository> GetShareForEditAction<R, U> {
    pub fn new(shares: R, users: U) -> Self {
        GetShareForEditAction {
            access: ShareAccessPolicy::new(shares.clone()),
            shares,
            users,
        }
    }

    /// Returns the full view of an owned share.
    ///
    /// Bypasses password and expiry suppression: owners see their expired
    /// and protected shares in full so they can still edit or delete them.
    /// Denied access reports `NotFound`, never revealing whether the share
    /// exists.
    pub async fn execute(
        &self,
        id: &str,
        user_id: i64,
        role: Role,
    ) -> Result<ShareView, ShareError> {
        if !self.access.can_access(user_id, id, role).await? {
            return Err(ShareError::NotFound);
        }

        let share = self
            .shares
            .find_share(id)
            .await?
            .ok_or(ShareError::NotFound)?;
        build_share_view(&self.users, &share).await
    }
}
