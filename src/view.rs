//! Externally visible share representation.

use serde::{Deserialize, Serialize};

use crate::expiry::describe_remaining;
use crate::repository::{Share, UserRepository};
use crate::ShareError;

/// The plain-data record handed to the HTTP layer for any share read.
///
/// `expires_in` is a rendered countdown, never a raw instant; the stored
/// password hash never appears in any view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareView {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<String>,
    pub is_password_protected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    pub hide_author: bool,
}

/// Builds a view from a stored share, resolving the author name through the
/// user repository.
///
/// When `hide_author` is set the author identity is cleared without even
/// looking it up, so it can never leak regardless of the author relation.
pub(crate) async fn build_share_view<U: UserRepository>(
    users: &U,
    share: &Share,
) -> Result<ShareView, ShareError> {
    let author_name = match (share.hide_author, share.author_id) {
        (false, Some(author_id)) => users
            .find_user_by_id(author_id)
            .await?
            .map(|author| author.name),
        _ => None,
    };

    Ok(ShareView {
        id: share.id.clone(),
        title: share.title.clone(),
        content: share.content.clone(),
        expires_in: share.expires_at.map(describe_remaining),
        is_password_protected: share.is_password_protected(),
        author_name,
        hide_author: share.hide_author,
    })
}
