//! One action per engine operation.
//!
//! Each action owns its repositories (injected at construction, no ambient
//! globals) and exposes a single `execute` method taking and returning plain
//! data records, so the HTTP layer stays free of engine types.

pub mod access;
pub mod create_share;
pub mod delete_share;
pub mod get_share;
pub mod get_share_for_edit;
pub mod list_shares;
pub mod login;
pub mod register_user;
pub mod resolve_session;
pub mod unlock_share;
pub mod update_share;

pub use access::ShareAccessPolicy;
pub use create_share::{CreateShareAction, NewShare};
pub use delete_share::DeleteShareAction;
pub use get_share::GetShareAction;
pub use get_share_for_edit::GetShareForEditAction;
pub use list_shares::ListSharesAction;
pub use login::LoginAction;
pub use register_user::RegisterUserAction;
pub use resolve_session::ResolveSessionAction;
pub use unlock_share::UnlockShareAction;
pub use update_share::{ShareEdit, UpdateShareAction};

/// Empty strings on the boundary become absent fields, never stored as "".
pub(crate) fn optional_field(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
