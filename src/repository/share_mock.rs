#![allow(clippy::unwrap_used)]

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::ShareError;

use super::share::{Share, ShareChanges, ShareRepository};

#[derive(Clone, Default)]
pub struct MockShareRepository {
    pub shares: Arc<Mutex<Vec<Share>>>,
}

impl MockShareRepository {
    pub fn new() -> Self {
        Self {
            shares: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn with_shares(shares: Vec<Share>) -> Self {
        Self {
            shares: Arc::new(Mutex::new(shares)),
        }
    }
}

fn apply_changes(share: &mut Share, changes: &ShareChanges) {
    share.title = changes.title.clone();
    share.content = changes.content.clone();
    if let Some(password_hash) = &changes.password_hash {
        share.password_hash = password_hash.clone();
    }
    if let Some(expires_at) = changes.expires_at {
        share.expires_at = expires_at;
    }
    share.hide_author = changes.hide_author;
}

#[async_trait]
impl ShareRepository for MockShareRepository {
    async fn create_share(&self, share: &Share) -> Result<(), ShareError> {
        let mut shares = self.shares.lock().unwrap();
        shares.push(share.clone());
        Ok(())
    }

    async fn find_share(&self, id: &str) -> Result<Option<Share>, ShareError> {
        let shares = self.shares.lock().unwrap();
        Ok(shares.iter().find(|s| s.id == id).cloned())
    }

    async fn find_share_for_author(
        &self,
        id: &str,
        author_id: i64,
    ) -> Result<Option<Share>, ShareError> {
        let shares = self.shares.lock().unwrap();
        Ok(shares
            .iter()
            .find(|s| s.id == id && s.author_id == Some(author_id))
            .cloned())
    }

    async fn list_shares_for_author(&self, author_id: i64) -> Result<Vec<Share>, ShareError> {
        let shares = self.shares.lock().unwrap();
        Ok(shares
            .iter()
            .filter(|s| s.author_id == Some(author_id))
            .cloned()
            .collect())
    }

    async fn update_share(
        &self,
        id: &str,
        author_filter: Option<i64>,
        changes: &ShareChanges,
    ) -> Result<u64, ShareError> {
        let mut shares = self.shares.lock().unwrap();
        let mut matched = 0;
        for share in shares.iter_mut() {
            if share.id != id {
                continue;
            }
            if let Some(author_id) = author_filter {
                if share.author_id != Some(author_id) {
                    continue;
                }
            }
            apply_changes(share, changes);
            matched += 1;
        }
        Ok(matched)
    }

    async fn delete_share(&self, id: &str, author_filter: Option<i64>) -> Result<u64, ShareError> {
        let mut shares = self.shares.lock().unwrap();
        let len_before = shares.len();
        shares.retain(|s| {
            s.id != id
                || match author_filter {
                    Some(author_id) => s.author_id != Some(author_id),
                    None => false,
                }
        });
        Ok((len_before - shares.len()) as u64)
    }
}
