//! Engine configuration.
//!
//! Tunables are collected here so the HTTP layer can set them at
//! construction time instead of relying on scattered constants.
//!
//! # Example
//!
//! ```rust
//! use sharebin::ShareConfig;
//! use chrono::Duration;
//!
//! let config = ShareConfig {
//!     session_lifetime: Duration::days(1),
//!     ..Default::default()
//! };
//! ```

use chrono::Duration;

#[derive(Debug, Clone)]
pub struct ShareConfig {
    /// How long a login session remains valid after creation.
    ///
    /// Default: 7 days
    pub session_lifetime: Duration,

    /// Length of generated share ids.
    ///
    /// 7 characters over a 63-symbol alphabet. Collisions are a product
    /// trade-off: ids must stay short enough to type from a QR code.
    pub share_id_length: usize,

    /// Length of generated session ids.
    ///
    /// A session id is a bearer credential, so it is longer than a share id
    /// and always drawn from the OS random source.
    pub session_id_length: usize,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            session_lifetime: Duration::days(7),
            share_id_length: 7,
            session_id_length: 10,
        }
    }
}

impl ShareConfig {
    pub fn new() -> Self {
        Self::default()
    }
}
