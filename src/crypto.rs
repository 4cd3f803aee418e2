//! Password hashing and opaque identifier generation.

use crate::ShareError;
use argon2::{Algorithm, Argon2, Params, PasswordVerifier, Version};
use password_hash::{PasswordHash, PasswordHasher as ArgonPasswordHasher, SaltString};
use rand::rngs::OsRng;
use rand::Rng;

/// Alphabet for opaque identifiers: alphanumerics plus underscore.
const ID_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_";

/// Trait for password hashing and verification.
///
/// The same hasher is used for user login passwords and per-share protection
/// passwords; the hash values are independent and never cross-checked.
///
/// # Example
///
/// ```rust
/// use sharebin::{Argon2Hasher, PasswordHasher};
///
/// let hasher = Argon2Hasher::default();
/// let hash = hasher.hash("mypassword").unwrap();
/// assert!(hasher.verify("mypassword", &hash).unwrap());
/// assert!(!hasher.verify("wrongpassword", &hash).unwrap());
/// ```
pub trait PasswordHasher: Send + Sync {
    /// Hash a password with a per-call random salt.
    ///
    /// # Errors
    ///
    /// Returns `ShareError::PasswordHashError` if hashing fails. This is
    /// always fatal to the calling operation.
    fn hash(&self, password: &str) -> Result<String, ShareError>;

    /// Verify a password against a stored hash.
    ///
    /// Returns `Ok(false)` on mismatch, never an error; errors indicate a
    /// malformed hash. Comparison is constant-time inside the verifier.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, ShareError>;
}

/// Argon2id password hasher with configurable parameters.
#[derive(Debug, Clone)]
pub struct Argon2Hasher {
    /// Memory cost in KiB
    memory_cost: u32,
    /// Number of iterations
    time_cost: u32,
    /// Degree of parallelism
    parallelism: u32,
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self {
            memory_cost: 19456, // 19 MiB - argon2 default
            time_cost: 2,
            parallelism: 1,
        }
    }
}

impl Argon2Hasher {
    /// Creates a hasher with custom parameters (memory in KiB, iterations,
    /// threads).
    #[must_use]
    pub fn new(memory_cost: u32, time_cost: u32, parallelism: u32) -> Self {
        Self {
            memory_cost,
            time_cost,
            parallelism,
        }
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String, ShareError> {
        let salt = SaltString::generate(&mut OsRng);
        let params = Params::new(self.memory_cost, self.time_cost, self.parallelism, None)
            .map_err(|_| ShareError::PasswordHashError)?;
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|_| ShareError::PasswordHashError)
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, ShareError> {
        let parsed = PasswordHash::new(hash).map_err(|_| ShareError::PasswordHashError)?;

        // Verification uses params from the hash, not from config
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

/// Generates an opaque identifier of the given length.
///
/// Drawn uniformly from `a-z A-Z 0-9 _` using the OS random source. Session
/// ids are bearer credentials, so the generator is cryptographically secure;
/// share ids use the same source since it costs nothing.
///
/// # Example
///
/// ```rust
/// use sharebin::crypto::generate_id;
///
/// let id = generate_id(7);
/// assert_eq!(id.len(), 7);
/// ```
pub fn generate_id(length: usize) -> String {
    let mut rng = OsRng;
    (0..length)
        .map(|_| char::from(ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id_length() {
        assert_eq!(generate_id(7).len(), 7);
        assert_eq!(generate_id(10).len(), 10);
        assert_eq!(generate_id(32).len(), 32);
    }

    #[test]
    fn test_generate_id_unique() {
        let a = generate_id(10);
        let b = generate_id(10);
        assert_ne!(a, b);
    }

    #[test]
    fn test_generate_id_alphabet() {
        let id = generate_id(200);
        assert!(id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_'));
    }

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hasher = Argon2Hasher::default();
        let hash = hasher.hash("hunter2").unwrap();
        assert!(hasher.verify("hunter2", &hash).unwrap());
        assert!(!hasher.verify("hunter3", &hash).unwrap());
    }

    #[test]
    fn test_hash_salted_per_call() {
        let hasher = Argon2Hasher::default();
        let first = hasher.hash("same-password").unwrap();
        let second = hasher.hash("same-password").unwrap();
        assert_ne!(first, second);
        assert!(hasher.verify("same-password", &first).unwrap());
        assert!(hasher.verify("same-password", &second).unwrap());
    }

    #[test]
    fn test_verify_malformed_hash() {
        let hasher = Argon2Hasher::default();
        let result = hasher.verify("password", "not-a-phc-string");
        assert_eq!(result, Err(ShareError::PasswordHashError));
    }
}
