//! Credential hashing (bcrypt).

use thiserror::Error;

/// Fixed bcrypt work factor.
///
/// Deliberately slow so offline brute force stays expensive. The cost is
/// embedded in each digest, so changing it never invalidates stored hashes.
pub const BCRYPT_COST: u32 = 10;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("failed to hash password")]
    Hash,
}

/// One-way, salted hash of a plaintext password.
pub fn hash_password(plain: &str) -> Result<String, PasswordError> {
    bcrypt::hash(plain, BCRYPT_COST).map_err(|_| PasswordError::Hash)
}

/// Verify a plaintext password against a stored digest.
///
/// A malformed digest verifies as `false` rather than erroring, so callers
/// treat it exactly like a wrong password (no verification oracle).
pub fn verify_password(plain: &str, digest: &str) -> bool {
    bcrypt::verify(plain, digest).unwrap_or(false)
}
