//! Password hashing and verification.
//!
//! Plaintext passwords never reach the database: callers hash here and store
//! only the bcrypt output. Verification is the inverse used by login flows.

/// bcrypt cost factor for all password hashes.
///
/// A salted hash at this cost takes tens of milliseconds to compute, which is
/// the point: brute-forcing stolen hashes stays expensive.
pub const HASH_COST: u32 = 10;

/// Hash a plaintext password with a fresh salt.
///
/// # Errors
///
/// Returns `bcrypt::BcryptError` if hashing fails.
pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(password, HASH_COST)
}

/// Verify a plaintext password against a stored bcrypt hash.
///
/// # Errors
///
/// Returns `bcrypt::BcryptError` if the stored hash is malformed.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, bcrypt::BcryptError> {
    bcrypt::verify(password, password_hash)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_verifies_against_plaintext() {
        let hash = hash_password("admin0617").unwrap();
        assert!(verify_password("admin0617", &hash).unwrap());
    }

    #[test]
    fn test_hash_is_not_the_plaintext() {
        let hash = hash_password("admin0617").unwrap();
        assert_ne!(hash, "admin0617");
        assert!(hash.starts_with("$2"));
    }

    #[test]
    fn test_wrong_password_rejected() {
        let hash = hash_password("admin0617").unwrap();
        assert!(!verify_password("admin0618", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("admin0617").unwrap();
        let b = hash_password("admin0617").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_hash_errors() {
        assert!(verify_password("admin0617", "not-a-bcrypt-hash").is_err());
    }
}
