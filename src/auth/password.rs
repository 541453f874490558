//! Password hashing primitive
//!
//! Argon2 with a per-hash random salt. Verification cost is the anchor for
//! the uniform-failure behavior in [`crate::auth::principal`].

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

/// Hash a secret using argon2
pub fn hash(secret: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let digest = argon2.hash_password(secret.as_bytes(), &salt)?;
    Ok(digest.to_string())
}

/// Verify a secret against a stored digest
///
/// An unparseable digest verifies as false rather than erroring; the store
/// only ever holds digests produced by [`hash`].
pub fn verify(secret: &str, digest: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(digest) else {
        return false;
    };
    Argon2::default()
        .verify_password(secret.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_roundtrip() {
        let digest = hash("s3cret").unwrap();
        assert!(verify("s3cret", &digest));
        assert!(!verify("wrong", &digest));
    }

    #[test]
    fn salts_are_unique_per_hash() {
        let a = hash("same").unwrap();
        let b = hash("same").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn garbage_digest_never_verifies() {
        assert!(!verify("anything", "not-a-phc-string"));
    }
}
