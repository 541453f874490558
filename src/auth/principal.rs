//! Principal Store
//!
//! In-memory store holding the single administrative principal provisioned
//! at startup. There is no registration and no password change; the store
//! is immutable for the lifetime of the process.

use uuid::Uuid;

use crate::auth::password;
use crate::utils::{AppError, AppResult};

/// Role granted to the provisioned operational admin
pub const ROLE_ACTUATOR_ADMIN: &str = "ACTUATOR_ADMIN";

/// Authenticated identity injected into request extensions
#[derive(Debug, Clone)]
pub struct Principal {
    pub username: String,
    pub role: String,
}

#[derive(Debug)]
struct StoredPrincipal {
    username: String,
    hash_pass: String,
    role: String,
}

/// Immutable credential store
#[derive(Debug)]
pub struct PrincipalStore {
    principals: Vec<StoredPrincipal>,
    /// Digest burned for unknown usernames so both failure paths perform
    /// exactly one verification
    decoy_hash: String,
}

impl PrincipalStore {
    /// Provision the store with a single principal, hashing its secret
    pub fn bootstrap(username: &str, password: &str, role: &str) -> AppResult<Self> {
        let hash_pass = password::hash(password)
            .map_err(|e| AppError::internal(format!("Failed to hash admin secret: {e}")))?;
        let decoy_hash = password::hash(&Uuid::new_v4().to_string())
            .map_err(|e| AppError::internal(format!("Failed to hash decoy secret: {e}")))?;

        Ok(Self {
            principals: vec![StoredPrincipal {
                username: username.to_string(),
                hash_pass,
                role: role.to_string(),
            }],
            decoy_hash,
        })
    }

    /// Verify a username/password pair
    ///
    /// Unknown-user and wrong-secret both return the same
    /// [`AppError::InvalidCredentials`], and both cost one Argon2
    /// verification.
    pub fn authenticate(&self, username: &str, password: &str) -> AppResult<Principal> {
        match self.principals.iter().find(|p| p.username == username) {
            Some(stored) => {
                if password::verify(password, &stored.hash_pass) {
                    Ok(Principal {
                        username: stored.username.clone(),
                        role: stored.role.clone(),
                    })
                } else {
                    Err(AppError::invalid_credentials())
                }
            }
            None => {
                let _ = password::verify(password, &self.decoy_hash);
                Err(AppError::invalid_credentials())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> PrincipalStore {
        PrincipalStore::bootstrap("actuator", "actuator", ROLE_ACTUATOR_ADMIN).unwrap()
    }

    #[test]
    fn authenticates_provisioned_principal() {
        let principal = store().authenticate("actuator", "actuator").unwrap();
        assert_eq!(principal.username, "actuator");
        assert_eq!(principal.role, ROLE_ACTUATOR_ADMIN);
    }

    #[test]
    fn rejects_wrong_password() {
        let err = store().authenticate("actuator", "nope").unwrap_err();
        assert!(matches!(err, AppError::InvalidCredentials));
    }

    #[test]
    fn unknown_user_fails_identically_to_wrong_password() {
        let s = store();
        let unknown = s.authenticate("ghost", "actuator").unwrap_err();
        let wrong = s.authenticate("actuator", "nope").unwrap_err();
        assert_eq!(unknown.to_string(), wrong.to_string());
    }
}
