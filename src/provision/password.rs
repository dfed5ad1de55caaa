//! Admin credential hashing.
//!
//! Argon2id with the crate's default parameters and a random per-hash salt.
//! The PHC string stored on the user row embeds algorithm, parameters, and
//! salt, so verification needs no side table.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

use super::ProvisionError;

/// Hash a plaintext credential into a PHC-format string.
pub fn hash_password(plain: &str) -> Result<String, ProvisionError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| ProvisionError::Hash(err.to_string()))
}

/// Verify a plaintext credential against a stored PHC-format hash.
///
/// A non-matching password is `Ok(false)`; a malformed hash is an error.
pub fn verify_password(plain: &str, hash: &str) -> Result<bool, ProvisionError> {
    let parsed = PasswordHash::new(hash).map_err(|err| ProvisionError::Hash(err.to_string()))?;
    match Argon2::default().verify_password(plain.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(err) => Err(ProvisionError::Hash(err.to_string())),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_hash_and_verify_round_trip() {
        let hash = hash_password("hunter2").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("hunter2", &hash).unwrap());
        assert!(!verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted_per_call() {
        let a = hash_password("hunter2").unwrap();
        let b = hash_password("hunter2").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        assert!(verify_password("hunter2", "not-a-phc-string").is_err());
    }
}
