//! Password value object - Domain layer password handling.
//!
//! The plaintext is first reduced to a fixed-length SHA-256 hex digest, and
//! that digest is what Argon2 hashes and verifies. Neither the plaintext nor
//! the digest leaves this module.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sha2::{Digest, Sha256};

use crate::config::MIN_PASSWORD_LENGTH;
use crate::errors::{AppError, AppResult};

/// Hashed password as stored in `password_hash`.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output (security)
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Create a new password by hashing the plain text.
    ///
    /// # Errors
    /// Returns validation error if password is too short.
    pub fn new(plain_text: &str) -> AppResult<Self> {
        if plain_text.chars().count() < MIN_PASSWORD_LENGTH as usize {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        let hash = Self::hash(&Self::prehash(plain_text))?;
        Ok(Self { hash })
    }

    /// Create a Password from an existing hash (from database).
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plain text password against this hash.
    pub fn verify(&self, plain_text: &str) -> bool {
        Self::verify_hash(&Self::prehash(plain_text), &self.hash).unwrap_or(false)
    }

    /// Burn one full hash computation without producing anything.
    ///
    /// Used on the login path when no account matches, so that the response
    /// time is the same whether or not the user name exists.
    pub fn simulate_verify(plain_text: &str) {
        let _ = Self::hash(&Self::prehash(plain_text));
    }

    /// Fixed-length (64 hex chars) SHA-256 digest of the plain text.
    fn prehash(plain_text: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(plain_text.as_bytes());
        hex::encode(hasher.finalize())
    }

    fn hash(digest: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2()
            .hash_password(digest.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }

    fn verify_hash(digest: &str, hash: &str) -> AppResult<bool> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| AppError::internal(format!("Invalid hash format: {}", e)))?;
        Ok(Self::argon2()
            .verify_password(digest.as_bytes(), &parsed)
            .is_ok())
    }

    #[inline]
    fn argon2() -> Argon2<'static> {
        Argon2::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_and_verify() {
        let plain = "SecurePassword123!";
        let password = Password::new(plain).unwrap();

        assert!(password.verify(plain));
        assert!(!password.verify("WrongPassword123"));
    }

    #[test]
    fn test_password_from_hash() {
        let plain = "TestPassword123";
        let password = Password::new(plain).unwrap();
        let hash = password.as_str().to_string();

        let restored = Password::from_hash(hash);
        assert!(restored.verify(plain));
    }

    #[test]
    fn test_same_password_different_salts() {
        let plain = "SamePassword123";
        let pass1 = Password::new(plain).unwrap();
        let pass2 = Password::new(plain).unwrap();

        assert_ne!(pass1.as_str(), pass2.as_str());
        assert!(pass1.verify(plain));
        assert!(pass2.verify(plain));
    }

    #[test]
    fn test_stored_hash_never_contains_plaintext_or_digest() {
        let plain = "PlainSecret99";
        let password = Password::new(plain).unwrap();

        assert!(password.as_str().starts_with("$argon2"));
        assert!(!password.as_str().contains(plain));
        assert!(!password.as_str().contains(&Password::prehash(plain)));
    }

    #[test]
    fn test_prehash_is_fixed_length() {
        assert_eq!(Password::prehash("a").len(), 64);
        assert_eq!(Password::prehash(&"x".repeat(500)).len(), 64);
    }

    #[test]
    fn test_debug_is_redacted() {
        let password = Password::new("Redacted123").unwrap();
        let printed = format!("{:?}", password);
        assert!(printed.contains("[REDACTED]"));
        assert!(!printed.contains("argon2"));
    }

    #[test]
    fn test_password_too_short() {
        assert!(matches!(Password::new("short"), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_malformed_hash_never_verifies() {
        let password = Password::from_hash("not-a-phc-string".to_string());
        assert!(!password.verify("anything1"));
    }
}
