//! Password hashing.
//!
//! Passwords are wrapped in a zeroizing container so the plaintext is wiped
//! from memory when dropped. Hashes use Argon2id with the library defaults.

use argon2::{
    Argon2,
    password_hash::{Error as HashError, PasswordHash, PasswordHasher, PasswordVerifier,
        SaltString, rand_core::OsRng},
};
use thiserror::Error;
use zeroize::Zeroizing;

/// Minimum accepted password length, in bytes.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// A plaintext password.
pub struct Password(Zeroizing<String>);

impl Password {
    #[must_use]
    pub fn new(raw: String) -> Self {
        Self(Zeroizing::new(raw))
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_too_short(&self) -> bool {
        self.0.len() < MIN_PASSWORD_LENGTH
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

#[derive(Debug, Error)]
#[error("password hashing failed")]
pub struct PasswordError(#[source] HashError);

pub(crate) fn hash_password(password: &Password) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.expose().as_bytes(), &salt)
        .map_err(PasswordError)?;

    Ok(hash.to_string())
}

pub(crate) fn verify_password(password: &Password, hash: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(hash).map_err(PasswordError)?;

    match Argon2::default().verify_password(password.expose().as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(HashError::Password) => Ok(false),
        Err(e) => Err(PasswordError(e)),
    }
}
