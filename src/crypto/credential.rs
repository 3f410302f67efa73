//! PIN credentials
//!
//! Every PIN check in the crate goes through [`Credential::verify`], so the
//! comparison strategy can change without touching callers. Plaintext mode
//! reproduces the simulator's exact-match behaviour; Argon2id mode stores
//! only a PHC hash string.

use std::fmt;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::error::{AtmError, AtmResult};

/// How seed PINs are stored and checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PinVerification {
    /// Exact string comparison against the stored PIN
    #[default]
    Plaintext,
    /// Argon2id hash with a random salt per account
    Argon2,
}

impl fmt::Display for PinVerification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plaintext => write!(f, "plaintext"),
            Self::Argon2 => write!(f, "argon2"),
        }
    }
}

enum Secret {
    Plain(Zeroizing<String>),
    Hashed(String),
}

/// A stored PIN that can only be checked, never read back
pub struct Credential {
    secret: Secret,
}

impl Credential {
    /// Store the PIN as-is (zeroized when dropped)
    pub fn plaintext(pin: impl Into<String>) -> Self {
        Self {
            secret: Secret::Plain(Zeroizing::new(pin.into())),
        }
    }

    /// Hash the PIN with Argon2id
    pub fn argon2(pin: &str) -> AtmResult<Self> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(pin.as_bytes(), &salt)
            .map_err(|e| AtmError::Credential(format!("PIN hashing failed: {}", e)))?;

        Ok(Self {
            secret: Secret::Hashed(hash.to_string()),
        })
    }

    /// Build a credential using the configured scheme
    pub fn from_pin(pin: &str, scheme: PinVerification) -> AtmResult<Self> {
        match scheme {
            PinVerification::Plaintext => Ok(Self::plaintext(pin)),
            PinVerification::Argon2 => Self::argon2(pin),
        }
    }

    /// Check a candidate PIN
    pub fn verify(&self, candidate: &str) -> bool {
        match &self.secret {
            Secret::Plain(pin) => pin.as_bytes() == candidate.as_bytes(),
            Secret::Hashed(phc) => match PasswordHash::new(phc) {
                Ok(parsed) => Argon2::default()
                    .verify_password(candidate.as_bytes(), &parsed)
                    .is_ok(),
                Err(_) => false,
            },
        }
    }

    pub fn scheme(&self) -> PinVerification {
        match self.secret {
            Secret::Plain(_) => PinVerification::Plaintext,
            Secret::Hashed(_) => PinVerification::Argon2,
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential({}, [REDACTED])", self.scheme())
    }
}
