//! One-way password hashing with Argon2id.
//!
//! Hashes are PHC strings (`$argon2id$v=19$m=..,t=..,p=..$salt$hash`) so
//! the work factor and salt travel with the hash. The work factor is
//! fixed to the argon2 crate's defaults; stored hashes with other
//! parameters still verify because verification reads them from the
//! string.

use argon2::password_hash::SaltString;
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};
use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::errors::{Result, SecretsError};

/// Salt length in bytes (128 bits).
const SALT_LEN: usize = 16;

fn hasher() -> Argon2<'static> {
    Argon2::new(Algorithm::Argon2id, Version::V0x13, Params::default())
}

/// Hash `password` with a fresh random salt and return the PHC string.
pub fn hash_password(password: &str) -> Result<String> {
    let mut salt_bytes = [0u8; SALT_LEN];
    OsRng
        .try_fill_bytes(&mut salt_bytes)
        .map_err(|e| SecretsError::RandomSource(format!("generating salt: {e}")))?;

    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|e| SecretsError::Hashing(format!("encoding salt: {e}")))?;

    let hash = hasher()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| SecretsError::Hashing(e.to_string()))?
        .to_string();

    tracing::debug!("hashed password");
    Ok(hash)
}

/// Check `password` against a stored PHC hash.
///
/// Returns `false` for a mismatch and for a hash string that cannot be
/// parsed. The comparison itself is constant-time inside argon2.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let parsed = match PasswordHash::new(stored_hash) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::debug!(error = %e, "stored password hash is malformed");
            return false;
        }
    };

    hasher()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
