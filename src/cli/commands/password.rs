//! `fleet-secrets hash-password` / `verify-password`.
//!
//! The password comes from `FLEET_SECRETS_PASSWORD` when set, otherwise
//! from a hidden prompt.

use crate::cli::{output, prompt_password};
use crate::crypto::{hash_password, verify_password};
use crate::errors::{Result, SecretsError};

/// Execute `fleet-secrets hash-password`: print an Argon2id PHC string.
pub fn execute_hash() -> Result<()> {
    let password = prompt_password(true)?;
    let hash = hash_password(&password)?;
    output::value(&hash);
    Ok(())
}

/// Execute `fleet-secrets verify-password`: fail unless the password matches.
pub fn execute_verify(hash: &str) -> Result<()> {
    let password = prompt_password(false)?;

    if verify_password(&password, hash) {
        output::success("Password matches.");
        Ok(())
    } else {
        Err(SecretsError::CommandFailed(
            "password does not match the stored hash".into(),
        ))
    }
}
