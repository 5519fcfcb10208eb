//! `fleet-secrets check-email` / `check-alnum`: validate a value.
//!
//! Exit status is the result: 0 when valid, 1 with a message otherwise.

use crate::cli::output;
use crate::errors::{Result, SecretsError};
use crate::validate::{is_alphanumeric, is_valid_email};

/// Execute `fleet-secrets check-email`.
pub fn execute_email(email: &str) -> Result<()> {
    if is_valid_email(email) {
        output::success(&format!("'{email}' is a valid email address"));
        Ok(())
    } else {
        Err(SecretsError::CommandFailed(format!(
            "'{email}' is not a valid email address"
        )))
    }
}

/// Execute `fleet-secrets check-alnum`.
pub fn execute_alnum(value: &str) -> Result<()> {
    if is_alphanumeric(value) {
        output::success(&format!("'{value}' is alphanumeric"));
        Ok(())
    } else {
        Err(SecretsError::CommandFailed(format!(
            "'{value}' contains characters other than letters and numbers"
        )))
    }
}
