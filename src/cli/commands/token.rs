//! `fleet-secrets token`: print a random alphanumeric token.

use crate::cli::output;
use crate::config::Settings;
use crate::crypto::{generate_token_with, TokenSampling};
use crate::errors::{Result, SecretsError};

/// Execute the `token` command.
///
/// `--length` overrides `token_length`; `--uniform` forces rejection
/// sampling even when the config asks for modulo mapping.
pub fn execute(settings: &Settings, length: Option<usize>, uniform: bool) -> Result<()> {
    let length = length.unwrap_or(settings.token_length);
    if length == 0 {
        return Err(SecretsError::CommandFailed(
            "token length must be at least 1".into(),
        ));
    }

    let sampling = if uniform {
        TokenSampling::Uniform
    } else {
        settings.token_sampling()
    };

    let token = generate_token_with(length, sampling)?;
    output::value(&token);

    Ok(())
}
