//! `fleet-secrets decrypt`: open a base64 envelope and print the value.

use zeroize::Zeroizing;

use crate::cli::{load_key, output, Cli};
use crate::config::Settings;
use crate::crypto::{decode_string, from_base64};
use crate::errors::Result;

/// Execute the `decrypt` command.
pub fn execute(cli: &Cli, settings: &Settings, envelope: &str) -> Result<()> {
    let key = load_key(cli, settings)?;
    let envelope = from_base64(envelope)?;

    let plaintext = Zeroizing::new(decode_string(&envelope, &key)?);
    output::value(&plaintext);

    Ok(())
}
