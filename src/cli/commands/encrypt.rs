//! `fleet-secrets encrypt`: seal a value and print the base64 envelope.

use crate::cli::{load_key, output, read_secret_value, Cli};
use crate::config::Settings;
use crate::crypto::{encode_string, to_base64};
use crate::errors::Result;

/// Execute the `encrypt` command.
pub fn execute(cli: &Cli, settings: &Settings, value: Option<&str>) -> Result<()> {
    let key = load_key(cli, settings)?;
    let plaintext = read_secret_value(value)?;

    let envelope = encode_string(&plaintext, &key)?;
    output::value(&to_base64(&envelope));

    Ok(())
}
