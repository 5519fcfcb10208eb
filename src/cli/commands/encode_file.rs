//! `fleet-secrets encode-file`: print a file as base64.

use std::path::Path;

use crate::cli::output;
use crate::crypto::file_to_base64;
use crate::errors::Result;

/// Execute the `encode-file` command.
pub fn execute(path: &Path) -> Result<()> {
    let encoded = file_to_base64(path)?;
    output::value(&encoded);
    Ok(())
}
