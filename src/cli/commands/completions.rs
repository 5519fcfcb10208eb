//! `fleet-secrets completions`: write a shell completion script to stdout.
//!
//! Operators usually install it once per host, e.g.
//! `fleet-secrets completions bash > /etc/bash_completion.d/fleet-secrets`.

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::errors::{Result, SecretsError};

/// Execute the `completions` command.
pub fn execute(shell: &str) -> Result<()> {
    let shell = shell_from_name(shell)?;
    generate(shell, &mut Cli::command(), "fleet-secrets", &mut io::stdout());
    Ok(())
}

/// Map a user-typed shell name onto clap_complete's `Shell`.
fn shell_from_name(name: &str) -> Result<Shell> {
    let shell = match name.trim().to_ascii_lowercase().as_str() {
        "bash" => Shell::Bash,
        "zsh" => Shell::Zsh,
        "fish" => Shell::Fish,
        "elvish" => Shell::Elvish,
        "powershell" | "pwsh" | "ps" => Shell::PowerShell,
        other => {
            return Err(SecretsError::CommandFailed(format!(
                "no completions for shell '{other}' (try bash, zsh, fish, elvish or powershell)"
            )))
        }
    };
    Ok(shell)
}
