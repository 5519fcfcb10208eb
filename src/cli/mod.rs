//! CLI module: clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::crypto::KEY_LEN;
use crate::errors::{Result, SecretsError};

/// Environment variable consulted before prompting for a password.
pub const PASSWORD_ENV: &str = "FLEET_SECRETS_PASSWORD";

/// fleet-secrets CLI: secret sealing, tokens and password hashes.
#[derive(Parser)]
#[command(
    name = "fleet-secrets",
    about = "Seal runner secrets, mint tokens and hash passwords",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Read the 32-byte key from this file instead of the environment
    #[arg(long, global = true)]
    pub key_file: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Encrypt a value and print the base64 envelope
    Encrypt {
        /// Value to encrypt (omit to read stdin or prompt)
        value: Option<String>,
    },

    /// Decrypt a base64 envelope and print the value
    Decrypt {
        /// Base64 envelope produced by `encrypt`
        envelope: String,
    },

    /// Generate a random alphanumeric token
    Token {
        /// Token length (default: token_length from config)
        #[arg(short, long)]
        length: Option<usize>,

        /// Use unbiased rejection sampling
        #[arg(long)]
        uniform: bool,
    },

    /// Hash a password with Argon2id
    HashPassword,

    /// Check a password against a stored hash
    VerifyPassword {
        /// PHC hash string produced by `hash-password`
        hash: String,
    },

    /// Check that a value is a valid email address
    CheckEmail {
        /// Address to check
        email: String,
    },

    /// Check that a value contains only letters and numbers
    CheckAlnum {
        /// Value to check
        value: String,
    },

    /// Print a file's contents as base64
    EncodeFile {
        /// File to encode
        path: PathBuf,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Load the encryption key, trying in order:
/// 1. `--key-file <path>` (one trailing newline is stripped)
/// 2. The environment variable named by `Settings::key_env`
///
/// The length is not checked here; the cipher rejects anything but 32 bytes.
pub fn load_key(cli: &Cli, settings: &Settings) -> Result<Zeroizing<Vec<u8>>> {
    if let Some(path) = &cli.key_file {
        return read_key_file(path);
    }

    match std::env::var(&settings.key_env) {
        Ok(key) if !key.is_empty() => Ok(Zeroizing::new(key.into_bytes())),
        _ => Err(SecretsError::MissingKey(format!(
            "set {} or pass --key-file (expected {KEY_LEN} bytes)",
            settings.key_env
        ))),
    }
}

fn read_key_file(path: &Path) -> Result<Zeroizing<Vec<u8>>> {
    let mut bytes = Zeroizing::new(std::fs::read(path).map_err(|e| {
        SecretsError::MissingKey(format!("cannot read key file {}: {e}", path.display()))
    })?);

    // Only a key written with `echo` carries a line ending; a raw 32-byte
    // key may legitimately end in 0x0A.
    let strip = if bytes.len() == KEY_LEN + 2 && bytes.ends_with(b"\r\n") {
        2
    } else if bytes.len() == KEY_LEN + 1 && bytes.ends_with(b"\n") {
        1
    } else {
        0
    };
    let len = bytes.len() - strip;
    bytes.truncate(len);

    Ok(bytes)
}

/// Get a value to encrypt, from the argument, piped stdin, or a hidden prompt.
///
/// Returns `Zeroizing<String>` so the value is wiped from memory on drop.
pub fn read_secret_value(value: Option<&str>) -> Result<Zeroizing<String>> {
    if let Some(v) = value {
        output::warning("Value provided on command line; it may appear in shell history.");
        return Ok(Zeroizing::new(v.to_string()));
    }

    if !io::stdin().is_terminal() {
        let mut buf = Zeroizing::new(String::new());
        io::stdin().read_to_string(&mut buf)?;
        let trimmed_len = buf.trim_end_matches(['\r', '\n']).len();
        buf.truncate(trimmed_len);
        return Ok(buf);
    }

    let v = dialoguer::Password::new()
        .with_prompt("Enter value to encrypt")
        .interact()
        .map_err(|e| SecretsError::CommandFailed(format!("input prompt: {e}")))?;
    Ok(Zeroizing::new(v))
}

/// Get a password, from `FLEET_SECRETS_PASSWORD` or an interactive prompt.
///
/// `confirm` asks for the password twice (used when hashing a new one).
pub fn prompt_password(confirm: bool) -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var(PASSWORD_ENV) {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let mut prompt = dialoguer::Password::new().with_prompt("Password");
    if confirm {
        prompt = prompt.with_confirmation("Confirm password", "Passwords do not match");
    }

    let pw = prompt
        .interact()
        .map_err(|e| SecretsError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}
