use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::crypto::TokenSampling;
use crate::errors::{Result, SecretsError};

/// Upper bound on configured token length.
const MAX_TOKEN_LENGTH: usize = 4096;

/// Project-level configuration, loaded from `.fleet-secrets.toml`.
///
/// Every field has a default so the CLI works without any config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Environment variable that holds the 32-byte encryption key.
    #[serde(default = "default_key_env")]
    pub key_env: String,

    /// Token length used when `token` is run without `--length`.
    #[serde(default = "default_token_length")]
    pub token_length: usize,

    /// Use rejection sampling for tokens instead of legacy modulo mapping.
    #[serde(default)]
    pub uniform_tokens: bool,

    /// Log filter used when neither `FLEET_SECRETS_LOG` nor `--verbose` is set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_key_env() -> String {
    "FLEET_SECRETS_KEY".to_string()
}

fn default_token_length() -> usize {
    32
}

fn default_log_level() -> String {
    "warn".to_string()
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            key_env: default_key_env(),
            token_length: default_token_length(),
            uniform_tokens: false,
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the working directory.
    const FILE_NAME: &'static str = ".fleet-secrets.toml";

    /// Load settings from `<dir>/.fleet-secrets.toml`.
    ///
    /// If the file does not exist, defaults are returned.
    /// If the file exists but cannot be parsed or holds out-of-range
    /// values, an error is returned.
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            SecretsError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        settings.validate()?;
        tracing::debug!(path = %config_path.display(), "loaded settings");
        Ok(settings)
    }

    /// Reject values the CLI cannot act on.
    pub fn validate(&self) -> Result<()> {
        if self.key_env.trim().is_empty() {
            return Err(SecretsError::ConfigError("key_env cannot be empty".into()));
        }

        if self.token_length == 0 || self.token_length > MAX_TOKEN_LENGTH {
            return Err(SecretsError::ConfigError(format!(
                "token_length must be between 1 and {MAX_TOKEN_LENGTH} (got {})",
                self.token_length
            )));
        }

        Ok(())
    }

    /// Token sampling strategy selected by `uniform_tokens`.
    pub fn token_sampling(&self) -> TokenSampling {
        if self.uniform_tokens {
            TokenSampling::Uniform
        } else {
            TokenSampling::Modulo
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_settings_are_sensible() {
        let s = Settings::default();
        assert_eq!(s.key_env, "FLEET_SECRETS_KEY");
        assert_eq!(s.token_length, 32);
        assert!(!s.uniform_tokens);
        assert_eq!(s.log_level, "warn");
        assert!(s.validate().is_ok());
    }

    #[test]
    fn load_returns_defaults_when_no_config_file() {
        let tmp = TempDir::new().unwrap();
        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.key_env, "FLEET_SECRETS_KEY");
    }

    #[test]
    fn load_parses_toml_file() {
        let tmp = TempDir::new().unwrap();
        let config = r#"
key_env = "RUNNER_DB_KEY"
token_length = 48
uniform_tokens = true
log_level = "debug"
"#;
        fs::write(tmp.path().join(".fleet-secrets.toml"), config).unwrap();

        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.key_env, "RUNNER_DB_KEY");
        assert_eq!(settings.token_length, 48);
        assert_eq!(settings.token_sampling(), TokenSampling::Uniform);
        assert_eq!(settings.log_level, "debug");
    }

    #[test]
    fn load_uses_defaults_for_missing_fields() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".fleet-secrets.toml"), "token_length = 16\n").unwrap();

        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.token_length, 16);
        assert_eq!(settings.key_env, "FLEET_SECRETS_KEY");
        assert_eq!(settings.token_sampling(), TokenSampling::Modulo);
    }

    #[test]
    fn load_errors_on_invalid_toml() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".fleet-secrets.toml"), "not valid {{toml").unwrap();

        let result = Settings::load(tmp.path());
        assert!(matches!(result, Err(SecretsError::ConfigError(_))));
    }

    #[test]
    fn load_rejects_zero_token_length() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".fleet-secrets.toml"), "token_length = 0\n").unwrap();

        assert!(Settings::load(tmp.path()).is_err());
    }

    #[test]
    fn validate_rejects_blank_key_env() {
        let s = Settings {
            key_env: "  ".to_string(),
            ..Settings::default()
        };
        assert!(s.validate().is_err());
    }
}
