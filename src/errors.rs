use thiserror::Error;

/// All errors that can occur in fleet-secrets.
#[derive(Debug, Error)]
pub enum SecretsError {
    // --- Cipher errors ---
    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    /// Building the AES-256-GCM instance or sealing with it failed. Sealing
    /// only fails for inputs beyond the GCM length limit.
    #[error("failed to create cipher: {0}")]
    CipherInit(String),

    #[error("failed to generate nonce: {0}")]
    NonceGeneration(String),

    /// Deliberately carries no detail about which check failed.
    #[error("failed to decrypt text")]
    DecryptionFailed,

    // --- Token / hashing errors ---
    #[error("failed to read random data: {0}")]
    RandomSource(String),

    #[error("failed to hash password: {0}")]
    Hashing(String),

    // --- Encoding errors ---
    #[error("invalid base64 input: {0}")]
    InvalidEncoding(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    #[error("No encryption key available: {0}")]
    MissingKey(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Convenience type alias for fleet-secrets results.
pub type Result<T> = std::result::Result<T, SecretsError>;
