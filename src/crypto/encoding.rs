//! Base64 text encoding for envelopes and file blobs.
//!
//! Envelopes are raw bytes; configuration files and databases store them
//! as standard, padded base64.

use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::errors::{Result, SecretsError};

/// Encode bytes as standard base64.
pub fn to_base64(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

/// Decode standard base64, ignoring surrounding whitespace.
pub fn from_base64(text: &str) -> Result<Vec<u8>> {
    BASE64
        .decode(text.trim())
        .map_err(|e| SecretsError::InvalidEncoding(e.to_string()))
}

/// Read a whole file and return its base64 encoding.
///
/// Used to embed CA bundles and similar blobs in generated configuration.
pub fn file_to_base64(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(to_base64(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn decode_tolerates_trailing_newline() {
        assert_eq!(from_base64("aGVsbG8=\n").unwrap(), b"hello");
    }

    #[test]
    fn decode_rejects_garbage() {
        let err = from_base64("not base64!").unwrap_err();
        assert!(matches!(err, SecretsError::InvalidEncoding(_)));
    }

    #[test]
    fn file_is_encoded_verbatim() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ca.pem");
        std::fs::write(&path, b"-----BEGIN CERTIFICATE-----\n").unwrap();

        let encoded = file_to_base64(&path).unwrap();
        assert_eq!(
            from_base64(&encoded).unwrap(),
            b"-----BEGIN CERTIFICATE-----\n"
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = file_to_base64(&dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, SecretsError::Io(_)));
    }
}
