//! AES-256-GCM sealing of at-rest secrets.
//!
//! Each call to `encrypt` draws a fresh random 12-byte nonce from the OS
//! and prepends it to the sealed payload. `decrypt` splits the nonce back
//! out before opening.
//!
//! Layout of an envelope:
//!   [ 12-byte nonce | ciphertext + 16-byte auth tag ]
//!
//! Keys are raw 32-byte material owned by the caller. No derivation or
//! padding happens here, and the key is never kept past a single call.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::errors::{Result, SecretsError};

/// Required key length in bytes (AES-256).
pub const KEY_LEN: usize = 32;

/// Size of the AES-256-GCM nonce in bytes.
pub const NONCE_LEN: usize = 12;

/// Size of the GCM authentication tag in bytes.
pub const TAG_LEN: usize = 16;

fn check_key(key: &[u8]) -> Result<()> {
    if key.len() != KEY_LEN {
        return Err(SecretsError::InvalidKeyLength {
            expected: KEY_LEN,
            actual: key.len(),
        });
    }
    Ok(())
}

/// Seal `plaintext` under a 32-byte `key`.
///
/// Returns the envelope `nonce || ciphertext || tag`.
pub fn encrypt(plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    check_key(key)?;

    let cipher = Aes256Gcm::new_from_slice(key)
        .map_err(|e| SecretsError::CipherInit(format!("creating cipher: {e}")))?;

    // A failed entropy read must abort the call, never fall back.
    let mut nonce = [0u8; NONCE_LEN];
    OsRng
        .try_fill_bytes(&mut nonce)
        .map_err(|e| SecretsError::NonceGeneration(e.to_string()))?;

    let sealed = cipher
        .encrypt(Nonce::from_slice(&nonce), plaintext)
        .map_err(|e| SecretsError::CipherInit(format!("sealing payload: {e}")))?;

    let mut envelope = Vec::with_capacity(NONCE_LEN + sealed.len());
    envelope.extend_from_slice(&nonce);
    envelope.extend_from_slice(&sealed);

    tracing::debug!(
        plaintext_len = plaintext.len(),
        envelope_len = envelope.len(),
        "sealed secret"
    );
    Ok(envelope)
}

/// Open an envelope produced by `encrypt`.
///
/// Every failure after the key-length check (short input, wrong key,
/// tampering) collapses into `SecretsError::DecryptionFailed`.
pub fn decrypt(envelope: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    check_key(key)?;

    if envelope.len() < NONCE_LEN {
        return Err(SecretsError::DecryptionFailed);
    }

    let cipher = Aes256Gcm::new_from_slice(key)
        .map_err(|e| SecretsError::CipherInit(format!("creating cipher: {e}")))?;

    let (nonce, sealed) = envelope.split_at(NONCE_LEN);
    let plaintext = cipher
        .decrypt(Nonce::from_slice(nonce), sealed)
        .map_err(|_| SecretsError::DecryptionFailed)?;

    tracing::debug!(envelope_len = envelope.len(), "opened secret");
    Ok(plaintext)
}

/// Seal a UTF-8 string. Same envelope as [`encrypt`].
pub fn encode_string(plaintext: &str, key: &[u8]) -> Result<Vec<u8>> {
    encrypt(plaintext.as_bytes(), key)
}

/// Open an envelope and return its payload as a `String`.
///
/// A payload that authenticates but is not valid UTF-8 is reported as
/// `DecryptionFailed` as well.
pub fn decode_string(envelope: &[u8], key: &[u8]) -> Result<String> {
    let plaintext = decrypt(envelope, key)?;
    String::from_utf8(plaintext).map_err(|_| SecretsError::DecryptionFailed)
}
