//! Cryptographic primitives for fleet-secrets.
//!
//! This module provides:
//! - AES-256-GCM sealing and opening of secrets (`cipher`)
//! - Base64 text encoding of envelopes and files (`encoding`)
//! - Argon2id password hashing (`password`)
//! - Alphanumeric random tokens (`token`)

pub mod cipher;
pub mod encoding;
pub mod password;
pub mod token;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, generate_token, ...};
pub use cipher::{decode_string, decrypt, encode_string, encrypt, KEY_LEN, NONCE_LEN};
pub use encoding::{file_to_base64, from_base64, to_base64};
pub use password::{hash_password, verify_password};
pub use token::{generate_token, generate_token_with, generate_uniform_token, TokenSampling};
