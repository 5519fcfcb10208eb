//! Random tokens for instance and callback credentials.
//!
//! Tokens are drawn from the OS CSPRNG and mapped onto a fixed 62-symbol
//! alphabet. The default mapping is `byte % 62`, which slightly favours
//! the first `256 % 62 = 8` symbols; existing token consumers rely on
//! that distribution. `TokenSampling::Uniform` uses rejection sampling
//! instead and gives every symbol the same probability.

use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::errors::{Result, SecretsError};

/// Token alphabet: digits, uppercase, lowercase.
pub const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Largest multiple of 62 that fits in a byte; bytes at or above it are
/// discarded by uniform sampling.
const UNIFORM_LIMIT: u8 = 248;

/// How random bytes are turned into alphabet symbols.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TokenSampling {
    /// `byte % 62`, one byte per symbol.
    #[default]
    Modulo,
    /// Rejection sampling; uniform over the alphabet.
    Uniform,
}

/// Generate a token of exactly `length` symbols using modulo mapping.
pub fn generate_token(length: usize) -> Result<String> {
    generate_token_with(length, TokenSampling::Modulo)
}

/// Generate a token of exactly `length` symbols with no alphabet bias.
pub fn generate_uniform_token(length: usize) -> Result<String> {
    generate_token_with(length, TokenSampling::Uniform)
}

/// Generate a token of exactly `length` symbols with the given sampling.
pub fn generate_token_with(length: usize, sampling: TokenSampling) -> Result<String> {
    let symbols = match sampling {
        TokenSampling::Modulo => {
            let mut data = vec![0u8; length];
            fill_random(&mut data)?;
            data.iter()
                .map(|b| ALPHABET[usize::from(*b) % ALPHABET.len()])
                .collect::<Vec<u8>>()
        }
        TokenSampling::Uniform => uniform_symbols(length)?,
    };

    tracing::debug!(length, ?sampling, "generated token");

    // Every byte comes from ALPHABET, which is ASCII.
    Ok(symbols.into_iter().map(char::from).collect())
}

fn uniform_symbols(length: usize) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(length);
    // 248/256 of bytes are accepted; over-draw a little to usually finish
    // in one read.
    let mut buf = vec![0u8; length + length / 16 + 8];

    while out.len() < length {
        fill_random(&mut buf)?;
        for b in buf.iter().copied().filter(|b| *b < UNIFORM_LIMIT) {
            if out.len() == length {
                break;
            }
            out.push(ALPHABET[usize::from(b) % ALPHABET.len()]);
        }
    }

    Ok(out)
}

fn fill_random(buf: &mut [u8]) -> Result<()> {
    OsRng
        .try_fill_bytes(buf)
        .map_err(|e| SecretsError::RandomSource(format!("getting random data: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_is_digits_upper_lower() {
        let expected: Vec<u8> = (b'0'..=b'9')
            .chain(b'A'..=b'Z')
            .chain(b'a'..=b'z')
            .collect();
        assert_eq!(ALPHABET.as_slice(), expected.as_slice());
    }

    #[test]
    fn zero_length_token_is_empty() {
        assert_eq!(generate_token(0).unwrap(), "");
        assert_eq!(generate_uniform_token(0).unwrap(), "");
    }

    #[test]
    fn uniform_token_has_requested_length() {
        for len in [1, 7, 64, 1000] {
            let token = generate_uniform_token(len).unwrap();
            assert_eq!(token.len(), len);
            assert!(token.bytes().all(|b| ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn uniform_limit_is_a_multiple_of_alphabet() {
        assert_eq!(usize::from(UNIFORM_LIMIT) % ALPHABET.len(), 0);
        assert!(usize::from(UNIFORM_LIMIT) + ALPHABET.len() > 256);
    }

    #[test]
    fn default_sampling_is_modulo() {
        assert_eq!(TokenSampling::default(), TokenSampling::Modulo);
    }
}
