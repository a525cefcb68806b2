//! Error taxonomy for key-management cryptography

use thiserror::Error;

/// Errors produced by the encoding, RSA and AES services
///
/// Every variant is a typed, recoverable outcome. Nothing here is retried:
/// cryptographic failures are either permanent input errors or fatal
/// environment errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// Key generation failed inside the RNG or the RSA library
    #[error("key generation failed: {0}")]
    KeyGeneration(String),

    /// Key material could not be parsed or has the wrong size
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// Plaintext exceeds the RSA-OAEP capacity of the key
    #[error("plaintext too large: at most {max} bytes allowed, got {got}")]
    PlaintextTooLarge { max: usize, got: usize },

    /// Decryption failed
    ///
    /// Padding errors, corrupted ciphertext and key mismatches all map here
    /// and carry no detail, so callers cannot act as a padding oracle.
    #[error("decryption failed")]
    Decryption,

    /// Malformed base64 text
    #[error("encoding error: {0}")]
    Encoding(String),
}

impl From<base64::DecodeError> for CryptoError {
    fn from(e: base64::DecodeError) -> Self {
        CryptoError::Encoding(e.to_string())
    }
}

impl CryptoError {
    /// Returns true if the error was caused by caller-supplied input
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidKey(_) | Self::PlaintextTooLarge { .. } | Self::Encoding(_)
        )
    }
}
