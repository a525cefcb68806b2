//! Unified error type for the keyservice public API
//!
//! The crypto crate and the employee directory keep their own error enums;
//! `ServiceError` wraps them so callers (the HTTP layer in particular) can
//! match on one type.
//!
//! # Example
//!
//! ```no_run
//! use keyservice::{KeyManager, ServiceError};
//!
//! fn seal(manager: &KeyManager, id: u64) -> Result<Vec<u8>, ServiceError> {
//!     manager.encrypt_for(id, b"hello")
//! }
//! ```

use keyservice_crypto::CryptoError;
use thiserror::Error;

use crate::employees::DirectoryError;

/// Unified error type for all keyservice operations
///
/// # Error Categories
///
/// - **Crypto**: key generation, malformed keys, oversized plaintext,
///   decryption and encoding failures
/// - **KeyNotFound**: no key pair stored under the requested id
/// - **Directory**: employee validation, duplicate or lookup failures
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Cryptographic operation error
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// No key pair with this id
    #[error("Key not found")]
    KeyNotFound { id: u64 },

    /// Employee directory error
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

impl ServiceError {
    /// Returns true if the requested resource does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::KeyNotFound { .. } | Self::Directory(DirectoryError::NotFound)
        )
    }

    /// Returns true if the error was caused by caller input rather than
    /// by the service itself
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::Crypto(e) => e.is_input_error(),
            Self::KeyNotFound { .. } | Self::Directory(_) => true,
        }
    }

    /// Returns true if this is a cryptographic error
    pub fn is_crypto_error(&self) -> bool {
        matches!(self, Self::Crypto(_))
    }
}
