//! keyservice prelude
//!
//! # Example
//!
//! ```rust
//! use keyservice::prelude::*;
//!
//! let directory = EmployeeDirectory::new();
//! assert!(directory.is_empty());
//! let manager = KeyManager::with_hash(OaepHash::Sha256);
//! assert!(manager.public_key_base64(1).is_none());
//! ```

pub use crate::employees::{Employee, EmployeeDirectory, EmployeeDraft};
pub use crate::error::ServiceError;
pub use crate::facade::KeyManager;
pub use crate::store::{KeyPairRecord, KeyStore};

// Re-export crypto types
pub use keyservice_crypto::{
    AesCbcService, CryptoError, OaepHash, RsaKeyPair, RsaKeyService, SymmetricKeyMaterial,
};
