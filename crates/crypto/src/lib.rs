//! keyservice cryptographic operations
//!
//! This crate provides the primitives behind the key-management service:
//! - RSA-2048 key pair generation with PEM (SPKI / PKCS#8) encoding
//! - RSA-OAEP encryption and decryption (SHA-1 default, SHA-256 optional)
//! - AES-256-CBC with PKCS#7 padding and random key/IV generation
//! - Strict standard base64 helpers
//!
//! # Security Features
//!
//! - **Zeroization**: AES key/IV buffers and private key PEM text are cleared on drop
//! - **Opaque decryption errors**: padding, length and key mismatches all surface
//!   as [`CryptoError::Decryption`]
//! - **OAEP only**: PKCS#1 v1.5 encryption padding is not exposed
//!
//! # Example
//!
//! ```no_run
//! use keyservice_crypto::{AesCbcService, RsaKeyService};
//!
//! # fn example() -> Result<(), keyservice_crypto::CryptoError> {
//! let rsa = RsaKeyService::default();
//! let keypair = rsa.generate()?;
//! let ciphertext = rsa.encrypt(keypair.public_key_pem(), b"attack at dawn")?;
//! assert_eq!(rsa.decrypt(keypair.private_key_pem(), &ciphertext)?, b"attack at dawn");
//!
//! let aes = AesCbcService::new();
//! let material = aes.generate_key();
//! let sealed = aes.encrypt(&material, b"bulk data");
//! assert_eq!(aes.decrypt(&material, &sealed)?, b"bulk data");
//! # Ok(())
//! # }
//! ```

pub mod asymmetric;
pub mod encoding;
pub mod error;
pub mod helpers;
pub mod symmetric;
pub mod types;

pub use asymmetric::{
    parse_private_key_pem, parse_public_key_pem, public_key_pem_from_private, OaepHash,
    RsaKeyPair, RsaKeyService, RSA_KEY_BITS,
};
pub use encoding::{from_base64, to_base64};
pub use error::CryptoError;
pub use helpers::{generate_aes_key, generate_iv};
pub use symmetric::{AesCbcService, AES_BLOCK_SIZE};
pub use types::{AesKey, Iv128, SymmetricKeyMaterial, AES_256_KEY_SIZE, IV_SIZE};

// Re-export the underlying RSA crate for callers that need raw key types
pub use rsa;
