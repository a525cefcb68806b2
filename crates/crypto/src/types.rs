//! Zeroizing symmetric key types
//!
//! Key and IV buffers clear their memory on drop. `Debug` output never
//! includes the bytes.

use crate::encoding::{from_base64, to_base64};
use crate::error::CryptoError;
use crate::helpers::{generate_aes_key, generate_iv};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// AES-256 key length in bytes
pub const AES_256_KEY_SIZE: usize = 32;

/// CBC initialization vector length in bytes (one AES block)
pub const IV_SIZE: usize = 16;

/// AES-256 key (32 bytes) that zeroizes on drop
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct AesKey(pub(crate) [u8; AES_256_KEY_SIZE]);

impl AesKey {
    /// Create a new AES key from a 32-byte slice
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CryptoError> {
        let key: [u8; AES_256_KEY_SIZE] = bytes.try_into().map_err(|_| {
            CryptoError::InvalidKey(format!(
                "AES-256 key must be {} bytes, got {}",
                AES_256_KEY_SIZE,
                bytes.len()
            ))
        })?;
        Ok(AesKey(key))
    }

    /// Get a reference to the key bytes
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Get a mutable reference to the key bytes
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

impl PartialEq for AesKey {
    fn eq(&self, other: &Self) -> bool {
        self.0[..].ct_eq(&other.0[..]).into()
    }
}

impl Eq for AesKey {}

impl std::fmt::Debug for AesKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AesKey([REDACTED])")
    }
}

/// 128-bit IV (16 bytes) that zeroizes on drop
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct Iv128(pub(crate) [u8; IV_SIZE]);

impl Iv128 {
    /// Create a new IV from a 16-byte slice
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CryptoError> {
        let iv: [u8; IV_SIZE] = bytes.try_into().map_err(|_| {
            CryptoError::InvalidKey(format!(
                "IV must be {} bytes, got {}",
                IV_SIZE,
                bytes.len()
            ))
        })?;
        Ok(Iv128(iv))
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

impl PartialEq for Iv128 {
    fn eq(&self, other: &Self) -> bool {
        self.0[..].ct_eq(&other.0[..]).into()
    }
}

impl Eq for Iv128 {}

impl std::fmt::Debug for Iv128 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Iv128([REDACTED])")
    }
}

/// AES-256 key and CBC IV generated together
///
/// Each call to [`SymmetricKeyMaterial::generate`] draws a fresh key and a
/// fresh IV. Nothing stops a caller from encrypting several messages with
/// the same material; doing so reuses the IV under one key and leaks
/// equality of common plaintext prefixes. Generate new material per
/// message when that matters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymmetricKeyMaterial {
    key: AesKey,
    iv: Iv128,
}

impl SymmetricKeyMaterial {
    /// Generate a random key and IV from the OS RNG
    pub fn generate() -> Self {
        Self {
            key: generate_aes_key(),
            iv: generate_iv(),
        }
    }

    /// Build material from raw bytes
    pub fn from_parts(key: &[u8], iv: &[u8]) -> Result<Self, CryptoError> {
        Ok(Self {
            key: AesKey::from_slice(key)?,
            iv: Iv128::from_slice(iv)?,
        })
    }

    /// Build material from its base64 wire form
    pub fn from_base64(key_b64: &str, iv_b64: &str) -> Result<Self, CryptoError> {
        let key = zeroize::Zeroizing::new(from_base64(key_b64)?);
        let iv = from_base64(iv_b64)?;
        Self::from_parts(&key, &iv)
    }

    pub fn key(&self) -> &AesKey {
        &self.key
    }

    pub fn iv(&self) -> &Iv128 {
        &self.iv
    }

    /// Base64 text of the raw key bytes
    pub fn key_base64(&self) -> String {
        to_base64(self.key.as_slice())
    }

    /// Base64 text of the raw IV bytes
    pub fn iv_base64(&self) -> String {
        to_base64(self.iv.as_slice())
    }
}
