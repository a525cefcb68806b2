//! AES-256-CBC with PKCS#7 padding

use crate::encoding::{from_base64, to_base64};
use crate::error::CryptoError;
use crate::types::SymmetricKeyMaterial;
use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// AES-256-CBC key generation, encryption and decryption
///
/// Encryption is deterministic for a given key, IV and plaintext. The IV
/// comes from the [`SymmetricKeyMaterial`] passed in, so reusing one
/// material for many messages reuses the IV.
#[derive(Debug, Clone, Copy, Default)]
pub struct AesCbcService;

impl AesCbcService {
    pub fn new() -> Self {
        AesCbcService
    }

    /// Generate a fresh random key and IV
    pub fn generate_key(&self) -> SymmetricKeyMaterial {
        SymmetricKeyMaterial::generate()
    }

    /// Encrypt with PKCS#7 padding; output length is the next multiple of 16
    /// strictly greater than the plaintext length
    pub fn encrypt(&self, material: &SymmetricKeyMaterial, plaintext: &[u8]) -> Vec<u8> {
        Aes256CbcEnc::new(key_array(material), iv_array(material))
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext)
    }

    /// Decrypt and strip PKCS#7 padding
    ///
    /// Fails with [`CryptoError::Decryption`] if the ciphertext is empty,
    /// not block aligned, or the padding does not validate.
    pub fn decrypt(
        &self,
        material: &SymmetricKeyMaterial,
        ciphertext: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        if ciphertext.is_empty() || ciphertext.len() % AES_BLOCK_SIZE != 0 {
            return Err(CryptoError::Decryption);
        }

        Aes256CbcDec::new(key_array(material), iv_array(material))
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
            .map_err(|_| CryptoError::Decryption)
    }

    /// Encrypt and return base64 ciphertext
    pub fn encrypt_to_base64(&self, material: &SymmetricKeyMaterial, plaintext: &[u8]) -> String {
        to_base64(self.encrypt(material, plaintext))
    }

    /// Decode base64 ciphertext and decrypt it
    pub fn decrypt_from_base64(
        &self,
        material: &SymmetricKeyMaterial,
        ciphertext_b64: &str,
    ) -> Result<Vec<u8>, CryptoError> {
        let ciphertext = from_base64(ciphertext_b64)?;
        self.decrypt(material, &ciphertext)
    }
}

fn key_array(material: &SymmetricKeyMaterial) -> &aes::cipher::Key<Aes256CbcEnc> {
    (&material.key().0).into()
}

fn iv_array(material: &SymmetricKeyMaterial) -> &aes::cipher::Iv<Aes256CbcEnc> {
    (&material.iv().0).into()
}
