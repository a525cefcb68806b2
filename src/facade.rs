//! Key management boundary used by the HTTP layer

use std::sync::Arc;

use keyservice_crypto::{to_base64, CryptoError, OaepHash, RsaKeyService};
use tracing::{debug, info, warn};

use crate::error::ServiceError;
use crate::store::{KeyPairRecord, KeyStore};

/// Generates RSA key pairs into a [`KeyStore`] and serves their public keys
///
/// The store is injected so several managers (or tests) can share one.
#[derive(Debug, Clone)]
pub struct KeyManager {
    rsa: RsaKeyService,
    store: Arc<KeyStore>,
}

impl KeyManager {
    pub fn new(rsa: RsaKeyService, store: Arc<KeyStore>) -> Self {
        Self { rsa, store }
    }

    /// Manager over a fresh, empty store
    pub fn with_hash(hash: OaepHash) -> Self {
        Self::new(RsaKeyService::new(hash), Arc::new(KeyStore::new()))
    }

    pub fn oaep_hash(&self) -> OaepHash {
        self.rsa.hash
    }

    pub fn store(&self) -> &Arc<KeyStore> {
        &self.store
    }

    /// Generate a 2048-bit key pair, store it and return its id
    ///
    /// CPU bound; async callers should run it on a blocking thread.
    pub fn generate_and_store(&self) -> Result<u64, CryptoError> {
        let keypair = self.rsa.generate().map_err(|e| {
            warn!(error = %e, "RSA key generation failed");
            e
        })?;
        let id = self.store.put(keypair);
        info!(key_id = id, "generated RSA key pair");
        Ok(id)
    }

    /// Base64 of the PEM public key stored under `id`
    ///
    /// The encoded bytes are the PEM text itself, header lines included.
    pub fn public_key_base64(&self, id: u64) -> Option<String> {
        let record = self.store.get(id)?;
        debug!(key_id = id, "serving public key");
        Some(to_base64(record.public_key_pem()))
    }

    /// RSA-OAEP encrypt `plaintext` with the public key stored under `id`
    pub fn encrypt_for(&self, id: u64, plaintext: &[u8]) -> Result<Vec<u8>, ServiceError> {
        let record = self.record(id)?;
        Ok(self.rsa.encrypt(record.public_key_pem(), plaintext)?)
    }

    /// RSA-OAEP decrypt `ciphertext` with the private key stored under `id`
    pub fn decrypt_with(&self, id: u64, ciphertext: &[u8]) -> Result<Vec<u8>, ServiceError> {
        let record = self.record(id)?;
        Ok(self.rsa.decrypt(record.private_key_pem(), ciphertext)?)
    }

    fn record(&self, id: u64) -> Result<Arc<KeyPairRecord>, ServiceError> {
        self.store.get(id).ok_or(ServiceError::KeyNotFound { id })
    }
}

impl Default for KeyManager {
    fn default() -> Self {
        Self::with_hash(OaepHash::default())
    }
}
