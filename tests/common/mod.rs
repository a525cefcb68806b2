//! Common test utilities for keyservice integration tests

use std::sync::Arc;

use keyservice::crypto::{from_base64, OaepHash, RsaKeyService};
use keyservice::{EmployeeDraft, KeyManager, KeyStore};

/// Plaintext used by round-trip tests
pub const TEST_PLAINTEXT: &[u8] = b"Hello, keyservice! This is test data for encryption.";

/// Manager with a fresh store for the given OAEP hash
pub fn manager(hash: OaepHash) -> KeyManager {
    KeyManager::new(RsaKeyService::new(hash), Arc::new(KeyStore::new()))
}

/// Decode a `public_key_base64` result back into PEM text
pub fn decode_pem(encoded: &str) -> String {
    String::from_utf8(from_base64(encoded).expect("valid base64")).expect("PEM is UTF-8")
}

/// Draft built from a JSON body
pub fn draft(body: serde_json::Value) -> EmployeeDraft {
    EmployeeDraft::from_json(&body)
}
