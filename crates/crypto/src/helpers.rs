//! Secure random helpers
//!
//! All key and IV material is drawn from the operating system RNG.

use crate::types::{AesKey, Iv128};
use rand::{rngs::OsRng, RngCore};

/// Generate a random 256-bit AES key
pub fn generate_aes_key() -> AesKey {
    let mut key = AesKey::default();
    OsRng.fill_bytes(key.as_mut_slice());
    key
}

/// Generate a random 128-bit initialization vector for CBC
pub fn generate_iv() -> Iv128 {
    let mut iv = Iv128::default();
    OsRng.fill_bytes(iv.as_mut_slice());
    iv
}
