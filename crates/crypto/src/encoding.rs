//! Base64 helpers shared by the RSA and AES services
//!
//! Standard alphabet with padding, decoded strictly: whitespace, missing
//! padding and non-canonical trailing bits are all rejected. PEM framing is
//! not handled here; the `rsa` crate's PKCS#1/PKCS#8 codecs own it.

use crate::error::CryptoError;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

/// Encode bytes as standard base64
pub fn to_base64(bytes: impl AsRef<[u8]>) -> String {
    BASE64.encode(bytes)
}

/// Decode standard base64, rejecting malformed input
pub fn from_base64(text: &str) -> Result<Vec<u8>, CryptoError> {
    Ok(BASE64.decode(text)?)
}
