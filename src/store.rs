//! Append-only, lock-guarded store of generated RSA key pairs
//!
//! One `RwLock` guards the id counter and the id-to-record map together, so
//! id allocation and insertion happen as a single step and readers only
//! ever observe fully inserted records.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use keyservice_crypto::RsaKeyPair;
use parking_lot::RwLock;
use tracing::debug;
use zeroize::Zeroizing;

/// One stored RSA key pair
///
/// Records are immutable after insertion and shared as `Arc<KeyPairRecord>`.
pub struct KeyPairRecord {
    id: u64,
    public_key_pem: String,
    private_key_pem: Zeroizing<String>,
    created_at: DateTime<Utc>,
}

impl KeyPairRecord {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Public key in SPKI PEM form
    pub fn public_key_pem(&self) -> &str {
        &self.public_key_pem
    }

    /// Private key in PKCS#8 PEM form
    pub fn private_key_pem(&self) -> &str {
        &self.private_key_pem
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl std::fmt::Debug for KeyPairRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPairRecord")
            .field("id", &self.id)
            .field("public_key_pem", &self.public_key_pem)
            .field("private_key_pem", &"[REDACTED]")
            .field("created_at", &self.created_at)
            .finish()
    }
}

struct StoreInner {
    // Last id handed out; 0 means none yet.
    last_id: u64,
    records: BTreeMap<u64, Arc<KeyPairRecord>>,
}

/// Process-lifetime key pair store
///
/// Ids start at 1, strictly increase and are never reused. There is no
/// update or delete.
pub struct KeyStore {
    inner: RwLock<StoreInner>,
}

impl KeyStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                last_id: 0,
                records: BTreeMap::new(),
            }),
        }
    }

    /// Store a key pair and return its newly assigned id
    pub fn put(&self, keypair: RsaKeyPair) -> u64 {
        let (public_key_pem, private_key_pem) = keypair.into_parts();

        let mut inner = self.inner.write();
        let id = inner.last_id + 1;
        let record = KeyPairRecord {
            id,
            public_key_pem,
            private_key_pem,
            created_at: Utc::now(),
        };
        inner.records.insert(id, Arc::new(record));
        inner.last_id = id;
        drop(inner);

        debug!(key_id = id, "stored RSA key pair");
        id
    }

    /// Look up a key pair by id
    pub fn get(&self, id: u64) -> Option<Arc<KeyPairRecord>> {
        self.inner.read().records.get(&id).cloned()
    }

    /// Number of stored key pairs
    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for KeyStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("KeyStore")
            .field("last_id", &inner.last_id)
            .field("records", &inner.records.len())
            .finish()
    }
}

impl Default for KeyStore {
    fn default() -> Self {
        Self::new()
    }
}
