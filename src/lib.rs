//! keyservice: in-memory RSA key management and employee directory
//!
//! The crate ties the `keyservice-crypto` primitives to process-lifetime
//! state:
//! - [`KeyStore`] keeps generated RSA key pairs under sequential ids
//! - [`KeyManager`] generates into the store and serves public keys
//! - [`EmployeeDirectory`] is a validated CRUD list of employees
//!
//! The HTTP binding lives in the `keyservice-server` crate.

pub mod employees;
pub mod error;
pub mod facade;
pub mod prelude;
pub mod store;

pub use employees::{AgeInput, DirectoryError, Employee, EmployeeDirectory, EmployeeDraft};
pub use error::ServiceError;
pub use facade::KeyManager;
pub use store::{KeyPairRecord, KeyStore};

pub use keyservice_crypto as crypto;
