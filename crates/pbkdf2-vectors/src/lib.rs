//! `pbkdf2-vectors` — PBKDF2 known-answer vectors for `deriveBits` /
//! `deriveKey` conformance testing.
//!
//! Inert fixture data for harnesses exercising a platform key-derivation
//! API: fixed passwords and salts, the expected leading 256 bits of PBKDF2
//! output for every covered parameter tuple, and the key types a derived
//! result must import as. This crate derives nothing itself; its own test
//! suite cross-checks the frozen table against `ring::pbkdf2`.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod derived_key;
pub mod error;
pub mod params;
pub mod provider;
pub mod vectors;

pub use derived_key::{DerivedKeyAlgorithm, DerivedKeyType, KeyUsage, DERIVED_KEY_TYPES};
pub use error::VectorError;
pub use params::{HashAlgorithm, Iterations, PasswordId, SaltId};
pub use provider::{test_data, TestData};
pub use vectors::{
    expected, expected_for_names, vector, DerivationVector, DERIVATIONS, DERIVED_LEN,
};
